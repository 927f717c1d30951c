//! The built-in Python project blueprint.
//!
//! [`python_project`] is the table every `pyscaff new` run is generated
//! from: ten directories followed by twenty-two files, in write order. File
//! bodies live in the [`content`] module as plain constants so the table
//! stays readable.

use pyscaff_core::domain::{Blueprint, DirectorySpec, DomainError, FileSpec};

/// Relative path of the script that is made executable.
pub const SETUP_SCRIPT: &str = "scripts/setup_dev_env.sh";

/// Directories created before any file is written.
pub const DIRECTORIES: &[&str] = &[
    "src/modules",
    "src/utils",
    "tests",
    "docs/api_docs",
    "scripts",
    "notebooks",
    "data/raw",
    "data/processed",
    "configs",
    ".vscode",
];

/// Build the Python project blueprint.
pub fn python_project() -> Result<Blueprint, DomainError> {
    let mut builder = Blueprint::builder()
        .name("python")
        .description("Python project with src/tests layout, docs, and VS Code settings");

    for dir in DIRECTORIES {
        builder = builder.directory(DirectorySpec::new(*dir));
    }

    builder
        .file(FileSpec::literal(".gitignore", content::GITIGNORE))
        .file(FileSpec::literal("requirements.txt", content::REQUIREMENTS))
        .file(FileSpec::parameterized("pyproject.toml", content::PYPROJECT))
        .file(FileSpec::literal("src/main.py", content::MAIN_PY))
        .file(FileSpec::literal("src/__init__.py", ""))
        .file(FileSpec::literal("src/modules/__init__.py", ""))
        .file(FileSpec::literal("src/modules/module1.py", content::MODULE1_PY))
        .file(FileSpec::literal("src/modules/module2.py", content::MODULE2_PY))
        .file(FileSpec::literal("src/utils/__init__.py", ""))
        .file(FileSpec::literal("src/utils/helper_functions.py", content::HELPERS_PY))
        .file(FileSpec::literal("tests/__init__.py", ""))
        .file(FileSpec::literal("tests/test_module1.py", content::TEST_MODULE1_PY))
        .file(FileSpec::literal("tests/test_module2.py", content::TEST_MODULE2_PY))
        .file(FileSpec::parameterized("docs/README.md", content::README))
        .file(FileSpec::parameterized("docs/CHANGELOG.md", content::CHANGELOG))
        .file(FileSpec::literal(SETUP_SCRIPT, content::SETUP_DEV_ENV).executable())
        .file(FileSpec::literal("data/.gitkeep", ""))
        .file(FileSpec::parameterized("configs/config.yaml", content::CONFIG_YAML))
        .file(FileSpec::literal(".env", content::DOTENV))
        .file(FileSpec::literal("LICENSE", content::LICENSE))
        .file(FileSpec::literal(".vscode/settings.json", content::VSCODE_SETTINGS))
        .file(FileSpec::literal(".vscode/launch.json", content::VSCODE_LAUNCH))
        .build()
}

/// File bodies. `{{PROJECT_NAME}}` and `{{DATE}}` are only expanded in
/// files registered with [`FileSpec::parameterized`].
pub mod content {
    pub const GITIGNORE: &str = "\
__pycache__/
*.pyc
.env
/data/*
!/data/.gitkeep
.venv/
*.log
";

    pub const REQUIREMENTS: &str = "\
python-dotenv==1.0.1
pytest==8.3.2
black==24.8.0
flake8==7.1.1
";

    pub const PYPROJECT: &str = r#"[project]
name = "{{PROJECT_NAME}}"
version = "0.1.0"
dependencies = [
    "python-dotenv>=1.0.1",
    "pytest>=8.3.2",
]

[tool.black]
line-length = 88

[tool.pytest.ini_options]
minversion = "6.0"
addopts = "-ra -q"
testpaths = ["tests"]
"#;

    pub const MAIN_PY: &str = r#"from modules.module1 import some_function
from utils.helper_functions import some_helper

def main():
    result = some_function()
    print(some_helper(result))

if __name__ == "__main__":
    main()
"#;

    pub const MODULE1_PY: &str = r#"def some_function():
    return "Hello from module1"
"#;

    pub const MODULE2_PY: &str = r#"def another_function():
    return "Hello from module2"
"#;

    pub const HELPERS_PY: &str = r#"def some_helper(data):
    return f"Processed: {data}"
"#;

    pub const TEST_MODULE1_PY: &str = r#"import pytest
from src.modules.module1 import some_function

def test_some_function():
    assert some_function() == "Hello from module1"
"#;

    pub const TEST_MODULE2_PY: &str = r#"import pytest
from src.modules.module2 import another_function

def test_another_function():
    assert another_function() == "Hello from module2"
"#;

    pub const README: &str = r#"# {{PROJECT_NAME}}
A Python project template.

## Setup
1. Create virtual environment: `python -m venv .venv`
2. Activate: `source .venv/bin/activate` (Linux/Mac) or `.venv\Scripts\activate` (Windows)
3. Install dependencies: `pip install -r requirements.txt`

## Running
Run `python src/main.py`

## Project
`{{PROJECT_NAME}}` was generated with pyscaff.
"#;

    pub const CHANGELOG: &str = "\
# Changelog
## [0.1.0] - {{DATE}}
- Initial project setup
";

    pub const SETUP_DEV_ENV: &str = "\
#!/bin/bash
python -m venv .venv
source .venv/bin/activate
pip install --upgrade pip
pip install -r requirements.txt
";

    pub const CONFIG_YAML: &str = "\
app:
  name: {{PROJECT_NAME}}
  debug: true
";

    pub const DOTENV: &str = "\
# Environment variables
# EXAMPLE_API_KEY=your_api_key_here
";

    pub const LICENSE: &str = "\
MIT License

Copyright (c) 2025 Your Name

Permission is hereby granted, free of charge, to any person obtaining a copy...
";

    pub const VSCODE_SETTINGS: &str = r#"{
    "python.pythonPath": ".venv/bin/python",
    "python.linting.enabled": true,
    "python.linting.flake8Enabled": true,
    "python.formatting.provider": "black",
    "python.testing.pytestEnabled": true,
    "python.testing.pytestArgs": ["tests"]
}
"#;

    pub const VSCODE_LAUNCH: &str = r#"{
    "version": "0.2.0",
    "configurations": [
        {
            "name": "Python: Current File",
            "type": "python",
            "request": "launch",
            "program": "${file}",
            "console": "integratedTerminal"
        }
    ]
}
"#;
}
