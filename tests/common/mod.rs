#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the env-guard binary.
#[macro_export]
macro_rules! env_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("env-guard"))
    };
}

pub const DOCKERFILE: &str = r#"FROM python:3.11-slim
LABEL env.runtime.DB_HOST='{"required": true, "description": "Database host"}'
LABEL env.runtime.DB_NAME='{"required": true}'
LABEL env.cicd.AWS_REGION='{"required": true}'
LABEL env.cicd.AWS_ACCOUNT_ID='{"required": true}'
CMD ["mxcp", "serve"]
"#;

pub const DYNAMIC_SCRIPT: &str = r#"#!/bin/bash
set -euo pipefail
LABELS=$(docker inspect --format '{{json .Config.Labels}}' "$IMAGE_URI")
RUNTIME_VARS=$(echo "$LABELS" | jq -r 'keys[] | select(startswith("env.runtime."))')
"#;

pub const WORKFLOW: &str = r"name: Deploy
on: [push]
env:
  AWS_REGION: us-east-1
  AWS_ACCOUNT_ID: ${{ secrets.AWS_ACCOUNT_ID }}
  SERVICE_NAME: mxcp-service
jobs:
  deploy:
    runs-on: ubuntu-latest
";

pub const APP_CONFIG: &str = r"mxcp: 1
projects:
  default:
    profiles:
      default:
        secrets:
          - name: db
            parameters:
              host: ${DB_HOST}
              database: ${DB_NAME}
              project: ${{ cookiecutter.project_name }}
";

pub const CONFIG_ENV: &str = "# Non-sensitive settings\nLOG_LEVEL=info\nSERVICE_PORT=\"8000\"\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture whose five sources are mutually consistent.
    pub fn consistent() -> Self {
        let fixture = Self::new();
        fixture.create_file("deployment/Dockerfile", DOCKERFILE);
        fixture.create_file(".github/scripts/deploy-app-runner.sh", DYNAMIC_SCRIPT);
        fixture.create_file(".github/workflows/deploy.yml", WORKFLOW);
        fixture.create_file("deployment/mxcp-user-config.yml", APP_CONFIG);
        fixture.create_file("deployment/config.env", CONFIG_ENV);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Removes a file from the temp directory.
    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an env-guard config file in the root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".env-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
