use std::path::Path;

use super::*;

const WORKFLOW: &str = r"name: Deploy
on:
  push:
    branches: [main]
env:
  AWS_REGION: ${{ vars.AWS_REGION }}
  AWS_ACCOUNT_ID: ${{ secrets.AWS_ACCOUNT_ID }}
  SERVICE_NAME: my-service
  REPLICAS: 2
jobs:
  deploy:
    runs-on: ubuntu-latest
";

fn path() -> &'static Path {
    Path::new(".github/workflows/deploy.yml")
}

#[test]
fn returns_env_block_in_order() {
    let env = extract_workflow_env(WORKFLOW, path()).unwrap();
    let keys: Vec<_> = env.keys().map(String::as_str).collect();
    assert_eq!(keys, ["AWS_REGION", "AWS_ACCOUNT_ID", "SERVICE_NAME", "REPLICAS"]);
    assert_eq!(
        env["SERVICE_NAME"],
        serde_yaml::Value::String("my-service".to_string())
    );
}

#[test]
fn missing_env_block_is_empty() {
    let env = extract_workflow_env("name: Deploy\njobs: {}\n", path()).unwrap();
    assert!(env.is_empty());
}

#[test]
fn null_env_block_is_empty() {
    let env = extract_workflow_env("name: Deploy\nenv:\n", path()).unwrap();
    assert!(env.is_empty());
}

#[test]
fn malformed_document_is_parse_error() {
    let err = extract_workflow_env("env: [unclosed\n", path()).unwrap_err();
    assert!(matches!(err, EnvGuardError::WorkflowParse { .. }));
    assert!(err.to_string().contains("deploy.yml"));
}

#[test]
fn non_mapping_document_is_parse_error() {
    let err = extract_workflow_env("just a scalar\n", path()).unwrap_err();
    assert!(matches!(err, EnvGuardError::WorkflowParse { .. }));
}
