use super::*;
use crate::checker::Findings;

#[test]
fn json_summary_counts() {
    let mut findings = Findings::new();
    findings.error("Potential secret DB_TOKEN found in config.env");
    findings.warning("CI/CD variable AWS_REGION used in workflow but not documented in Docker labels");
    findings.warning("another");
    let report = Report {
        findings,
        used_templates: true,
    };

    let output = JsonFormatter.format(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["passed"], false);
    assert_eq!(parsed["summary"]["errors"], 1);
    assert_eq!(parsed["summary"]["warnings"], 2);
    assert_eq!(parsed["used_templates"], true);
    assert_eq!(
        parsed["errors"][0],
        "Potential secret DB_TOKEN found in config.env"
    );
}

#[test]
fn json_clean_report_passes() {
    let output = JsonFormatter.format(&Report::default()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["summary"]["passed"], true);
    assert_eq!(parsed["errors"].as_array().map(Vec::len), Some(0));
    assert_eq!(parsed["warnings"].as_array().map(Vec::len), Some(0));
}
