use super::*;

use std::path::Path;

use crate::analyzer::BraceTracker;

fn lenient_thresholds() -> Thresholds {
    Thresholds::new(
        ThresholdPair::new(1000, 2000),
        ThresholdPair::new(30, 50),
        ThresholdPair::new(4, 6),
    )
}

fn long_function(body_lines: usize) -> String {
    let mut content = String::from("fn big() {\n");
    for _ in 0..body_lines {
        content.push_str("    work();\n");
    }
    content.push_str("}\n");
    content
}

#[test]
fn long_function_yields_one_error() {
    // 53 body lines plus signature and closing brace: 55 lines.
    let content = long_function(53);
    let tracker = BraceTracker::rust();
    let issues = check_file(
        Path::new("src/big.rs"),
        &content,
        &tracker,
        &lenient_thresholds(),
        CheckSelection::all(),
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].metric, MetricKind::FunctionLength);
    assert_eq!(issues[0].value, 55);
    assert_eq!(issues[0].limit, 50);
    assert_eq!(issues[0].line, Some(1));
    assert_eq!(issues[0].name.as_deref(), Some("big"));
    assert_eq!(issues[0].message, "src/big.rs:1 big (55 lines)");
}

#[test]
fn function_between_warn_and_error_yields_warning() {
    let content = long_function(38);
    let tracker = BraceTracker::rust();
    let issues = check_file(
        Path::new("src/mid.rs"),
        &content,
        &tracker,
        &lenient_thresholds(),
        CheckSelection::all(),
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].value, 40);
    assert_eq!(issues[0].limit, 30);
}

#[test]
fn long_file_yields_file_length_issue() {
    let content = "// filler\n".repeat(320);
    let tracker = BraceTracker::rust();
    let thresholds = Thresholds::new(
        ThresholdPair::new(300, 500),
        ThresholdPair::new(30, 50),
        ThresholdPair::new(4, 6),
    );
    let issues = check_file(
        Path::new("src/long.rs"),
        &content,
        &tracker,
        &thresholds,
        CheckSelection::all(),
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].metric, MetricKind::FileLength);
    assert_eq!(issues[0].value, 320);
    assert_eq!(issues[0].limit, 300);
    assert_eq!(issues[0].line, None);
    assert_eq!(issues[0].message, "src/long.rs (320 lines, limit: 300)");
}

#[test]
fn deep_nesting_yields_nesting_issue() {
    let mut content = String::from("fn deep() {\n");
    for _ in 0..5 {
        content.push_str("    if x {\n");
    }
    content.push_str("        work();\n");
    for _ in 0..5 {
        content.push_str("    }\n");
    }
    content.push_str("}\n");

    let tracker = BraceTracker::rust();
    let issues = check_file(
        Path::new("src/deep.rs"),
        &content,
        &tracker,
        &lenient_thresholds(),
        CheckSelection::all(),
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].metric, MetricKind::NestingDepth);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].value, 5);
}

#[test]
fn selection_limits_checks() {
    let content = long_function(60);
    let tracker = BraceTracker::rust();
    let thresholds = Thresholds::new(
        ThresholdPair::new(10, 20),
        ThresholdPair::new(30, 50),
        ThresholdPair::new(4, 6),
    );

    let only_file = CheckSelection {
        file_length: true,
        functions: false,
        nesting: false,
    };
    let issues = check_file(Path::new("a.rs"), &content, &tracker, &thresholds, only_file);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].metric, MetricKind::FileLength);

    let only_functions = CheckSelection {
        file_length: false,
        functions: true,
        nesting: false,
    };
    let issues = check_file(
        Path::new("a.rs"),
        &content,
        &tracker,
        &thresholds,
        only_functions,
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].metric, MetricKind::FunctionLength);
}

#[test]
fn clean_file_yields_no_issues() {
    let content = "fn tiny() {\n    go();\n}\n";
    let tracker = BraceTracker::rust();
    let issues = check_file(
        Path::new("src/ok.rs"),
        &content,
        &tracker,
        &lenient_thresholds(),
        CheckSelection::all(),
    );
    assert!(issues.is_empty());
}
