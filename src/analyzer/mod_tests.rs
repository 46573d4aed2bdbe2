use super::*;

#[test]
fn record_counts_lines_inclusively() {
    let record = FunctionRecord::new("f".to_string(), 10, 14, 2);
    assert_eq!(record.line_count, 5);

    let single = FunctionRecord::new("g".to_string(), 7, 7, 0);
    assert_eq!(single.line_count, 1);
}

#[test]
fn python_tracker_uses_registry_indent_width() {
    let tracker = tracker_for(Lang::Python);
    let records =
        tracker.parse("def deep():\n    if a:\n        if b:\n            work()\n");
    assert_eq!(records.len(), 1);
    // Three levels at the registry's 4-space width.
    assert_eq!(records[0].max_depth, 3);
}

#[test]
fn tracker_dispatch_matches_language_strategy() {
    let cases: [(Lang, &str, &str); 5] = [
        (Lang::Rust, "fn main() {\n    go();\n}\n", "main"),
        (
            Lang::TypeScript,
            "function greet() {\n    return 1;\n}\n",
            "greet",
        ),
        (
            Lang::Dart,
            "void greet() {\n  print('hi');\n}\n",
            "greet",
        ),
        (
            Lang::Elixir,
            "def greet do\n  :ok\nend\n",
            "greet",
        ),
        (Lang::Python, "def greet():\n    pass\n", "greet"),
    ];

    for (lang, content, expected) in cases {
        let tracker = tracker_for(lang);
        let records = tracker.parse(content);
        assert_eq!(records.len(), 1, "one function for {}", lang.name());
        assert_eq!(records[0].name, expected);
    }
}
