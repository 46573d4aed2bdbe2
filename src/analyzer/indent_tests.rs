use super::*;

fn parse(content: &str) -> Vec<FunctionRecord> {
    IndentTracker::python(4).parse(content)
}

#[test]
fn simple_function() {
    let content = "def greet(name):\n    print(name)\nprint('done')\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "greet");
    assert_eq!(records[0].start_line, 1);
    assert_eq!(records[0].end_line, 2);
    assert_eq!(records[0].max_depth, 1);
}

#[test]
fn depth_from_indent_distance() {
    let content = "def deep(x):\n    if a:\n        if b:\n            work()\n    return x\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].max_depth, 3);
    assert_eq!(records[0].end_line, 5);
}

#[test]
fn method_indent_is_relative_to_signature() {
    let content = "class Greeter:\n    def hello(self):\n        return 'hi'\n\nprint(Greeter)\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "hello");
    assert_eq!(records[0].start_line, 2);
    assert_eq!(records[0].end_line, 4);
    assert_eq!(records[0].max_depth, 1);
}

#[test]
fn def_at_same_indent_interrupts() {
    let content = "def first():\n    pass\n\n\ndef second():\n    pass\n";
    let records = parse(content);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "first");
    assert_eq!(records[0].end_line, 4);
    assert_eq!(records[0].line_count, 4);
    assert_eq!(records[1].name, "second");
    assert_eq!(records[1].start_line, 5);
    assert_eq!(records[1].end_line, 6);
}

#[test]
fn async_def_is_a_boundary() {
    let content = "async def fetch(url):\n    return await get(url)\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "fetch");
}

#[test]
fn blank_and_comment_lines_do_not_close() {
    let content = "def f():\n    x = 1\n# a module comment\n\n    return x\nprint(f())\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].end_line, 5);
    assert_eq!(records[0].line_count, 5);
}

#[test]
fn unterminated_function_closes_at_eof() {
    let content = "def open_ended():\n    while True:\n        spin()\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].end_line, 3);
    assert_eq!(records[0].max_depth, 2);
}

#[test]
fn configured_indent_width_scales_depth() {
    let content = "def f():\n  if a:\n    work()\n";
    let records = IndentTracker::python(2).parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].max_depth, 2);

    let records = IndentTracker::python(4).parse(content);
    assert_eq!(records[0].max_depth, 1);
}

#[test]
fn lambda_is_not_a_boundary() {
    let content = "handler = lambda x: x + 1\n";
    assert!(parse(content).is_empty());
}
