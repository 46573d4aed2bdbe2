use super::*;

fn parse(content: &str) -> Vec<FunctionRecord> {
    KeywordTracker::elixir().parse(content)
}

#[test]
fn simple_def_in_module() {
    let content = "defmodule Demo do\n  def greet(name) do\n    IO.puts(name)\n  end\nend\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "greet");
    assert_eq!(records[0].start_line, 2);
    assert_eq!(records[0].end_line, 4);
    assert_eq!(records[0].line_count, 3);
    assert_eq!(records[0].max_depth, 0);
}

#[test]
fn defp_and_defmacro_are_boundaries() {
    let content = "defp hidden do\n  1\nend\ndefmacro gen(x) do\n  x\nend\n";
    let records = parse(content);
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["hidden", "gen"]);
}

#[test]
fn defmodule_is_not_a_boundary() {
    let content = "defmodule Empty do\nend\n";
    assert!(parse(content).is_empty());
}

#[test]
fn nested_fn_and_case_report_depth_two() {
    let content = "def run(list) do\n  Enum.each(list, fn item ->\n    case item do\n      :ok -> log()\n      _ -> skip()\n    end\n  end)\nend\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].max_depth, 2);
}

#[test]
fn single_case_reports_depth_one() {
    let content = "def route(conn) do\n  case conn do\n    :ok -> handle()\n    :err -> fail()\n  end\nend\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].max_depth, 1);
}

#[test]
fn inline_do_clause_is_skipped() {
    let content = "def ok?, do: true\ndef full do\n  1\nend\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "full");
}

#[test]
fn consecutive_clauses_yield_separate_records() {
    let content = "def fact(0) do\n  1\nend\n\ndef fact(n) do\n  n * fact(n - 1)\nend\n";
    let records = parse(content);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].start_line, 1);
    assert_eq!(records[0].end_line, 3);
    assert_eq!(records[1].start_line, 5);
    assert_eq!(records[1].end_line, 7);
}

#[test]
fn unterminated_function_closes_at_eof() {
    let content = "def broken do\n  work()\n";
    let records = parse(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].end_line, 2);
    assert_eq!(records[0].line_count, 2);
}

#[test]
fn question_and_bang_names_are_captured() {
    let content = "def valid?(x) do\n  x\nend\ndef save!(x) do\n  x\nend\n";
    let names: Vec<String> = parse(content).into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["valid?", "save!"]);
}

#[test]
fn block_delta_counts_do_end_and_fn_tokens() {
    assert_eq!(net_block_delta("def run do"), 1);
    assert_eq!(net_block_delta("end"), -1);
    assert_eq!(net_block_delta("case x do"), 1);
    assert_eq!(net_block_delta("Enum.map(xs, fn x ->"), 1);
    assert_eq!(net_block_delta("fn_helper(x)"), 0);
    assert_eq!(net_block_delta("send(pid, :msg)"), 0);
    assert_eq!(net_block_delta("if x, do: y"), 0);
    assert_eq!(net_block_delta("x # do"), 0);
}
