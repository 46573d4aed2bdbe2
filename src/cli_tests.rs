use super::*;

use crate::language::Lang;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("smell-guard").chain(args.iter().copied()))
        .expect("args parse")
}

#[test]
fn defaults() {
    let cli = parse(&[]);
    assert_eq!(cli.directory, PathBuf::from("."));
    assert_eq!(cli.check, CheckType::All);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.languages.is_none());
    assert!(!cli.errors_only);
    assert!(!cli.warnings_only);
    assert!(!cli.no_config);
    assert!(!cli.gitignore);
    assert!(!cli.quiet);
    assert!(cli.exclude.is_empty());
}

#[test]
fn check_type_names() {
    assert_eq!(parse(&["-c", "file-length"]).check, CheckType::FileLength);
    assert_eq!(parse(&["--check", "functions"]).check, CheckType::Functions);
    assert_eq!(parse(&["--check", "nesting"]).check, CheckType::Nesting);
}

#[test]
fn check_type_maps_to_selection() {
    let selection = CheckType::Functions.selection();
    assert!(!selection.file_length);
    assert!(selection.functions);
    assert!(!selection.nesting);

    assert_eq!(CheckType::All.selection(), CheckSelection::all());
}

#[test]
fn format_json() {
    assert_eq!(parse(&["-f", "json"]).format, OutputFormat::Json);
}

#[test]
fn invalid_format_is_rejected() {
    let result = Cli::try_parse_from(["smell-guard", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn severity_flags_map_to_filter() {
    assert_eq!(parse(&[]).severity_filter(), SeverityFilter::All);
    assert_eq!(parse(&["-e"]).severity_filter(), SeverityFilter::ErrorsOnly);
    assert_eq!(parse(&["-w"]).severity_filter(), SeverityFilter::WarningsOnly);
}

#[test]
fn errors_and_warnings_flags_conflict() {
    let result = Cli::try_parse_from(["smell-guard", "-e", "-w"]);
    assert!(result.is_err());
}

#[test]
fn exclude_accumulates() {
    let cli = parse(&["-x", "**/gen/**", "--exclude", "**/*.pb.rs"]);
    assert_eq!(cli.exclude, ["**/gen/**", "**/*.pb.rs"]);
}

#[test]
fn threshold_overrides_apply_on_top_of_defaults() {
    let cli = parse(&["--func-warn", "20", "--nest-error", "8"]);
    let mut thresholds = Lang::Rust.default_thresholds();
    cli.apply_threshold_overrides(&mut thresholds);

    assert_eq!(thresholds.function.warn, 20);
    assert_eq!(thresholds.nesting.error, 8);
    assert_eq!(thresholds.function.error, 60);
    assert_eq!(thresholds.file.warn, 400);
}

#[test]
fn language_list_is_passed_through() {
    let cli = parse(&["--lang", "elixir,rust"]);
    assert_eq!(cli.languages.as_deref(), Some("elixir,rust"));
}
