use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use smell_guard::analyzer::{tracker_for, StructureTracker};
use smell_guard::checker::{check_file, CheckSelection, Report, Thresholds};
use smell_guard::cli::{Cli, ColorChoice};
use smell_guard::config::{Config, ConfigLoader, FileConfigLoader};
use smell_guard::language::{detect_languages, parse_language_list, DetectedLanguage, Lang};
use smell_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, ReportFormatter, RunInfo, TextFormatter,
};
use smell_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use smell_guard::{Result, SmellGuardError, EXIT_RUNTIME_ERROR};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let project_dir =
        cli.directory
            .canonicalize()
            .map_err(|e| SmellGuardError::DirectoryAccess {
                path: cli.directory.clone(),
                source: e,
            })?;

    let config = load_config(cli, &project_dir)?;

    let detected: Vec<DetectedLanguage> = match &cli.languages {
        Some(list) => parse_language_list(list)?,
        None => detect_languages(&project_dir),
    };

    if detected.is_empty() {
        return Err(SmellGuardError::Config(format!(
            "No supported languages detected in {} (supported: elixir, dart, typescript, python, rust)",
            project_dir.display()
        )));
    }

    let selection = cli.check.selection();
    let mut report = Report::default();

    for det in &detected {
        let source_root = project_dir.join(&det.source_dir);
        if !source_root.is_dir() {
            continue;
        }
        report.merge(scan_language(det.lang, &source_root, &config, cli, selection)?);
    }

    let info = RunInfo {
        project: project_dir,
        languages: detected.iter().map(|d| d.lang).collect(),
    };
    let output = format_report(cli, &report, &info)?;
    if !cli.quiet {
        print!("{output}");
    }

    Ok(report.exit_code())
}

fn load_config(cli: &Cli, project_dir: &Path) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader;
    cli.config.as_deref().map_or_else(
        || loader.load(project_dir),
        |path| loader.load_from_path(path),
    )
}

/// Scan one language's source tree. Per-file work is independent, so files
/// are processed in parallel and the per-file report fragments merged.
fn scan_language(
    lang: Lang,
    source_root: &Path,
    config: &Config,
    cli: &Cli,
    selection: CheckSelection,
) -> Result<Report> {
    let mut thresholds = config.thresholds_for(lang);
    cli.apply_threshold_overrides(&mut thresholds);

    let extensions: Vec<String> = lang.extensions().iter().map(ToString::to_string).collect();
    let mut skip_patterns: Vec<String> =
        lang.skip_patterns().iter().map(ToString::to_string).collect();
    skip_patterns.extend(config.exclude.patterns.iter().cloned());
    skip_patterns.extend(cli.exclude.iter().cloned());

    let filter = GlobFilter::new(&extensions, &skip_patterns)?;
    let scanner = DirectoryScanner::new(filter).respect_gitignore(cli.gitignore);
    let files = scanner.scan(source_root)?;

    let tracker = tracker_for(lang);

    let report = files
        .par_iter()
        .filter_map(|path| scan_file(path, source_root, tracker.as_ref(), &thresholds, selection))
        .reduce(Report::default, |mut acc, fragment| {
            acc.merge(fragment);
            acc
        });

    Ok(report)
}

fn scan_file(
    path: &Path,
    source_root: &Path,
    tracker: &dyn StructureTracker,
    thresholds: &Thresholds,
    selection: CheckSelection,
) -> Option<Report> {
    // Unreadable files are skipped, never a hard failure.
    let content = fs::read_to_string(path).ok()?;
    let rel_path = path.strip_prefix(source_root).unwrap_or(path);

    let mut report = Report {
        files_scanned: 1,
        ..Report::default()
    };
    for issue in check_file(rel_path, &content, tracker, thresholds, selection) {
        report.add_issue(issue);
    }
    Some(report)
}

fn format_report(cli: &Cli, report: &Report, info: &RunInfo) -> Result<String> {
    let color_mode = color_choice_to_mode(cli.color);
    match cli.format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_filter(cli.severity_filter())
            .format(report, info),
        OutputFormat::Json => JsonFormatter.format(report, info),
    }
}
