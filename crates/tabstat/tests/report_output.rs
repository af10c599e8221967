//! End-to-end tests: numbers in, rendered report out.

use std::io::Write;

use clap::Parser;
use tabstat::cli::{run_with, Args};
use tabstat::input::load_file;
use tabstat::{Report, ReportLayout, Summary};
use tabstat_render::RenderConfig;

fn run(args: &[&str], stdin: &str) -> String {
    let args = Args::try_parse_from(std::iter::once("tabstat").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    run_with(&args, stdin.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn report_from_stdin() {
    let output = run(&["--width", "60"], "2 4 4 4 5 5 7 9\n");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "═".repeat(60));
    assert_eq!(lines[1].trim(), "Descriptive Statistics");
    assert!(output.contains(" Mean            5     "));
    assert!(output.contains(" Std. deviation  2     "));
    assert!(output.contains("2, 4, 4, 4, 5, 5, 7, 9"));
    assert!(output.contains("Value   Count\n"));
    assert!(output.contains("4       3    \n"));
}

#[test]
fn uncentered_rows_start_at_column_zero() {
    let output = run(&["--width", "60", "--no-center"], "1 2 3");
    assert!(output.lines().any(|line| line.starts_with(" Statistic")));
}

#[test]
fn centered_rows_are_indented() {
    let output = run(&["--width", "100"], "1 2 3");
    let title_row = output
        .lines()
        .find(|line| line.trim_start().starts_with("Statistic "))
        .unwrap();
    assert!(title_row.starts_with(&" ".repeat(30)));
}

#[test]
fn truncate_flag_shortens_sorted_values() {
    let output = run(&["--width", "60", "--wrap", "3", "--truncate"], "5 4 3 2 1");
    assert!(output.contains("1, 2, 3, ..."));
    assert!(!output.contains("4, 5"));
}

#[test]
fn bad_token_fails_with_line_number() {
    let args = Args::try_parse_from(["tabstat"]).unwrap();
    let mut out = Vec::new();
    let err = run_with(&args, "1 2\nthree".as_bytes(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "<stdin>:2: 'three' is not an integer");
    assert!(out.is_empty());
}

#[test]
fn file_loading_matches_inline_numbers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "10, 20, 30").unwrap();
    writeln!(file, "40").unwrap();
    let from_file = Summary::from_values(&load_file(file.path()).unwrap()).unwrap();
    let inline = Summary::from_values(&[10, 20, 30, 40]).unwrap();
    assert_eq!(from_file, inline);

    let config = RenderConfig::default();
    let layout = ReportLayout::default();
    let a = Report::new(&from_file, &config, layout).render();
    let b = Report::new(&inline, &config, layout).render();
    assert_eq!(a, b);
}
