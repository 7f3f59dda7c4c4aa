// Integration tests for cli/args.rs — the two argument grammars.
//
// Covers:
//   - no arguments → help
//   - first-token selection (-en / -de / anything else)
//   - every compress flag, including -part with and without -n / -b
//   - missing-value and missing-input errors
//   - output name defaulting

use ram::cli::args::{parse_args_from, ArgError, ParseOutcome, ParsedArgs};
use ram::cli::op_mode::OpMode;
use ram::io::prefs::PartitionRequest;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

fn parse(argv: &[&str]) -> ParsedArgs {
    match parse_args_from(&args(argv)).expect("parse should succeed") {
        ParseOutcome::Run(p) => p,
        ParseOutcome::Help => panic!("expected a run configuration"),
    }
}

fn parse_err(argv: &[&str]) -> ArgError {
    parse_args_from(&args(argv)).expect_err("expected parse error")
}

// ─────────────────────────────────────────────────────────────────────────────
// Grammar selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_argv_requests_help() {
    assert_eq!(parse_args_from(&args(&[])), Ok(ParseOutcome::Help));
}

#[test]
fn bad_first_token_is_invalid_mode() {
    let e = parse_err(&["--help"]);
    assert_eq!(e, ArgError::InvalidMode("--help".to_owned()));
    assert!(e.to_string().contains("invalid mode"));
}

#[test]
fn bare_input_as_first_token_is_invalid_mode() {
    assert!(matches!(parse_err(&["foo.bin"]), ArgError::InvalidMode(_)));
}

#[test]
fn en_alone_is_missing_input() {
    assert_eq!(parse_err(&["-en"]), ArgError::MissingInput);
}

#[test]
fn de_alone_is_missing_input() {
    assert_eq!(parse_err(&["-de"]), ArgError::MissingInput);
}

// ─────────────────────────────────────────────────────────────────────────────
// Compress grammar
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn flags_in_any_order() {
    let p = parse(&["-en", "x.bin", "-to", "y.raw", "-autodel", "-mode", "1"]);
    assert_eq!(p.op_mode, OpMode::Compress);
    assert_eq!(p.input_filename, "x.bin");
    assert_eq!(p.output_filename, "y.raw");
    assert!(p.auto_delete);
    assert_eq!(p.mode, 1);
}

#[test]
fn part_count_and_size_both_recorded() {
    let p = parse(&["-en", "-part", "-n", "3", "-part", "-b", "64", "x"]);
    assert!(p.partitioned);
    assert_eq!(p.partition_count, Some(3));
    assert_eq!(p.partition_size, Some(64));
}

#[test]
fn part_then_other_flag() {
    let p = parse(&["-en", "-part", "-autodel", "x"]);
    assert!(p.partitioned);
    assert!(p.auto_delete);
    assert_eq!(p.partition_count, None);
    assert_eq!(p.partition_size, None);
}

#[test]
fn part_as_last_argument() {
    let p = parse(&["-en", "x", "-part"]);
    assert!(p.partitioned);
    assert_eq!(p.input_filename, "x");
}

#[test]
fn missing_values_name_the_flag() {
    for (argv, flag) in [
        (vec!["-en", "x", "-mode"], "-mode"),
        (vec!["-en", "x", "-part", "-n"], "-n"),
        (vec!["-en", "x", "-part", "-b"], "-b"),
        (vec!["-en", "x", "-to"], "-to"),
    ] {
        let e = parse_err(&argv);
        match e {
            ArgError::MissingValue { flag: f, .. } => assert_eq!(f, flag),
            other => panic!("expected MissingValue for {}, got {:?}", flag, other),
        }
    }
}

#[test]
fn mode_value_with_trailing_text_uses_leading_digits() {
    assert_eq!(parse(&["-en", "-mode", "2x", "f"]).mode, 2);
}

#[test]
fn negative_part_values_are_kept() {
    let p = parse(&["-en", "-part", "-n", "-4", "f"]);
    assert_eq!(p.partition_count, Some(-4));
}

#[test]
fn default_output_without_extension() {
    let p = parse(&["-en", "foo"]);
    assert_eq!(p.output_filename, "foo.raw");
    assert!(p.output_defaulted);
}

#[test]
fn prefs_carry_partition_request() {
    let p = parse(&["-en", "-part", "-n", "2", "f"]);
    let prefs = p.prefs(None);
    assert_eq!(prefs.partition, Some(PartitionRequest { count: Some(2), size: None }));
    assert!(!prefs.remove_src_file);
}

#[test]
fn prefs_without_part_have_no_partition() {
    assert_eq!(parse(&["-en", "f"]).prefs(None).partition, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Decompress grammar
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_default_dir() {
    let p = parse(&["-de", "archive.raw"]);
    assert_eq!(p.op_mode, OpMode::Decompress);
    assert_eq!(p.output_filename, "archive");
}

#[test]
fn decompress_default_dir_without_extension() {
    assert_eq!(parse(&["-de", "archive"]).output_filename, "archive_extracted");
}

#[test]
fn decompress_mode_flag_is_an_input_path() {
    // -de only knows -to; "-mode" and "3" are bare tokens, the last one wins.
    let p = parse(&["-de", "-mode", "3"]);
    assert_eq!(p.input_filename, "3");
}
