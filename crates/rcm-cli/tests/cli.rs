//! CLI argument parsing tests.

use clap::Parser;

use rcm_cli::cli::Cli;

#[test]
fn complete_when_both_paths_given() {
    let cli = Cli::try_parse_from([
        "rcm",
        "--patient-file",
        "patients.xlsx",
        "--output-file",
        "merged.xlsx",
    ])
    .unwrap();
    assert!(cli.is_complete());
    assert_eq!(cli.separator, ',');
    assert!(cli.whitelist().is_empty());
}

#[test]
fn incomplete_without_output_file() {
    let cli = Cli::try_parse_from(["rcm", "--patient-file", "patients.xlsx"]).unwrap();
    assert!(!cli.is_complete());
}

#[test]
fn whitelist_entries_accumulate_and_trim() {
    let cli = Cli::try_parse_from([
        "rcm",
        "--patient-file",
        "patients.xlsx",
        "--output-file",
        "merged.xlsx",
        "-c",
        " pat_id ",
        "-c",
        "pat_height",
        "-c",
        "  ",
    ])
    .unwrap();
    let whitelist = cli.whitelist();
    assert_eq!(whitelist.len(), 2);
    assert!(whitelist.contains("pat_id"));
    assert!(whitelist.contains("pat_height"));
}

#[test]
fn custom_separator_parses() {
    let cli = Cli::try_parse_from([
        "rcm",
        "--patient-file",
        "patients.csv",
        "--output-file",
        "merged.csv",
        "--separator",
        ";",
    ])
    .unwrap();
    assert_eq!(cli.separator, ';');
}
