use clap::Parser;
use plugsmith::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("plugsmith")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(!parsed.no_input);
    assert!(!parsed.replay);
    assert!(!parsed.overwrite_if_exists);
    assert!(!parsed.skip_if_file_exists);
    assert!(parsed.config_file.is_none());
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--output-dir",
        "./projects",
        "--no-input",
        "--replay",
        "--overwrite-if-exists",
        "--skip-if-file-exists",
        "--config-file",
        "./config.yml",
        "--verbose",
    ]))
    .unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./projects"));
    assert!(parsed.no_input);
    assert!(parsed.replay);
    assert!(parsed.overwrite_if_exists);
    assert!(parsed.skip_if_file_exists);
    assert_eq!(parsed.config_file, Some(PathBuf::from("./config.yml")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed =
        Args::try_parse_from(make_args(&["-o", "./out", "-f", "-s", "-c", "cfg.yml", "-v"]))
            .unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert!(parsed.overwrite_if_exists);
    assert!(parsed.skip_if_file_exists);
    assert_eq!(parsed.config_file, Some(PathBuf::from("cfg.yml")));
    assert!(parsed.verbose);
}

#[test]
fn test_unexpected_positional_argument() {
    assert!(Args::try_parse_from(make_args(&["extra"])).is_err());
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--unknown"])).is_err());
}
