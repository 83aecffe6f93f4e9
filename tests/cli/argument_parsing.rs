//! CLI argument parsing tests

use clap::Parser;
use helpqueue::app::cli::Args;
use helpqueue::queue::EngineSettings;

#[test]
fn test_plain_clap_parse_matches_styled_parse() {
    let argv = ["helpqueue", "--settle-delay", "4", "--announcement", "Hi"];
    let plain = Args::try_parse_from(argv).unwrap();
    let styled = Args::try_parse_from_args(argv, true).unwrap();
    assert_eq!(plain, styled);
    assert_eq!(
        plain.engine_settings(),
        EngineSettings {
            refresh_period: 3,
            settle_delay: 4
        }
    );
}

#[test]
fn test_unknown_flag_rejected() {
    let err = Args::try_parse_from(["helpqueue", "--verbose"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn test_help_lists_timing_flags() {
    let help = Args::styled_command(false).render_help().to_string();
    assert!(help.contains("--refresh-period"));
    assert!(help.contains("--settle-delay"));
    assert!(help.contains("--announcement"));
}
