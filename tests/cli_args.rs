use std::path::PathBuf;

use clap::Parser;
use renal_ccls::cli::{Cli, Commands};

#[test]
fn score_positionals_land_in_order() {
    let cli = Cli::parse_from(["renal-ccls", "score", "1", "2", "0", "1", "0", "0"]);
    match cli.command {
        Commands::Score(args) => {
            assert_eq!(args.t2_signal, 1);
            assert_eq!(args.enhancement, 2);
            assert_eq!(args.microscopic_fat, 0);
            assert_eq!(args.sei, 1);
            assert_eq!(args.ader, 0);
            assert_eq!(args.diffusion_restriction, 0);
            assert_eq!(args.out, PathBuf::from("."));
            assert!(!args.json);
            assert!(args.model.is_none());
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn score_options_are_parsed() {
    let cli = Cli::parse_from([
        "renal-ccls",
        "score",
        "0",
        "0",
        "0",
        "0",
        "0",
        "0",
        "--json",
        "--out",
        "reports",
        "--model",
        "custom.json",
    ]);
    match cli.command {
        Commands::Score(args) => {
            assert!(args.json);
            assert_eq!(args.out, PathBuf::from("reports"));
            assert_eq!(args.model, Some(PathBuf::from("custom.json")));
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn prompt_accepts_the_same_options() {
    let cli = Cli::parse_from(["renal-ccls", "prompt", "--json", "--out", "reports"]);
    match cli.command {
        Commands::Prompt(args) => {
            assert!(args.json);
            assert_eq!(args.out, PathBuf::from("reports"));
        }
        _ => panic!("expected prompt command"),
    }
}
