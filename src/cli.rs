// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for tran.

use clap::Parser;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;
use tran_lexer::ScanOptions;

/// tran - Tokenize Tran source into keywords, words and newlines
#[derive(Parser, Debug)]
#[command(name = "tran")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to tokenize (`-` reads standard input)
    #[arg(conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Tokenize the given code instead of a file
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Report real line and column numbers instead of zeros
    /// (env accepts true/false, 1/0, yes/no, on/off)
    #[arg(
        short,
        long,
        env = "TRAN_POSITIONS",
        value_parser = BoolishValueParser::new()
    )]
    pub positions: bool,

    /// Print only the number of tokens
    #[arg(short, long)]
    pub count: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Scan options selected on the command line.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            track_positions: self.positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that read or write `TRAN_POSITIONS`.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        Cli::try_parse_from(args.iter().copied())
    }

    fn parse_with_env(value: &str, args: &[&str]) -> Result<Cli, clap::Error> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: every test touching this variable holds ENV_LOCK
        unsafe { std::env::set_var("TRAN_POSITIONS", value) };
        let result = Cli::try_parse_from(args.iter().copied());
        unsafe { std::env::remove_var("TRAN_POSITIONS") };
        result
    }

    #[test]
    fn test_parse_file() {
        let cli = parse(&["tran", "main.tran"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("main.tran")));
        assert!(cli.eval.is_none());
        assert!(!cli.scan_options().track_positions);
    }

    #[test]
    fn test_parse_eval_with_positions() {
        let cli = parse(&["tran", "-p", "-e", "if x"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("if x"));
        assert!(cli.scan_options().track_positions);
    }

    #[test]
    fn test_file_conflicts_with_eval() {
        assert!(parse(&["tran", "-e", "x", "main.tran"]).is_err());
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse(&["tran"]).unwrap();
        assert!(cli.file.is_none() && cli.eval.is_none());
    }

    #[test]
    fn test_positions_from_env() {
        for value in ["1", "true", "yes", "on"] {
            let cli = parse_with_env(value, &["tran", "-e", "x"]).unwrap();
            assert!(cli.positions, "TRAN_POSITIONS={value}");
        }
        for value in ["0", "false", "no", "off"] {
            let cli = parse_with_env(value, &["tran", "-e", "x"]).unwrap();
            assert!(!cli.positions, "TRAN_POSITIONS={value}");
        }
    }

    #[test]
    fn test_positions_env_rejects_garbage() {
        assert!(parse_with_env("maybe", &["tran", "-e", "x"]).is_err());
    }
}
