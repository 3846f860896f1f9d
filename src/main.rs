// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! tran - tokenizer front end for the Tran language
//!
//! This is the main entry point for the tran CLI/REPL.
//!
//! ## Features
//!
//! - Tokenize a file, standard input or an inline string
//! - Interactive REPL with keyword highlighting and history
//! - Optional real line/column tracking

mod cli;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tran_lexer::{ScanOptions, Scanner, Token};

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.scan_options();
    let result = match (&cli.eval, &cli.file) {
        (Some(code), _) => run_eval(code, options, cli.count),
        (None, Some(path)) => run_file(path, options, cli.count),
        (None, None) => return run_repl(options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so token output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Start the interactive REPL
fn run_repl(options: ScanOptions) -> ExitCode {
    match repl::Repl::new(options) {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// Tokenize a file, or standard input when the path is `-`.
fn run_file(path: &Path, options: ScanOptions, count_only: bool) -> Result<()> {
    let tokens = if path == Path::new("-") {
        info!("scanning standard input");
        Scanner::from_reader(io::stdin().lock())
            .with_options(options)
            .scan()
            .context("failed to scan standard input")?
    } else {
        let file = File::open(path)
            .with_context(|| format!("cannot open '{}'", path.display()))?;
        info!(path = %path.display(), "scanning file");
        Scanner::from_reader(BufReader::new(file))
            .with_options(options)
            .scan()
            .with_context(|| format!("failed to scan '{}'", path.display()))?
    };

    print_tokens(&tokens, count_only);
    Ok(())
}

/// Tokenize code given on the command line.
fn run_eval(code: &str, options: ScanOptions, count_only: bool) -> Result<()> {
    let Ok(tokens) = Scanner::new(code).with_options(options).scan();
    print_tokens(&tokens, count_only);
    Ok(())
}

fn print_tokens(tokens: &[Token], count_only: bool) {
    if count_only {
        println!("{}", tokens.len());
        return;
    }
    for token in tokens {
        println!("{}", token);
    }
}
