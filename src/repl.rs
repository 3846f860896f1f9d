// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL that tokenizes each entered line.

use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use tran_lexer::lexer::is_word_break;
use tran_lexer::{KeywordSet, ScanOptions, Scanner, Token, TokenKind};

/// REPL configuration constants
const HISTORY_FILE: &str = ".tran_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Positions,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "positions" | "pos" => Some((ReplCommand::Positions, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".positions", "Toggle line/column tracking"),
            (".load <file>", "Tokenize a file"),
        ]
    }
}

/// Helper for rustyline: keyword completion, hints and highlighting
struct TranHelper {
    keywords: &'static KeywordSet,
    candidates: Vec<&'static str>,
}

impl TranHelper {
    fn new(keywords: &'static KeywordSet) -> Self {
        let mut candidates = keywords.sorted();
        candidates.extend(
            ReplCommand::all_commands()
                .iter()
                .map(|&(cmd, _)| cmd.split_whitespace().next().unwrap_or(cmd)),
        );
        Self {
            keywords,
            candidates,
        }
    }

    /// Candidates that extend `word`, with the part still to be typed.
    fn extensions<'a>(
        &'a self,
        word: &'a str,
    ) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
        self.candidates
            .iter()
            .filter(move |c| c.len() > word.len() && c.starts_with(word))
            .map(move |&c| (c, &c[word.len()..]))
    }
}

/// Start of the whitespace-delimited word ending at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(is_word_break)
        .map(|i| i + line[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0)
}

impl Completer for TranHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .extensions(word)
            .map(|(full, rest)| Pair {
                display: full.to_string(),
                replacement: rest.to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for TranHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.extensions(word)
            .next()
            .map(|(_, rest)| rest.dimmed().to_string())
    }
}

impl Highlighter for TranHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.cyan().to_string());
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut current_word = String::new();

        for c in line.chars() {
            if is_word_break(c) {
                if !current_word.is_empty() {
                    result.push_str(&highlight_word(self.keywords, &current_word));
                    current_word.clear();
                }
                result.push(c);
            } else {
                current_word.push(c);
            }
        }

        if !current_word.is_empty() {
            result.push_str(&highlight_word(self.keywords, &current_word));
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn highlight_word(keywords: &KeywordSet, word: &str) -> String {
    if keywords.contains(word) {
        word.magenta().bold().to_string()
    } else {
        word.to_string()
    }
}

impl Validator for TranHelper {}

impl Helper for TranHelper {}

/// The interactive REPL for the Tran scanner
pub struct Repl {
    editor: Editor<TranHelper, DefaultHistory>,
    history_path: PathBuf,
    options: ScanOptions,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(options: ScanOptions) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(TranHelper::new(KeywordSet::standard())));

        let history_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(HISTORY_FILE);

        if let Err(e) = editor.load_history(&history_path) {
            debug!("no history loaded from {}: {}", history_path.display(), e);
        }

        Ok(Self {
            editor,
            history_path,
            options,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", "tran>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            debug!("failed to save history to {}: {}", self.history_path.display(), e);
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Tran Scanner".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => {
                println!(
                    "{} {}",
                    "tran".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
            }
            ReplCommand::Positions => {
                self.options.track_positions = !self.options.track_positions;
                let state = if self.options.track_positions { "on" } else { "off" };
                println!("{} {}", "position tracking".dimmed(), state.yellow());
            }
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Anything else is tokenized and printed.".dimmed());
        println!();
    }

    fn load_file(&self, path: &Path) {
        let tokens = File::open(path).map_err(anyhow::Error::from).and_then(|file| {
            Scanner::from_reader(BufReader::new(file))
                .with_options(self.options)
                .scan()
                .map_err(anyhow::Error::from)
        });

        match tokens {
            Ok(tokens) => print_tokens(&tokens),
            Err(e) => eprintln!("{}: {}: {}", "Error".red().bold(), path.display(), e),
        }
    }

    fn scan_and_print(&self, line: &str) {
        let Ok(tokens) = Scanner::new(line).with_options(self.options).scan();
        print_tokens(&tokens);
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", format_token(token));
    }
}

/// Format a token for display with its kind colored
fn format_token(token: &Token) -> String {
    let kind = if token.kind.is_keyword() {
        token.kind.magenta().bold().to_string()
    } else if token.kind == TokenKind::Newline {
        token.kind.dimmed().to_string()
    } else {
        token.kind.green().to_string()
    };
    let rendered = token.to_string();
    rendered.replacen(token.kind.name(), &kind, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".exit"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".pos"),
            Some((ReplCommand::Positions, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load main.tran"),
            Some((ReplCommand::Load, Some("main.tran")))
        ));
        assert!(ReplCommand::parse("if x").is_none());
        assert!(ReplCommand::parse(".bogus").is_none());
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("if whi", 6), 3);
        assert_eq!(word_start("ret", 3), 0);
        assert_eq!(word_start("a\u{2003}b", 5), 4);
        assert_eq!(word_start("a\u{a0}b", 4), 0);
        assert_eq!(word_start("x\u{1f}wh", 4), 2);
    }

    #[test]
    fn test_extensions() {
        let helper = TranHelper::new(KeywordSet::standard());
        let found: Vec<_> = helper.extensions("wh").collect();
        assert_eq!(found, [("while", "ile")]);
        assert_eq!(helper.extensions(".ex").next(), Some((".exit", "it")));
        assert!(helper.extensions("while").next().is_none());
    }

    #[test]
    fn test_highlight_splits_like_scanner() {
        let helper = TranHelper::new(KeywordSet::standard());
        let plain = helper.highlight("x\u{a0}if", 0);
        assert_eq!(plain, "x\u{a0}if");
        let marked = helper.highlight("x\u{1f}if", 0);
        assert!(marked.contains(&"if".magenta().bold().to_string()));
    }

    #[test]
    fn test_format_token_keeps_text() {
        let token = Token::new(TokenKind::Keyword, "if", 0, 0);
        let formatted = format_token(&token);
        assert!(formatted.contains("KEYWORD"));
        assert!(formatted.contains("value=if"));
    }
}
