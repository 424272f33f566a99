use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use textnext_application::{QuerySessionController, SubmitOutcome};
use textnext_core::SearchError;

use crate::{progress, render};

const COMMANDS: [&str; 3] = ["/more", "/status", "/help"];

/// Slash commands matching the typed prefix, or none for a plain search line.
fn matching_commands(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    COMMANDS
        .into_iter()
        .filter(move |cmd| prefix.starts_with('/') && cmd.starts_with(prefix))
}

/// Completes and hints slash commands; search text is left alone.
struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = matching_commands(&line[..pos])
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if COMMANDS.contains(&line.trim_end()) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let typed = &line[..pos];
        matching_commands(typed)
            .find(|cmd| cmd.len() > typed.len())
            .map(|cmd| cmd[typed.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

/// What a line of REPL input asks for.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Quit,
    Empty,
    LoadMore,
    Status,
    Help,
    Unknown(&'a str),
    Search(&'a str),
}

fn parse_input(line: &str) -> ReplInput<'_> {
    let trimmed = line.trim();
    match trimmed {
        "quit" | "exit" => ReplInput::Quit,
        "" => ReplInput::Empty,
        "/more" => ReplInput::LoadMore,
        "/status" => ReplInput::Status,
        "/help" => ReplInput::Help,
        cmd if cmd.starts_with('/') => ReplInput::Unknown(cmd),
        query => ReplInput::Search(query),
    }
}

fn print_help() {
    println!(
        "{}",
        "Enter a key word to search patents. '/more' loads more results, '/status' shows the session, 'quit' exits."
            .bright_black()
    );
}

async fn report(controller: &QuerySessionController, result: Result<SubmitOutcome, SearchError>) {
    match result {
        Ok(SubmitOutcome::Committed { received, accepted }) => {
            let session = controller.snapshot().await;
            if session.results().is_empty() {
                println!("{}", "No results.".yellow());
                return;
            }
            print!("{}", render::render_table(session.results()));
            if accepted < received {
                println!(
                    "{}",
                    format!("{} malformed record(s) skipped", received - accepted).bright_black()
                );
            }
            println!("{}", "Type /more to load more results.".bright_black());
        }
        Ok(SubmitOutcome::Superseded) => {}
        Err(err) if err.is_client_validation() => {
            println!("{}", err.to_string().yellow());
        }
        Err(err) => {
            eprintln!("{}", format!("Unknown server error: {err}").red());
        }
    }
}

/// Interactive search session.
///
/// A plain line becomes the draft and is submitted with the current page limit.
pub async fn run(controller: &QuerySessionController) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    println!("{}", "=== TextNext Patent Search ===".bright_magenta().bold());
    print_help();
    println!();

    loop {
        match rl.readline("search> ") {
            Ok(line) => {
                let input = parse_input(&line);
                if !matches!(input, ReplInput::Empty) {
                    let _ = rl.add_history_entry(line.as_str());
                }

                match input {
                    ReplInput::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ReplInput::Empty => continue,
                    ReplInput::Help => print_help(),
                    ReplInput::Status => {
                        let session = controller.snapshot().await;
                        println!("{}", render::render_status(&session).bright_black());
                    }
                    ReplInput::Unknown(cmd) => {
                        println!("{}", format!("Unknown command: {cmd}").bright_black());
                    }
                    ReplInput::LoadMore => {
                        let pb = progress::spinner();
                        let result = progress::track(controller, &pb, controller.load_more()).await;
                        report(controller, result).await;
                    }
                    ReplInput::Search(query) => {
                        controller.set_query_draft(query).await;
                        let pb = progress::spinner();
                        let result =
                            progress::track(controller, &pb, controller.submit_draft()).await;
                        report(controller, result).await;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
