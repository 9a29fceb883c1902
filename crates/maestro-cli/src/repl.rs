//! Interactive REPL.
//!
//! Uses `rustyline` for readline-style editing with persistent history.

use anyhow::Result;
use colored::Colorize;
use rustyline::config::Configurer;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use maestro_agent::{Agent, Orchestrator};
use maestro_core::utils::get_history_path;

use crate::helpers;

/// Exit commands (case-insensitive match).
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

/// What a line of input asks for.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Exit,
    Experts,
    History,
    Export(Option<&'a str>),
    Message(&'a str),
}

/// Classify a non-empty, trimmed line.
fn parse_input(line: &str) -> Input<'_> {
    let lower = line.to_lowercase();
    if EXIT_COMMANDS.contains(&lower.as_str()) {
        return Input::Exit;
    }
    match lower.split_whitespace().next() {
        Some("/experts") => Input::Experts,
        Some("/history") => Input::History,
        Some("/export") => Input::Export(line.split_whitespace().nth(1)),
        _ => Input::Message(line),
    }
}

/// Run the interactive REPL loop.
pub async fn run(orchestrator: &Orchestrator) -> Result<()> {
    helpers::print_banner(orchestrator);

    let mut editor = create_editor()?;

    loop {
        let line = match editor.readline("You: ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => break,
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let input = parse_input(trimmed);
        if input != Input::Exit {
            let _ = editor.add_history_entry(trimmed);
        }

        match input {
            Input::Exit => {
                println!("\nGoodbye! 👋");
                break;
            }
            Input::Experts => print_experts(orchestrator),
            Input::History => print_history_counts(orchestrator).await,
            Input::Export(name) => export_history(orchestrator, name).await,
            Input::Message(text) => {
                debug!(input = text, "processing input");
                helpers::print_thinking();

                match orchestrator.process(text).await {
                    Ok(response) => {
                        helpers::clear_thinking();
                        helpers::print_response(&response);
                    }
                    Err(e) => {
                        helpers::clear_thinking();
                        helpers::print_error(&e);
                    }
                }
            }
        }
    }

    save_history(&mut editor);
    Ok(())
}

fn print_experts(orchestrator: &Orchestrator) {
    println!();
    for (id, agent) in orchestrator.roster().iter() {
        let tools = agent.tools().tool_names();
        let tools = if tools.is_empty() {
            "no tools".dimmed().to_string()
        } else {
            tools.join(", ")
        };
        println!("  {:<10} {} [{}]", id.cyan().bold(), agent.description(), tools);
    }
    println!();
}

async fn print_history_counts(orchestrator: &Orchestrator) {
    println!();
    let main = orchestrator.agent();
    println!("  {:<14} {} messages", main.name().bold(), main.history_snapshot().await.len());
    for (id, agent) in orchestrator.roster().iter() {
        println!("  {:<14} {} messages", id, agent.history_snapshot().await.len());
    }
    println!();
}

/// Print one agent's history as JSON (the orchestrator's when no name is given).
async fn export_history(orchestrator: &Orchestrator, name: Option<&str>) {
    let agent: Option<&Agent> = match name {
        None => Some(orchestrator.agent()),
        Some(id) if id == orchestrator.agent().name() => Some(orchestrator.agent()),
        Some(id) => orchestrator.roster().get(id).map(|a| a.as_ref()),
    };

    let Some(agent) = agent else {
        eprintln!(
            "\n{} no agent named '{}'. Try one of: {}\n",
            "❌".red(),
            name.unwrap_or_default(),
            orchestrator.roster().ids().join(", ")
        );
        return;
    };

    match agent.history_snapshot().await.to_json() {
        Ok(json) => println!("\n{json}\n"),
        Err(e) => eprintln!("\n❌ Failed to export history: {e}\n"),
    }
}

/// Create a rustyline editor with history.
fn create_editor() -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;

    let history_path = get_history_path();
    if history_path.exists() {
        let _ = editor.load_history(&history_path);
        debug!("loaded REPL history from {}", history_path.display());
    }

    Ok(editor)
}

/// Save history to disk.
fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = get_history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
