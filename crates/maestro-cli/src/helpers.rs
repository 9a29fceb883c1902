//! Shared CLI helpers — banner, response and error printing.

use colored::Colorize;

use maestro_agent::{AgentError, Orchestrator};

/// Print an orchestrator reply to stdout.
pub fn print_response(response: &str) {
    println!();
    println!("{}", "🎼 Maestro".cyan().bold());
    if response.is_empty() {
        println!("{}", "(no response)".dimmed());
    } else {
        println!("{response}");
    }
    println!();
}

/// Print a failed turn. The REPL keeps going afterwards.
pub fn print_error(error: &AgentError) {
    eprintln!("\n{} {}", "❌ Error:".red().bold(), error);
    if let AgentError::LoopBudgetExceeded { .. } = error {
        eprintln!(
            "{}",
            "   (raise agents.defaults.maxToolIterations if this keeps happening)".dimmed()
        );
    }
    eprintln!();
}

/// Print the banner shown at REPL start.
pub fn print_banner(orchestrator: &Orchestrator) {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "🎼 Maestro".cyan().bold(), version.dimmed());
    println!(
        "{} {}",
        "Model:".dimmed(),
        orchestrator.agent().model()
    );
    println!(
        "{} {}",
        "Experts:".dimmed(),
        orchestrator.roster().ids().join(", ")
    );
    println!(
        "{}",
        "Type a message, /experts, /history, /export [agent], or \"exit\" to quit.".dimmed()
    );
    println!();
}

/// Print a "thinking" placeholder.
pub fn print_thinking() {
    eprint!("{}", "⠿ thinking...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}
