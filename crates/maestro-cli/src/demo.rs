//! `maestro demo` — run a few example prompts through the orchestrator.

use colored::Colorize;

use maestro_agent::Orchestrator;

use crate::helpers;

/// One prompt per kind of routing: math tool, clock, code expert, writing expert.
pub const DEMO_PROMPTS: &[&str] = &[
    "What is 15 + 27?",
    "What time is it?",
    "Explain what recursion is in programming",
    "Help me write a professional email asking for vacation days",
];

/// Run every demo prompt in order. A failed prompt is reported and skipped.
pub async fn run(orchestrator: &Orchestrator) {
    println!();
    println!("{}", "🎬 DEMO MODE".cyan().bold());
    println!("{}", "=".repeat(60));

    for (i, prompt) in DEMO_PROMPTS.iter().enumerate() {
        println!();
        println!("{} {}", format!("[{}/{}]", i + 1, DEMO_PROMPTS.len()).dimmed(), prompt.bold());

        match orchestrator.process(prompt).await {
            Ok(response) => helpers::print_response(&response),
            Err(e) => helpers::print_error(&e),
        }
    }
}
