use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};
use triage_core::{ChatSession, Transport};

use crate::output::{print_banner, print_message, print_transcript};

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Submits one turn while a spinner runs, then prints the reply
async fn answer<T: Transport>(session: &mut ChatSession<T>, symptoms: &str) {
    let spinner = thinking_spinner();
    let reply = session.submit(symptoms).await;
    spinner.finish_and_clear();
    print_message(reply);
}

/// Runs a single query and prints the recommendation
pub async fn run_single_query<T: Transport>(
    session: &mut ChatSession<T>,
    prompt: &str,
) -> Result<()> {
    info!(session = session.id(), "Running single query");
    answer(session, prompt).await;
    Ok(())
}

/// Runs an interactive chat session, reading one line per turn from `input`
pub async fn run_interactive_chat<T: Transport, R: BufRead>(
    session: &mut ChatSession<T>,
    mut input: R,
) -> Result<()> {
    print_banner();
    if !session.transcript().is_empty() {
        print_transcript(session.transcript());
        println!();
    }

    loop {
        print!("{} ", "Describe your symptoms...".green().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            println!();
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            println!("Exiting chat session.");
            break;
        }

        if line.eq_ignore_ascii_case("/history") {
            print_transcript(session.transcript());
            println!();
            continue;
        }

        debug!(session = session.id(), "Submitting symptoms");
        answer(session, line).await;
        println!();
    }

    info!(
        session = session.id(),
        messages = session.transcript().len(),
        "Chat session ended"
    );
    Ok(())
}
