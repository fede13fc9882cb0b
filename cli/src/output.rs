use colored::*;
use pulldown_cmark::{Event as MdEvent, HeadingLevel, Options, Parser as MdParser, Tag};
use triage_core::{ChatMessage, Role, Transcript};

/// Title and disclaimer shown when a session starts
pub fn print_banner() {
    println!("{}", "⚕️  Medical Chatbot for Symptom Analysis".bold());
    println!(
        "Describe your symptoms, and I'll recommend a medical department. {}",
        "I do not provide medical advice or diagnoses.".bold()
    );
    println!("Type '/history' to show the conversation, 'exit' or 'quit' to end the session.");
    println!();
}

/// Print one chat turn with a colored role prefix
pub fn print_message(message: &ChatMessage) {
    println!("{}", format_message(message));
}

/// Redraw the whole transcript in order
pub fn print_transcript(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("{}", "No messages yet.".dimmed());
        return;
    }
    for message in transcript {
        print_message(message);
    }
}

pub fn format_message(message: &ChatMessage) -> String {
    match message.role() {
        Role::User => format!("{}: {}", "You".green().bold(), message.content()),
        Role::Assistant => format!(
            "{}: {}",
            "Assistant".blue().bold(),
            render_markdown(message.content()).trim()
        ),
    }
}

/// Render markdown for the terminal
///
/// Replies are short, so only inline styling, headings, lists and
/// paragraphs are handled; anything else falls through as plain text.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = MdParser::new_ext(markdown, options);

    let mut output = String::new();
    let mut strong = 0usize;
    let mut emphasis = 0usize;

    for event in parser {
        match event {
            MdEvent::Start(Tag::Heading(level, ..)) => match level {
                HeadingLevel::H1 => output.push_str(&format!("\n{} ", "##".bright_cyan().bold())),
                HeadingLevel::H2 => output.push_str(&format!("\n{} ", "#".bright_cyan().bold())),
                _ => output.push('\n'),
            },
            MdEvent::End(Tag::Heading(..)) => output.push('\n'),
            MdEvent::Start(Tag::Paragraph) => {
                if !output.is_empty() && !output.ends_with('\n') {
                    output.push_str("\n\n");
                }
            }
            MdEvent::End(Tag::Paragraph) => output.push('\n'),
            MdEvent::Start(Tag::List(_)) | MdEvent::End(Tag::List(_)) => output.push('\n'),
            MdEvent::Start(Tag::Item) => output.push_str(&format!("{}  ", "•".yellow())),
            MdEvent::End(Tag::Item) => output.push('\n'),
            MdEvent::Start(Tag::Strong) => strong += 1,
            MdEvent::End(Tag::Strong) => strong = strong.saturating_sub(1),
            MdEvent::Start(Tag::Emphasis) => emphasis += 1,
            MdEvent::End(Tag::Emphasis) => emphasis = emphasis.saturating_sub(1),
            MdEvent::Code(code) => {
                output.push_str(&format!("`{}`", code.on_bright_black().white()));
            }
            MdEvent::Text(text) => {
                let styled = match (strong > 0, emphasis > 0) {
                    (true, true) => text.bold().italic().to_string(),
                    (true, false) => text.bold().to_string(),
                    (false, true) => text.italic().to_string(),
                    (false, false) => text.to_string(),
                };
                output.push_str(&styled);
            }
            MdEvent::SoftBreak => output.push(' '),
            MdEvent::HardBreak => output.push('\n'),
            MdEvent::Html(html) => output.push_str(&html),
            _ => {}
        }
    }

    output
}
