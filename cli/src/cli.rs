use clap::Parser;
use std::path::PathBuf;
use triage_core::ConfigOverrides;

/// Describe your symptoms and get a recommended medical department.
///
/// The Gemini API key is read from the GEMINI_API_KEY environment variable
/// (a .env file in the working directory is honoured).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Symptoms to analyse; without it an interactive chat starts
    #[arg(index = 1)]
    pub prompt: Option<String>,

    /// Stay in interactive chat mode after answering the prompt
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Path to the config file (defaults to ~/.config/triage/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Gemini model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the Gemini API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write the effective configuration to the config file and exit
    #[arg(long, default_value_t = false)]
    pub init_config: bool,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model_name: self.model.clone(),
            api_base_url: self.api_base_url.clone(),
            timeout_secs: self.timeout,
            log_level: self.verbose.then(|| "debug".to_string()),
        }
    }

    /// Interactive unless a one-shot prompt was given on its own
    pub fn wants_interactive(&self) -> bool {
        self.interactive || self.prompt.is_none()
    }
}
