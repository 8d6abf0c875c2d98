use clap::Parser;
use grip_common::{RenderIntent, RenderMode};
use grip_config::schema::RenderSettings;
use std::path::PathBuf;

/// grip-render: render a debugger value grip and print its render configuration.
#[derive(Parser, Debug)]
#[command(name = "grip-render", version, about)]
pub struct Args {
    /// Grip as protocol JSON. Read from stdin when omitted.
    #[arg(long)]
    pub grip: Option<String>,

    /// User-provided inline CSS for string values.
    #[arg(long)]
    pub style: Option<String>,

    /// Console message type (log, dir, result, ...).
    #[arg(long)]
    pub message_type: Option<String>,

    /// Console helper type (inspectObject, clearOutput, ...).
    #[arg(long)]
    pub helper_type: Option<String>,

    /// Quote string values. Overrides `render.use_quotes`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub quotes: Option<bool>,

    /// Escape whitespace in strings. Overrides `render.escape_whitespace`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub escape_whitespace: Option<bool>,

    /// Render mode (tiny, short, long). Overrides `render.mode`.
    #[arg(long)]
    pub mode: Option<RenderMode>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `grip=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Merge the flags over the configured render defaults.
    pub fn intent(&self, defaults: &RenderSettings) -> RenderIntent {
        let mut intent = RenderIntent::default()
            .with_mode(self.mode.unwrap_or(defaults.mode))
            .with_quotes(self.quotes.unwrap_or(defaults.use_quotes))
            .with_escape_whitespace(self.escape_whitespace.unwrap_or(defaults.escape_whitespace));

        if let Some(message_type) = &self.message_type {
            intent = intent.with_message_type(message_type.clone());
        }
        if let Some(helper_type) = &self.helper_type {
            intent = intent.with_helper_type(helper_type.clone());
        }
        intent
    }
}

pub fn parse() -> Args {
    Args::parse()
}
