mod cli;

use std::io::Read;
use std::process::ExitCode;

use grip_common::{ConfigError, Grip, GripError};
use grip_config::GripConfig;
use grip_render::{NoServices, RenderRequest, ValueRenderer};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "grip=info";

/// Explicit config paths must load; the default path falls back to defaults.
fn load_config(args: &cli::Args) -> Result<(GripConfig, Option<ConfigError>), GripError> {
    match &args.config {
        Some(path) => Ok((grip_config::load_config(Some(path.as_path()))?, None)),
        None => match grip_config::load_config(None) {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((GripConfig::default(), Some(e))),
        },
    }
}

fn init_logging(args: &cli::Args, config: &GripConfig) {
    let directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_grip(args: &cli::Args) -> Result<Grip, GripError> {
    let raw = match &args.grip {
        Some(raw) => raw.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Grip::from_json(raw.trim())
}

/// Render the grip described by `args` and return the pretty JSON summary.
fn run(args: &cli::Args, config: &GripConfig) -> Result<String, GripError> {
    let grip = read_grip(args)?;

    let mut request = RenderRequest::new(grip).with_intent(args.intent(&config.render));
    if let Some(style) = &args.style {
        request = request.with_style(style.clone());
    }

    let services = NoServices;
    let renderer = ValueRenderer::new(&services)
        .with_max_style_length(config.style.max_declaration_length as usize);
    let render_config = renderer.render(&request);

    serde_json::to_string_pretty(&render_config.summary())
        .map_err(|e| GripError::Other(format!("failed to serialize render summary: {e}")))
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (config, fallback) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("grip-render: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&args, &config);
    if let Some(e) = fallback {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!("grip-render v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("effective config: {}", grip_config::config_to_json(&config));

    match run(&args, &config) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("render failed: {e}");
            eprintln!("grip-render: {e}");
            ExitCode::FAILURE
        }
    }
}
