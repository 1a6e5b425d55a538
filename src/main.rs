//! Host binary: one request envelope on stdin, one response on stdout.
//!
//! Usage: `mental-math [CONFIG_JSON] < request.json`
//!
//! Logs go to stderr. `RUST_LOG` overrides the default `mental_math=info`.

use mental_math::{
    BestScoreStore, InMemoryStore, JsonFileStore, LogFormat, Skill, SkillConfig, SkillError,
};
use std::io::{self, Read, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mental_math=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SkillConfig::from_file(path).map_err(SkillError::from)?,
        None => SkillConfig::default(),
    };
    init_logging(config.log_format);

    let store: Box<dyn BestScoreStore> = match &config.best_scores_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using best score file");
            Box::new(JsonFileStore::new(path))
        }
        None => Box::new(InMemoryStore::new()),
    };

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let mut skill = Skill::new(config, store);
    let response = match skill.handle_json(&raw) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "Request failed");
            return Err(err.into());
        }
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    Ok(())
}
