pub mod repl;
pub mod search;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use textnext_application::{QuerySessionController, RequestDispatcher};
use textnext_core::config::SearchConfig;
use textnext_infrastructure::{ConfigService, ReqwestTransport};

/// Loads the config file (explicit path or platform default) and applies
/// command line overrides.
pub fn load_config(path: Option<&Path>, base_url: Option<&str>) -> Result<SearchConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let mut config = service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))?;

    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
        config.validate()?;
    }
    tracing::debug!(base_url = %config.base_url, "configuration loaded");

    Ok(config)
}

/// Makes an explicit `--limit` the session's starting page size, so that
/// load-more steps up from the page actually shown.
pub fn with_initial_limit(mut config: SearchConfig, limit: Option<u32>) -> Result<SearchConfig> {
    if let Some(limit) = limit {
        config.initial_limit = limit;
        config.validate().context("Invalid --limit")?;
    }
    Ok(config)
}

/// Wires the reqwest transport into a fresh controller.
pub fn build_controller(config: &SearchConfig) -> QuerySessionController {
    let transport = Arc::new(ReqwestTransport::new());
    let dispatcher = RequestDispatcher::new(transport, config.base_url.clone());
    QuerySessionController::new(dispatcher, config)
}
