//! Terminal spinner that mirrors the session's loading flag.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use textnext_application::QuerySessionController;

use crate::render;

const TICK: Duration = Duration::from_millis(80);

/// Spinner drawn on stderr; hidden automatically when stderr is not a terminal.
pub fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}

/// Runs `request` while `pb` shows [`render::render_loading`] for the
/// controller's current loading flag. The spinner is cleared once the
/// request completes.
pub async fn track<F, T>(controller: &QuerySessionController, pb: &ProgressBar, request: F) -> T
where
    F: Future<Output = T>,
{
    pb.enable_steady_tick(TICK);
    tokio::pin!(request);
    let mut ticker = tokio::time::interval(TICK);

    let output = loop {
        tokio::select! {
            output = &mut request => break output,
            _ = ticker.tick() => {
                let loading = controller.snapshot().await.is_loading();
                pb.set_message(render::render_loading(loading));
            }
        }
    };

    pb.finish_and_clear();
    output
}
