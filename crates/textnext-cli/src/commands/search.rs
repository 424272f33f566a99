use anyhow::{Context, Result};
use textnext_application::QuerySessionController;

use crate::{progress, render};

/// One-shot search: submit at the session's page size, load more `more`
/// times, print the table.
pub async fn run(controller: &QuerySessionController, query: &str, more: u32) -> Result<()> {
    let pb = progress::spinner();

    controller.set_query_draft(query).await;
    let limit = controller.snapshot().await.page_limit();
    progress::track(controller, &pb, controller.submit(Some(query), limit))
        .await
        .with_context(|| format!("Search for {query:?} failed"))?;

    for _ in 0..more {
        progress::track(controller, &pb, controller.load_more())
            .await
            .context("Loading more results failed")?;
    }

    let session = controller.snapshot().await;
    if session.results().is_empty() {
        eprintln!("No results for {query:?}");
    } else {
        print!("{}", render::render_table(session.results()));
    }

    Ok(())
}
