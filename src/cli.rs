//! Terminal front end over the same views the web page uses.

use crate::catalog::SearchFilters;
use crate::client::CatalogBackend;
use crate::render::render_view;
use crate::view::{AskView, SearchView};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const QUIT: &str = ":q";

pub async fn run_search<W: Write>(
    backend: &dyn CatalogBackend,
    query: &str,
    filters: SearchFilters,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = SearchView::with_query(query, filters);
    view.submit(backend).await?;
    write!(out, "{}", render_view(view.state()))?;
    Ok(())
}

pub async fn run_ask<W: Write>(
    backend: &dyn CatalogBackend,
    question: &str,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = AskView::with_query(question);
    if view.submit(backend).await {
        write!(out, "{}", render_view(view.state()))?;
    }
    Ok(())
}

/// Reads one question per line; each line is an Enter-key submit on a single view.
pub async fn run_repl<R, W>(
    backend: &dyn CatalogBackend,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = AskView::new();
    let mut lines = input.lines();

    loop {
        write!(out, "ask> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        view.set_query(line);
        if view.submit(backend).await {
            write!(out, "{}", render_view(view.state()))?;
        } else {
            debug!("Ignoring blank input");
        }
    }

    writeln!(out)?;
    Ok(())
}

pub async fn run_health<W: Write>(
    backend: &dyn CatalogBackend,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let health = backend.health().await?;
    writeln!(out, "backend ok: {}", health.ok)?;
    Ok(())
}
