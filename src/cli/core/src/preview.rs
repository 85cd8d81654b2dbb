/* src/cli/core/src/preview.rs */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use blockpage_engine::{BlockKind, BuilderStore, RenderOutcome, preview_block, resolve};
use serde_json::Value;
use tokio::task::JoinSet;
use tracing::debug;

use crate::context::{Project, api_error};
use crate::draft::Draft;
use crate::ui;

/// Records fetched per kind, plus the kinds whose fetch failed.
#[derive(Debug, Default)]
pub struct Fetched {
  pub records: HashMap<BlockKind, Vec<Value>>,
  pub failed: Vec<(BlockKind, String)>,
}

/// Fetch the records of every bound kind in parallel. A failing kind does not
/// stop the others; its blocks preview as placeholders.
pub async fn fetch_bound(project: &Project, store: &BuilderStore) -> Result<Fetched> {
  let client = Arc::new(project.client()?);
  let mut kinds: Vec<BlockKind> = store
    .blocks()
    .iter()
    .filter(|b| b.is_bound() && resolve(b.kind).is_some())
    .map(|b| b.kind)
    .collect();
  kinds.sort_by_key(|k| k.as_str());
  kinds.dedup();

  let mut tasks = JoinSet::new();
  for kind in kinds {
    let client = Arc::clone(&client);
    tasks.spawn(async move { (kind, client.records(kind).await) });
  }

  let mut fetched = Fetched::default();
  while let Some(joined) = tasks.join_next().await {
    let (kind, result) = joined.context("record fetch task failed")?;
    match result {
      Ok(records) => {
        debug!(%kind, count = records.len(), "records fetched for preview");
        fetched.records.insert(kind, records);
      }
      Err(err) => fetched.failed.push((kind, format!("{:#}", api_error(err)))),
    }
  }
  fetched.failed.sort_by_key(|(kind, _)| kind.as_str());
  Ok(fetched)
}

/// One outcome per block, in canvas order.
pub fn render(
  store: &BuilderStore,
  fetched: &Fetched,
  locale: &str,
  media_base_url: &str,
) -> Vec<RenderOutcome> {
  store
    .blocks()
    .iter()
    .map(|block| {
      let records = fetched.records.get(&block.kind).map_or(&[][..], Vec::as_slice);
      preview_block(block, records, locale, media_base_url)
    })
    .collect()
}

pub async fn run(project: &Project, path: &Path, json: bool) -> Result<()> {
  let store = Draft::load(path)?.to_store();
  let fetched = fetch_bound(project, &store).await?;
  for (kind, reason) in &fetched.failed {
    ui::fail(&format!("{kind}: {reason}"));
  }
  let media_base = project.config.api_config().media_base_url().to_string();
  let outcomes = render(&store, &fetched, project.locale(), &media_base);

  ui::banner("preview");
  let mut rendered = Vec::new();
  for ((index, block), outcome) in store.blocks().iter().enumerate().zip(outcomes) {
    match outcome {
      RenderOutcome::Rendered { component, props, width_percent } => {
        let title = props
          .get("title")
          .or_else(|| props.get("data").and_then(|d| d.get("title")))
          .and_then(Value::as_str)
          .unwrap_or("");
        ui::block_row(index, component, &format!("{width_percent:.0}%"), title);
        rendered.push(serde_json::json!({
          "index": index,
          "component": component,
          "width_percent": width_percent,
          "props": props,
        }));
      }
      RenderOutcome::Placeholder => {
        ui::block_row(index, block.kind.palette_label(), &block.grid_width.label(), "no content selected");
      }
      RenderOutcome::ComponentNotFound(name) => {
        ui::block_row(index, &name, &block.grid_width.label(), "component not found");
      }
    }
  }

  if json {
    ui::blank();
    ui::raw(&serde_json::to_string_pretty(&rendered)?);
  }
  Ok(())
}
