/* src/cli/core/src/save.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockpage_engine::{PageDocument, export_file_name};
use tracing::info;

use crate::context::{Project, api_error};
use crate::draft::Draft;
use crate::ui;

/// Draft blocks that end up nowhere in the document: unbound list blocks and
/// kinds without a slot (`faq`).
pub fn skipped_blocks(draft: &Draft, doc: &PageDocument) -> usize {
  draft.blocks.len().saturating_sub(doc.placement_count())
}

/// Write the document as pretty JSON to `out`, or to `<slug>.json` in the
/// project directory. Returns the path written.
pub fn export(project: &Project, doc: &PageDocument, out: Option<PathBuf>) -> Result<PathBuf> {
  let out = out.unwrap_or_else(|| project.base_dir.join(export_file_name(doc)));
  let json = serde_json::to_string_pretty(doc)?;
  std::fs::write(&out, json).with_context(|| format!("failed to write {}", out.display()))?;
  Ok(out)
}

/// Build the page document from a draft; export it and/or submit it.
pub async fn run(
  project: &Project,
  path: &Path,
  out: Option<PathBuf>,
  submit: bool,
) -> Result<()> {
  let draft = Draft::load(path)?;
  let doc = draft.document(project.config.editor.language_id);
  let skipped = skipped_blocks(&draft, &doc);

  ui::banner("save");
  ui::arrow(&format!(
    "{}  /{}  {} placements",
    project.config.project.name,
    doc.slug,
    doc.placement_count()
  ));
  if skipped > 0 {
    ui::warn(&format!("{skipped} block(s) without a submission slot or binding left out"));
  }

  if out.is_some() || !submit {
    let written = export(project, &doc, out)?;
    ui::ok(&format!("saved {}", written.display()));
  }

  if submit {
    let client = project.client()?;
    let response = client.submit_page(&doc).await.map_err(api_error)?;
    info!(slug = %doc.slug, "page submitted");
    match blockpage_engine::extract_created_id(&response) {
      Some(id) => ui::ok(&format!("page #{id} created")),
      None => ui::ok("page submitted"),
    }
  }
  Ok(())
}
