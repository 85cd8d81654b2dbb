/* src/cli/core/src/records.rs */

use std::path::Path;

use anyhow::{Result, bail};
use blockpage_engine::{BlockKind, RecordId, record};

use crate::context::{Project, api_error};
use crate::draft::Draft;
use crate::ui;

/// List the records a block of `kind` can be bound to.
pub async fn list_options(project: &Project, kind: BlockKind, locale: Option<&str>) -> Result<()> {
  let locale = locale.unwrap_or(project.locale());
  let client = project.client()?;
  let options = client.options(kind, Some(locale)).await.map_err(api_error)?;
  if options.is_empty() {
    ui::warn(&format!("no {} records found", kind.palette_label()));
    return Ok(());
  }
  ui::ok(&format!("{} {}", options.len(), kind.palette_label()));
  for option in &options {
    ui::detail(&format!("{:>6}  {}", option.id, option.label));
  }
  Ok(())
}

/// List a system collection (`languages` or `pages`), the pickers of the
/// settings form.
pub async fn list_system(project: &Project, name: &str) -> Result<()> {
  let client = project.client()?;
  let records = client.collection(name).await.map_err(api_error)?;
  for rec in &records {
    ui::detail(&format!(
      "{:>6}  {}",
      record::id_display(rec),
      blockpage_engine::label(rec, Some(project.locale()))
    ));
  }
  ui::ok(&format!("{} {name}", records.len()));
  Ok(())
}

/// Quick-create a record, optionally binding it into a draft block.
pub async fn create(
  project: &Project,
  kind: BlockKind,
  title: &str,
  bind: Option<(&Path, usize)>,
) -> Result<()> {
  let client = project.client()?;
  let id = client.create_entry(kind, title, project.locale()).await.map_err(api_error)?;
  ui::ok(&format!("created {kind} #{id} \"{title}\""));

  if let Some((path, index)) = bind {
    bind_created(path, index, kind, id)?;
    ui::arrow(&format!("bound #{id} to block {index} in {}", path.display()));
  }
  Ok(())
}

/// Bind a freshly created record into draft block `index`, which must be of
/// the same kind.
pub fn bind_created(path: &Path, index: usize, kind: BlockKind, id: RecordId) -> Result<()> {
  let mut draft = Draft::load(path)?;
  if let Some(block) = draft.blocks.get(index)
    && block.kind != kind
  {
    bail!("block {index} is a {} block, not {kind}; record #{id} left unbound", block.kind);
  }
  draft.bind(index, id)?;
  draft.save(path)
}
