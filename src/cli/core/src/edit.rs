/* src/cli/core/src/edit.rs */

use std::path::Path;

use anyhow::{Result, bail};
use blockpage_engine::{BlockKind, component_for, resolve};

use crate::draft::Draft;
use crate::ui;

#[derive(Debug, Clone)]
pub enum DraftEdit {
  Add { kind: BlockKind, at: Option<usize> },
  Remove { index: usize },
  Move { from: usize, to: usize },
  Bind { index: usize, record: u64 },
  Width { index: usize, columns: u8 },
}

/// Apply one edit to the draft file, creating the file on first `add`.
pub fn apply(path: &Path, edit: DraftEdit) -> Result<()> {
  let mut draft = match edit {
    DraftEdit::Add { .. } => Draft::load_or_default(path)?,
    _ => Draft::load(path)?,
  };

  match edit {
    DraftEdit::Add { kind, at } => {
      let index = draft.add(kind, at)?;
      ui::ok(&format!("added {kind} at {index}"));
      if resolve(kind).is_none() {
        ui::detail(&format!("{kind} blocks cannot be bound to a record"));
      }
    }
    DraftEdit::Remove { index } => {
      let kind = draft.remove(index)?;
      ui::ok(&format!("removed {kind} block {index}"));
    }
    DraftEdit::Move { from, to } => {
      draft.move_block(from, to)?;
      ui::ok(&format!("moved block {from} to {to}"));
    }
    DraftEdit::Bind { index, record } => {
      if let Some(block) = draft.blocks.get(index)
        && record != 0
        && resolve(block.kind).is_none()
      {
        bail!("{} blocks cannot be bound to a record", block.kind);
      }
      let kind = draft.bind(index, record)?;
      if record == 0 {
        ui::ok(&format!("unbound {kind} block {index}"));
      } else {
        ui::ok(&format!("bound {kind} block {index} to #{record}"));
      }
    }
    DraftEdit::Width { index, columns } => {
      let width = draft.set_width(index, columns)?;
      ui::ok(&format!("block {index} is now {}", width.label()));
    }
  }

  draft.save(path)
}

pub fn show(path: &Path, default_language_id: u64) -> Result<()> {
  let draft = Draft::load(path)?;
  let doc = draft.document(default_language_id);
  let title = if doc.title.is_empty() { "(untitled)" } else { doc.title.as_str() };

  ui::banner("draft");
  ui::arrow(&format!("{title}  /{}", doc.slug));
  ui::detail(&format!(
    "language {}  header {}  footer {}",
    doc.language_id,
    selection(doc.header_id),
    selection(doc.footer_id)
  ));
  ui::blank();

  if draft.blocks.is_empty() {
    ui::warn("no blocks yet: add one with `blockpage draft add <kind>`");
    return Ok(());
  }
  for (index, block) in draft.blocks.iter().enumerate() {
    let binding = match (block.record, resolve(block.kind)) {
      (_, None) => "-".to_string(),
      (Some(id), _) => format!("#{id}"),
      (None, _) if block.kind.is_singleton() => "page toggle".to_string(),
      (None, _) => "unbound (skipped on save)".to_string(),
    };
    ui::block_row(index, block.kind.palette_label(), &block.grid.label(), &binding);
    if component_for(block.kind).is_none() {
      ui::detail("no preview renderer");
    }
  }
  ui::blank();
  ui::ok(&format!("{} of {} blocks will be submitted", doc.placement_count(), draft.blocks.len()));
  Ok(())
}

fn selection(id: Option<u64>) -> String {
  id.map_or_else(|| "none".to_string(), |id| format!("#{id}"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::draft::DEFAULT_DRAFT;

  #[test]
  fn first_add_creates_the_draft() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(DEFAULT_DRAFT);
    assert!(apply(&path, DraftEdit::Remove { index: 0 }).is_err());

    apply(&path, DraftEdit::Add { kind: BlockKind::Hero, at: None }).unwrap();
    apply(&path, DraftEdit::Add { kind: BlockKind::Card, at: Some(0) }).unwrap();
    let kinds: Vec<_> = Draft::load(&path).unwrap().blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, [BlockKind::Card, BlockKind::Hero]);
  }

  #[test]
  fn faq_cannot_be_bound() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(DEFAULT_DRAFT);
    apply(&path, DraftEdit::Add { kind: BlockKind::Faq, at: None }).unwrap();

    let err = apply(&path, DraftEdit::Bind { index: 0, record: 5 }).unwrap_err();
    assert!(err.to_string().contains("faq blocks cannot be bound"), "{err}");
    assert_eq!(Draft::load(&path).unwrap().blocks[0].record, None);

    apply(&path, DraftEdit::Bind { index: 0, record: 0 }).unwrap();
  }

  #[test]
  fn edits_persist() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(DEFAULT_DRAFT);
    for kind in [BlockKind::Hero, BlockKind::Slider, BlockKind::Review] {
      apply(&path, DraftEdit::Add { kind, at: None }).unwrap();
    }
    apply(&path, DraftEdit::Bind { index: 0, record: 42 }).unwrap();
    apply(&path, DraftEdit::Width { index: 0, columns: 6 }).unwrap();
    apply(&path, DraftEdit::Move { from: 0, to: 2 }).unwrap();
    apply(&path, DraftEdit::Remove { index: 0 }).unwrap();

    let draft = Draft::load(&path).unwrap();
    let kinds: Vec<_> = draft.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, [BlockKind::Review, BlockKind::Hero]);
    assert_eq!(draft.blocks[1].record, Some(42));
    assert_eq!(draft.blocks[1].grid.get(), 6);
  }

  #[test]
  fn bad_edits_leave_the_file_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(DEFAULT_DRAFT);
    apply(&path, DraftEdit::Add { kind: BlockKind::Hero, at: None }).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(apply(&path, DraftEdit::Width { index: 0, columns: 13 }).is_err());
    assert!(apply(&path, DraftEdit::Move { from: 0, to: 4 }).is_err());
    assert!(apply(&path, DraftEdit::Bind { index: 3, record: 1 }).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
  }

  #[test]
  fn show_needs_an_existing_draft() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(DEFAULT_DRAFT);
    assert!(show(&path, 1).is_err());
    apply(&path, DraftEdit::Add { kind: BlockKind::Blog, at: None }).unwrap();
    show(&path, 1).unwrap();
  }
}
