/* src/cli/core/src/draft.rs */

//! Page drafts stored as TOML next to the project config.
//!
//! Edits never touch the block list directly: the draft is loaded into a
//! `BuilderStore`, mutated through its operations, then written back.

use std::path::Path;

use anyhow::{Context, Result, bail};
use blockpage_engine::{
  BlockId, BlockKind, BlockUpdate, BuilderStore, GridWidth, PageDocument, PageSettings, RecordId,
  to_payload,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DRAFT: &str = "page.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
  /// `0` = no header.
  #[serde(default)]
  pub header_id: u64,
  /// `0` = no footer.
  #[serde(default)]
  pub footer_id: u64,
  /// Overrides `editor.language_id` from the config.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language_id: Option<u64>,
  #[serde(default)]
  pub page: PageSettings,
  #[serde(default)]
  pub blocks: Vec<DraftBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBlock {
  pub kind: BlockKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub record: Option<RecordId>,
  #[serde(default)]
  pub grid: GridWidth,
}

impl Draft {
  pub fn load(path: &Path) -> Result<Self> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
  }

  /// Missing file starts an empty draft.
  pub fn load_or_default(path: &Path) -> Result<Self> {
    if path.exists() { Self::load(path) } else { Ok(Self::default()) }
  }

  pub fn save(&self, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(self).context("failed to serialize draft")?;
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
  }

  pub fn to_store(&self) -> BuilderStore {
    let mut store = BuilderStore::new();
    for block in &self.blocks {
      let id = store.add_block(block.kind);
      let update = BlockUpdate {
        grid_width: Some(block.grid),
        bound_record_id: Some(block.record.filter(|r| *r != 0)),
      };
      store.update_block(id, update);
    }
    store
  }

  pub fn set_blocks(&mut self, store: &BuilderStore) {
    self.blocks = store
      .blocks()
      .iter()
      .map(|b| DraftBlock { kind: b.kind, record: b.bound_record_id, grid: b.grid_width })
      .collect();
  }

  pub fn document(&self, default_language_id: u64) -> PageDocument {
    let store = self.to_store();
    to_payload(
      store.blocks(),
      &self.page,
      self.header_id,
      self.footer_id,
      self.language_id.unwrap_or(default_language_id),
    )
  }

  fn edit<T>(&mut self, op: impl FnOnce(&mut BuilderStore) -> Result<T>) -> Result<T> {
    let mut store = self.to_store();
    let out = op(&mut store)?;
    self.set_blocks(&store);
    Ok(out)
  }

  // --- Block operations ---

  /// Returns the index the block landed on.
  pub fn add(&mut self, kind: BlockKind, at: Option<usize>) -> Result<usize> {
    self.edit(|store| {
      let id = match at {
        Some(index) => store.insert_block(kind, index),
        None => store.add_block(kind),
      };
      store.index_of(id).context("inserted block vanished")
    })
  }

  pub fn remove(&mut self, index: usize) -> Result<BlockKind> {
    self.edit(|store| {
      let id = block_at(store, index)?;
      let removed = store.remove_block(id).context("block vanished")?;
      Ok(removed.kind)
    })
  }

  pub fn move_block(&mut self, from: usize, to: usize) -> Result<()> {
    self.edit(|store| {
      if !store.reorder(from, to) {
        bail!("cannot move block {from} to {to}: draft has {} blocks", store.len());
      }
      Ok(())
    })
  }

  /// Bind a record; `0` clears the binding.
  pub fn bind(&mut self, index: usize, record: RecordId) -> Result<BlockKind> {
    self.edit(|store| {
      let id = block_at(store, index)?;
      store.update_block(id, BlockUpdate::bind(record));
      Ok(store.blocks()[index].kind)
    })
  }

  pub fn set_width(&mut self, index: usize, columns: u8) -> Result<GridWidth> {
    let Some(width) = GridWidth::new(columns) else {
      bail!("grid width must be between 1 and 12 (got {columns})");
    };
    self.edit(|store| {
      let id = block_at(store, index)?;
      store.update_block(id, BlockUpdate::grid(width));
      Ok(width)
    })
  }
}

fn block_at(store: &BuilderStore, index: usize) -> Result<BlockId> {
  match store.blocks().get(index) {
    Some(block) => Ok(block.id),
    None => bail!("no block at index {index} (draft has {} blocks)", store.len()),
  }
}
