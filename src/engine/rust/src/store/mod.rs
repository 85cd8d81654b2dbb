/* src/engine/rust/src/store/mod.rs */

//! Ordered collection of placed blocks.
//!
//! `position` always equals the array index. It is recomputed from scratch after
//! every mutation rather than patched, so gaps and duplicates cannot appear.


use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kind::{BlockKind, GridWidth};
use crate::record::RecordId;

/// Session-unique block identifier. Never reused, so a late response keyed by
/// a removed block's id finds nothing instead of a replacement block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
  fn generate() -> Self {
    Self(Uuid::new_v4())
  }
}

impl fmt::Display for BlockId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInstance {
  pub id: BlockId,
  #[serde(rename = "type")]
  pub kind: BlockKind,
  pub bound_record_id: Option<RecordId>,
  pub grid_width: GridWidth,
  pub position: usize,
}

impl BlockInstance {
  pub fn is_bound(&self) -> bool {
    self.bound_record_id.is_some()
  }
}

/// Partial update merged into a block by [`BuilderStore::update_block`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockUpdate {
  pub grid_width: Option<GridWidth>,
  /// `Some(None)` clears the binding.
  pub bound_record_id: Option<Option<RecordId>>,
}

impl BlockUpdate {
  pub fn grid(width: GridWidth) -> Self {
    Self { grid_width: Some(width), ..Self::default() }
  }

  /// Bind to a record. Id `0` is the picker's "nothing selected" entry and unbinds.
  pub fn bind(record_id: RecordId) -> Self {
    let binding = (record_id != 0).then_some(record_id);
    Self { bound_record_id: Some(binding), ..Self::default() }
  }

  pub fn unbind() -> Self {
    Self { bound_record_id: Some(None), ..Self::default() }
  }
}

/// Where a dragged item comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
  /// A new block dragged out of the palette.
  Palette(BlockKind),
  /// An existing block dragged within the canvas.
  Canvas(BlockId),
}

/// What the item was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
  /// The canvas drop zone itself (append).
  Canvas,
  /// An existing block (take its index).
  Block(BlockId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
  Inserted(BlockId),
  Moved { from: usize, to: usize },
  Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct BuilderStore {
  blocks: Vec<BlockInstance>,
}

impl BuilderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn blocks(&self) -> &[BlockInstance] {
    &self.blocks
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }

  pub fn get(&self, id: BlockId) -> Option<&BlockInstance> {
    self.blocks.iter().find(|b| b.id == id)
  }

  pub fn index_of(&self, id: BlockId) -> Option<usize> {
    self.blocks.iter().position(|b| b.id == id)
  }

  /// Append a full-width, unbound block.
  pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
    self.insert_block(kind, self.blocks.len())
  }

  /// Insert a new block at `index` (clamped to the current length).
  pub fn insert_block(&mut self, kind: BlockKind, index: usize) -> BlockId {
    let id = BlockId::generate();
    let index = index.min(self.blocks.len());
    self.blocks.insert(
      index,
      BlockInstance {
        id,
        kind,
        bound_record_id: None,
        grid_width: GridWidth::FULL,
        position: index,
      },
    );
    self.renumber();
    id
  }

  pub fn remove_block(&mut self, id: BlockId) -> Option<BlockInstance> {
    let index = self.index_of(id)?;
    let removed = self.blocks.remove(index);
    self.renumber();
    Some(removed)
  }

  /// Shallow-merge `update` into the block. Returns false for unknown ids.
  pub fn update_block(&mut self, id: BlockId, update: BlockUpdate) -> bool {
    let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
      return false;
    };
    if let Some(width) = update.grid_width {
      block.grid_width = width;
    }
    if let Some(binding) = update.bound_record_id {
      block.bound_record_id = binding;
    }
    true
  }

  /// Move the block at `from` to `to`, shifting the blocks in between.
  /// Out-of-range indices leave the store untouched and return false.
  pub fn reorder(&mut self, from: usize, to: usize) -> bool {
    let len = self.blocks.len();
    if from >= len || to >= len {
      return false;
    }
    if from != to {
      let block = self.blocks.remove(from);
      self.blocks.insert(to, block);
      self.renumber();
    }
    true
  }

  /// Canvas drag of `active` released over `over`: `active` takes `over`'s index.
  pub fn move_block(&mut self, active: BlockId, over: BlockId) -> bool {
    match (self.index_of(active), self.index_of(over)) {
      (Some(from), Some(to)) => self.reorder(from, to),
      _ => false,
    }
  }

  /// Route a finished drag to the right operation. Palette items are inserted,
  /// canvas items are moved; the two are never conflated.
  pub fn dispatch_drop(&mut self, source: DragSource, target: Option<DropTarget>) -> DropOutcome {
    let Some(target) = target else {
      return DropOutcome::Ignored;
    };
    match source {
      DragSource::Palette(kind) => {
        let index = match target {
          DropTarget::Canvas => self.blocks.len(),
          DropTarget::Block(over) => match self.index_of(over) {
            Some(i) => i,
            None => return DropOutcome::Ignored,
          },
        };
        DropOutcome::Inserted(self.insert_block(kind, index))
      }
      DragSource::Canvas(active) => {
        let Some(from) = self.index_of(active) else {
          return DropOutcome::Ignored;
        };
        let to = match target {
          DropTarget::Canvas => self.blocks.len() - 1,
          DropTarget::Block(over) if over == active => return DropOutcome::Ignored,
          DropTarget::Block(over) => match self.index_of(over) {
            Some(i) => i,
            None => return DropOutcome::Ignored,
          },
        };
        if from == to {
          return DropOutcome::Ignored;
        }
        self.reorder(from, to);
        DropOutcome::Moved { from, to }
      }
    }
  }

  fn renumber(&mut self) {
    for (index, block) in self.blocks.iter_mut().enumerate() {
      block.position = index;
    }
  }
}
