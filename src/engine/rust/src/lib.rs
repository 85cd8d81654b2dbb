/* src/engine/rust/src/lib.rs */

pub mod adapt;
pub mod endpoint;
pub mod envelope;
pub mod kind;
pub mod label;
pub mod normalize;
pub mod payload;
pub mod record;
pub mod registry;
pub mod slug;
pub mod store;

// Public API re-exports
pub use adapt::{PropsBag, adapt};
pub use endpoint::{LANGUAGES_PATH, PAGES_PATH, resolve, resolve_name};
pub use envelope::{Envelope, extract_created_id, extract_records};
pub use kind::{BlockKind, GridWidth, ParseKindError};
pub use label::label;
pub use normalize::{normalize, process_steps, resolve_media_url};
pub use payload::{ListEntry, PageDocument, PageSettings, SingletonConfig, export_file_name, to_payload};
pub use record::{RecordId, find_record};
pub use registry::{RenderOutcome, component_for, preview_block};
pub use slug::{generate_slug, slugify};
pub use store::{
  BlockId, BlockInstance, BlockUpdate, BuilderStore, DragSource, DropOutcome, DropTarget,
};
