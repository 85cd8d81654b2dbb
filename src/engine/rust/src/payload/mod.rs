/* src/engine/rust/src/payload/mod.rs */

//! Builder state + page settings -> backend submission document.
//! The document is a pure projection, rebuilt from scratch on every save.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::kind::{BlockKind, GridWidth};
use crate::record::RecordId;
use crate::slug::{generate_slug, slugify};
use crate::store::BlockInstance;

/// Page metadata edited in the settings form. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
  pub title: Option<String>,
  pub slug: Option<String>,
  pub excerpt: Option<String>,
  pub meta_title: Option<String>,
  pub meta_description: Option<String>,
  pub focus_keyword: Option<String>,
  pub robots_index: Option<bool>,
  pub robots_follow: Option<bool>,
  pub parent_id: Option<RecordId>,
  pub faq_style: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
  pub id: RecordId,
  pub order: usize,
  pub grid_columns: GridWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingletonConfig {
  pub enabled: bool,
  pub order: usize,
  pub grid_columns: GridWidth,
}

impl Default for SingletonConfig {
  fn default() -> Self {
    Self { enabled: false, order: 0, grid_columns: GridWidth::FULL }
  }
}

pub const DEFAULT_FAQ_STYLE: &str = "default_faq";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
  // --- Metadata ---
  pub title: String,
  pub slug: String,
  pub excerpt: String,
  pub meta_title: String,
  pub meta_description: String,
  pub focus_keyword: String,
  pub robots_index: bool,
  pub robots_follow: bool,
  pub language_id: u64,
  pub header_id: Option<u64>,
  pub footer_id: Option<u64>,
  pub parent_id: Option<u64>,
  pub faq_style: String,

  // --- Multi-placement lists ---
  pub heroes: Vec<ListEntry>,
  pub cards: Vec<ListEntry>,
  pub processes: Vec<ListEntry>,
  pub before_afters: Vec<ListEntry>,
  pub contact_forms: Vec<ListEntry>,
  pub promotional_landings: Vec<ListEntry>,
  pub sliders: Vec<ListEntry>,
  pub packages: Vec<ListEntry>,
  pub price_compares: Vec<ListEntry>,

  // --- Page-level toggles ---
  pub blogs: SingletonConfig,
  pub services: SingletonConfig,
  pub social_media: SingletonConfig,
  pub reviews: SingletonConfig,
}

impl PageDocument {
  fn list_mut(&mut self, kind: BlockKind) -> Option<&mut Vec<ListEntry>> {
    let list = match kind {
      BlockKind::Hero => &mut self.heroes,
      BlockKind::Card => &mut self.cards,
      BlockKind::Process => &mut self.processes,
      BlockKind::BeforeAfter => &mut self.before_afters,
      BlockKind::ContactForm => &mut self.contact_forms,
      BlockKind::PromotionalLanding => &mut self.promotional_landings,
      BlockKind::Slider => &mut self.sliders,
      BlockKind::Package => &mut self.packages,
      BlockKind::PriceCompare => &mut self.price_compares,
      BlockKind::Blog
      | BlockKind::Service
      | BlockKind::SocialMedia
      | BlockKind::Review
      | BlockKind::Faq => return None,
    };
    Some(list)
  }

  fn singleton_mut(&mut self, kind: BlockKind) -> Option<&mut SingletonConfig> {
    match kind {
      BlockKind::Blog => Some(&mut self.blogs),
      BlockKind::Service => Some(&mut self.services),
      BlockKind::SocialMedia => Some(&mut self.social_media),
      BlockKind::Review => Some(&mut self.reviews),
      _ => None,
    }
  }

  /// Total number of placements that will be submitted.
  pub fn placement_count(&self) -> usize {
    let lists = [
      &self.heroes,
      &self.cards,
      &self.processes,
      &self.before_afters,
      &self.contact_forms,
      &self.promotional_landings,
      &self.sliders,
      &self.packages,
      &self.price_compares,
    ];
    let toggles = [&self.blogs, &self.services, &self.social_media, &self.reviews];
    lists.iter().map(|l| l.len()).sum::<usize>() + toggles.iter().filter(|t| t.enabled).count()
  }
}

fn text(value: Option<&String>) -> String {
  value.cloned().unwrap_or_default()
}

/// `0` is the "nothing selected" sentinel of the header/footer pickers.
fn selection(id: u64) -> Option<u64> {
  (id > 0).then_some(id)
}

/// Build the submission document.
///
/// Blocks are walked in index order, which is authoritative for `order`.
/// Unbound blocks of list kinds are left out. For singleton kinds the last
/// block of the kind wins and earlier ones are discarded.
pub fn to_payload(
  blocks: &[BlockInstance],
  settings: &PageSettings,
  header_id: u64,
  footer_id: u64,
  language_id: u64,
) -> PageDocument {
  let slug = match settings.slug.as_deref() {
    Some(slug) if !slug.trim().is_empty() => slug.to_string(),
    _ => generate_slug(settings.title.as_deref()),
  };

  let mut doc = PageDocument {
    title: text(settings.title.as_ref()),
    slug,
    excerpt: text(settings.excerpt.as_ref()),
    meta_title: text(settings.meta_title.as_ref()),
    meta_description: text(settings.meta_description.as_ref()),
    focus_keyword: text(settings.focus_keyword.as_ref()),
    robots_index: settings.robots_index.unwrap_or(true),
    robots_follow: settings.robots_follow.unwrap_or(true),
    language_id,
    header_id: selection(header_id),
    footer_id: selection(footer_id),
    parent_id: settings.parent_id.and_then(selection),
    faq_style: settings.faq_style.clone().unwrap_or_else(|| DEFAULT_FAQ_STYLE.to_string()),
    heroes: vec![],
    cards: vec![],
    processes: vec![],
    before_afters: vec![],
    contact_forms: vec![],
    promotional_landings: vec![],
    sliders: vec![],
    packages: vec![],
    price_compares: vec![],
    blogs: SingletonConfig::default(),
    services: SingletonConfig::default(),
    social_media: SingletonConfig::default(),
    reviews: SingletonConfig::default(),
  };

  for (index, block) in blocks.iter().enumerate() {
    if let Some(config) = doc.singleton_mut(block.kind) {
      if config.enabled {
        debug!(kind = %block.kind, previous = config.order, order = index, "singleton block replaces an earlier one");
      }
      *config = SingletonConfig { enabled: true, order: index, grid_columns: block.grid_width };
      continue;
    }
    let Some(list) = doc.list_mut(block.kind) else {
      continue;
    };
    match block.bound_record_id {
      Some(id) => list.push(ListEntry { id, order: index, grid_columns: block.grid_width }),
      None => debug!(kind = %block.kind, order = index, "unbound block left out of payload"),
    }
  }

  doc
}

/// File name offered for the exported document.
///
/// The slug is re-slugified with path separators treated as spaces, so the
/// name is always a single path component.
pub fn export_file_name(doc: &PageDocument) -> String {
  let stem = slugify(&doc.slug.replace(['/', '\\'], " "));
  let stem = if stem.is_empty() { generate_slug(None) } else { stem };
  format!("{stem}.json")
}
