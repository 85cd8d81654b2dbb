/* src/engine/rust/src/kind.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of content blocks the palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
  Hero,
  Card,
  Process,
  BeforeAfter,
  ContactForm,
  Slider,
  Package,
  PriceCompare,
  PromotionalLanding,
  Blog,
  Service,
  SocialMedia,
  Faq,
  Review,
}

impl BlockKind {
  /// Palette order.
  pub const ALL: [BlockKind; 14] = [
    Self::Hero,
    Self::Card,
    Self::BeforeAfter,
    Self::Process,
    Self::ContactForm,
    Self::Slider,
    Self::Package,
    Self::PriceCompare,
    Self::PromotionalLanding,
    Self::Blog,
    Self::Service,
    Self::SocialMedia,
    Self::Faq,
    Self::Review,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Hero => "hero",
      Self::Card => "card",
      Self::Process => "process",
      Self::BeforeAfter => "before_after",
      Self::ContactForm => "contact_form",
      Self::Slider => "slider",
      Self::Package => "package",
      Self::PriceCompare => "price_compare",
      Self::PromotionalLanding => "promotional_landing",
      Self::Blog => "blog",
      Self::Service => "service",
      Self::SocialMedia => "social_media",
      Self::Faq => "faq",
      Self::Review => "review",
    }
  }

  /// Human label shown in the palette.
  pub fn palette_label(self) -> &'static str {
    match self {
      Self::Hero => "Heroes",
      Self::Card => "Cards",
      Self::Process => "Process",
      Self::BeforeAfter => "Before/After",
      Self::ContactForm => "Contact Form",
      Self::Slider => "Sliders",
      Self::Package => "Packages",
      Self::PriceCompare => "Price Compare",
      Self::PromotionalLanding => "Promotional Landing",
      Self::Blog => "Blogs",
      Self::Service => "Services",
      Self::SocialMedia => "Social Media",
      Self::Faq => "FAQ",
      Self::Review => "Reviews",
    }
  }

  /// Page-level toggles: at most one config per page, no ordered list.
  pub fn is_singleton(self) -> bool {
    matches!(self, Self::Blog | Self::Service | Self::SocialMedia | Self::Review)
  }

  /// Kinds whose quick-create body carries a `translations` array.
  pub fn is_translated(self) -> bool {
    matches!(
      self,
      Self::Hero | Self::Card | Self::Blog | Self::Service | Self::Process | Self::BeforeAfter
    )
  }
}

impl fmt::Display for BlockKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let known: Vec<&str> = BlockKind::ALL.into_iter().map(BlockKind::as_str).collect();
    write!(f, "unknown block type \"{}\" (expected one of: {})", self.0, known.join(", "))
  }
}

impl std::error::Error for ParseKindError {}

impl FromStr for BlockKind {
  type Err = ParseKindError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or_else(|| ParseKindError(s.to_string()))
  }
}

/// Horizontal span in twelfths of the canvas, always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridWidth(u8);

impl GridWidth {
  pub const FULL: GridWidth = GridWidth(12);

  pub fn new(columns: u8) -> Option<Self> {
    (1..=12).contains(&columns).then_some(Self(columns))
  }

  pub fn get(self) -> u8 {
    self.0
  }

  pub fn percent(self) -> f64 {
    f64::from(self.0) / 12.0 * 100.0
  }

  pub fn label(self) -> String {
    match self.0 {
      12 => "Full width".to_string(),
      6 => "Half (1/2)".to_string(),
      4 => "One third (1/3)".to_string(),
      3 => "One quarter (1/4)".to_string(),
      n => format!("Grid: {n}"),
    }
  }
}

impl Default for GridWidth {
  fn default() -> Self {
    Self::FULL
  }
}

impl TryFrom<u8> for GridWidth {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Self::new(value).ok_or_else(|| format!("grid width must be within 1..=12, got {value}"))
  }
}

impl From<GridWidth> for u8 {
  fn from(width: GridWidth) -> Self {
    width.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kind_round_trips_through_name() {
    for kind in BlockKind::ALL {
      assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
    }
  }

  #[test]
  fn unknown_kind_lists_known_names() {
    let err = "carousel".parse::<BlockKind>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("carousel"));
    assert!(msg.contains("before_after"));
  }

  #[test]
  fn serde_uses_snake_case() {
    let json = serde_json::to_string(&BlockKind::PromotionalLanding).unwrap();
    assert_eq!(json, r#""promotional_landing""#);
  }

  #[test]
  fn singleton_kinds() {
    let singles: Vec<_> = BlockKind::ALL.into_iter().filter(|k| k.is_singleton()).collect();
    assert_eq!(
      singles,
      vec![BlockKind::Blog, BlockKind::Service, BlockKind::SocialMedia, BlockKind::Review]
    );
  }

  #[test]
  fn grid_width_bounds() {
    assert!(GridWidth::new(0).is_none());
    assert!(GridWidth::new(13).is_none());
    assert_eq!(GridWidth::new(6).unwrap().get(), 6);
    assert_eq!(GridWidth::default(), GridWidth::FULL);
  }

  #[test]
  fn grid_width_rejects_out_of_range_on_deserialize() {
    assert!(serde_json::from_str::<GridWidth>("0").is_err());
    assert_eq!(serde_json::from_str::<GridWidth>("4").unwrap().get(), 4);
  }

  #[test]
  fn grid_labels_and_percent() {
    assert_eq!(GridWidth::FULL.label(), "Full width");
    assert_eq!(GridWidth::new(6).unwrap().label(), "Half (1/2)");
    assert_eq!(GridWidth::new(5).unwrap().label(), "Grid: 5");
    assert!((GridWidth::new(6).unwrap().percent() - 50.0).abs() < f64::EPSILON);
  }
}
