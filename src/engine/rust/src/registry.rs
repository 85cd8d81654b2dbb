/* src/engine/rust/src/registry.rs */

//! Block kind -> preview renderer, and the preview assembly that feeds it.

use serde_json::Value;

use crate::adapt::{PropsBag, adapt};
use crate::kind::BlockKind;
use crate::record::find_record;
use crate::store::BlockInstance;

/// Renderer component name for a kind. `blog` and `social_media` have none.
pub fn component_for(kind: BlockKind) -> Option<&'static str> {
  let name = match kind {
    BlockKind::Hero => "Heroes",
    BlockKind::Card => "WhyChooseUs",
    BlockKind::Slider | BlockKind::Process => "TimelineSlider",
    BlockKind::BeforeAfter => "BeforeAfterStyleTwo",
    BlockKind::PromotionalLanding => "PromotionalLanding",
    BlockKind::PriceCompare => "PriceCompares",
    BlockKind::ContactForm => "ReachUsNowFull",
    BlockKind::Faq => "FaqSection",
    BlockKind::Review => "CommentSlider",
    BlockKind::Package => "Pricing",
    BlockKind::Service => "OurServicesSlider",
    BlockKind::Blog | BlockKind::SocialMedia => return None,
  };
  Some(name)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
  Rendered { component: &'static str, props: PropsBag, width_percent: f64 },
  /// Nothing bound, or the bound record is not among the fetched ones.
  Placeholder,
  ComponentNotFound(String),
}

/// Assemble the preview of one placed block from the records fetched for its kind.
pub fn preview_block(
  block: &BlockInstance,
  records: &[Value],
  locale: &str,
  media_base_url: &str,
) -> RenderOutcome {
  let Some(component) = component_for(block.kind) else {
    return RenderOutcome::ComponentNotFound(block.kind.as_str().to_string());
  };
  let record = block.bound_record_id.and_then(|id| find_record(records, id));
  match adapt(record, block.kind, locale, media_base_url) {
    Some(props) => {
      RenderOutcome::Rendered { component, props, width_percent: block.grid_width.percent() }
    }
    None => RenderOutcome::Placeholder,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::kind::GridWidth;
  use crate::store::{BlockUpdate, BuilderStore};
  use serde_json::json;

  #[test]
  fn registry_table() {
    assert_eq!(component_for(BlockKind::Process), Some("TimelineSlider"));
    assert_eq!(component_for(BlockKind::Slider), Some("TimelineSlider"));
    assert_eq!(component_for(BlockKind::Blog), None);
    assert_eq!(component_for(BlockKind::Faq), Some("FaqSection"));
  }

  #[test]
  fn preview_outcomes() {
    let records = vec![json!({"id": "42", "title": "Smile"}), json!({"id": 43, "title": "Other"})];
    let mut store = BuilderStore::new();
    let hero = store.add_block(BlockKind::Hero);
    let blog = store.add_block(BlockKind::Blog);
    let card = store.add_block(BlockKind::Card);
    store.update_block(hero, BlockUpdate::bind(42));
    store.update_block(hero, BlockUpdate::grid(GridWidth::new(6).unwrap()));
    store.update_block(card, BlockUpdate::bind(99));

    let outcome = preview_block(store.get(hero).unwrap(), &records, "tr", "https://x.test");
    let RenderOutcome::Rendered { component, props, width_percent } = outcome else {
      panic!("expected rendered, got {outcome:?}");
    };
    assert_eq!(component, "Heroes");
    assert_eq!(props["title"], "Smile");
    assert!((width_percent - 50.0).abs() < f64::EPSILON);

    assert_eq!(
      preview_block(store.get(blog).unwrap(), &records, "tr", ""),
      RenderOutcome::ComponentNotFound("blog".into())
    );
    assert_eq!(
      preview_block(store.get(card).unwrap(), &records, "tr", ""),
      RenderOutcome::Placeholder
    );
  }
}
