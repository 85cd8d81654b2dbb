/* src/engine/rust/src/payload/tests.rs */

use serde_json::json;

use super::*;
use crate::store::{BlockUpdate, BuilderStore};

fn titled(title: &str) -> PageSettings {
  PageSettings { title: Some(title.into()), ..PageSettings::default() }
}

#[test]
fn empty_builder_defaults() {
  let doc = to_payload(&[], &PageSettings::default(), 0, 0, 1);
  assert!(doc.slug.starts_with("page-"));
  assert_eq!(doc.placement_count(), 0);
  for list in [&doc.heroes, &doc.cards, &doc.processes, &doc.sliders, &doc.price_compares] {
    assert!(list.is_empty());
  }
  for config in [doc.blogs, doc.services, doc.social_media, doc.reviews] {
    assert_eq!(config, SingletonConfig { enabled: false, order: 0, grid_columns: GridWidth::FULL });
  }
  assert_eq!(doc.title, "");
  assert!(doc.robots_index && doc.robots_follow);
  assert_eq!(doc.faq_style, "default_faq");
  assert_eq!(doc.parent_id, None);
}

#[test]
fn unbound_list_blocks_are_omitted() {
  let mut store = BuilderStore::new();
  let hero = store.add_block(BlockKind::Hero);
  store.add_block(BlockKind::Card);
  store.update_block(hero, BlockUpdate::bind(7));

  let doc = to_payload(store.blocks(), &titled("Home"), 0, 0, 1);
  assert_eq!(doc.heroes, vec![ListEntry { id: 7, order: 0, grid_columns: GridWidth::FULL }]);
  assert!(doc.cards.is_empty());
}

#[test]
fn singleton_last_wins() {
  let mut store = BuilderStore::new();
  let first = store.add_block(BlockKind::Blog);
  store.add_block(BlockKind::Hero);
  let second = store.add_block(BlockKind::Blog);
  store.update_block(first, BlockUpdate::bind(1));
  store.update_block(second, BlockUpdate::bind(2));
  store.update_block(second, BlockUpdate::grid(GridWidth::new(4).unwrap()));

  let doc = to_payload(store.blocks(), &titled("Blog"), 0, 0, 1);
  assert_eq!(
    doc.blogs,
    SingletonConfig { enabled: true, order: 2, grid_columns: GridWidth::new(4).unwrap() }
  );
}

#[test]
fn singleton_enabled_even_unbound() {
  let mut store = BuilderStore::new();
  store.add_block(BlockKind::Hero);
  store.add_block(BlockKind::Review);
  let doc = to_payload(store.blocks(), &titled("Reviews"), 0, 0, 1);
  assert!(doc.reviews.enabled);
  assert_eq!(doc.reviews.order, 1);
  assert!(!doc.services.enabled);
}

#[test]
fn order_follows_index_after_reorder() {
  let mut store = BuilderStore::new();
  let a = store.add_block(BlockKind::Hero);
  let b = store.add_block(BlockKind::Hero);
  let c = store.add_block(BlockKind::Slider);
  store.update_block(a, BlockUpdate::bind(10));
  store.update_block(b, BlockUpdate::bind(11));
  store.update_block(c, BlockUpdate::bind(12));
  store.reorder(2, 0);

  let doc = to_payload(store.blocks(), &titled("Order"), 0, 0, 1);
  assert_eq!(doc.sliders[0].order, 0);
  let heroes: Vec<_> = doc.heroes.iter().map(|e| (e.id, e.order)).collect();
  assert_eq!(heroes, vec![(10, 1), (11, 2)]);
}

#[test]
fn faq_has_no_slot() {
  let mut store = BuilderStore::new();
  let faq = store.add_block(BlockKind::Faq);
  store.update_block(faq, BlockUpdate::bind(3));
  let doc = to_payload(store.blocks(), &titled("FAQ"), 0, 0, 1);
  assert_eq!(doc.placement_count(), 0);
}

#[test]
fn slug_resolution() {
  let explicit = PageSettings {
    title: Some("Ignored".into()),
    slug: Some("custom-slug".into()),
    ..PageSettings::default()
  };
  assert_eq!(to_payload(&[], &explicit, 0, 0, 1).slug, "custom-slug");

  let blank = PageSettings { slug: Some("   ".into()), ..titled("Hakkımızda") };
  assert_eq!(to_payload(&[], &blank, 0, 0, 1).slug, "hakkimizda");

  assert!(to_payload(&[], &titled("***"), 0, 0, 1).slug.starts_with("page-"));
}

#[test]
fn metadata_is_copied() {
  let settings = PageSettings {
    title: Some("Implants".into()),
    excerpt: Some("Short".into()),
    meta_title: Some("Implants | Clinic".into()),
    meta_description: Some("Desc".into()),
    focus_keyword: Some("implant".into()),
    robots_index: Some(false),
    robots_follow: None,
    parent_id: Some(5),
    faq_style: Some("accordion".into()),
    ..PageSettings::default()
  };
  let doc = to_payload(&[], &settings, 0, 0, 4);
  assert_eq!(doc.meta_title, "Implants | Clinic");
  assert_eq!(doc.focus_keyword, "implant");
  assert!(!doc.robots_index);
  assert!(doc.robots_follow);
  assert_eq!(doc.parent_id, Some(5));
  assert_eq!(doc.faq_style, "accordion");
  assert_eq!(doc.language_id, 4);

  let zero_parent = PageSettings { parent_id: Some(0), ..PageSettings::default() };
  assert_eq!(to_payload(&[], &zero_parent, 0, 0, 1).parent_id, None);
}

#[test]
fn hero_scenario_serializes() {
  let mut store = BuilderStore::new();
  let hero = store.add_block(BlockKind::Hero);
  store.update_block(hero, BlockUpdate::bind(42));
  store.update_block(hero, BlockUpdate::grid(GridWidth::new(6).unwrap()));

  let doc = to_payload(store.blocks(), &titled("Landing"), 0, 3, 2);
  let value = serde_json::to_value(&doc).unwrap();
  assert_eq!(value["heroes"], json!([{"id": 42, "order": 0, "grid_columns": 6}]));
  assert_eq!(value["header_id"], json!(null));
  assert_eq!(value["footer_id"], json!(3));
  assert_eq!(value["language_id"], json!(2));
  assert_eq!(value["blogs"], json!({"enabled": false, "order": 0, "grid_columns": 12}));
  assert_eq!(export_file_name(&doc), "landing.json");
}

#[test]
fn settings_deserialize_partially() {
  let settings: PageSettings = serde_json::from_value(json!({"title": "About"})).unwrap();
  assert_eq!(settings.title.as_deref(), Some("About"));
  assert_eq!(settings.robots_index, None);
}

#[test]
fn export_name_stays_a_single_component() {
  let with_slug = |slug: &str| PageSettings { slug: Some(slug.into()), ..PageSettings::default() };

  let doc = to_payload(&[], &with_slug("../../etc/evil"), 0, 0, 1);
  assert_eq!(doc.slug, "../../etc/evil");
  assert_eq!(export_file_name(&doc), "etc-evil.json");

  let doc = to_payload(&[], &with_slug("services/implants"), 0, 0, 1);
  assert_eq!(doc.slug, "services/implants");
  assert_eq!(export_file_name(&doc), "services-implants.json");

  let doc = to_payload(&[], &with_slug("..\\..\\"), 0, 0, 1);
  let name = export_file_name(&doc);
  assert!(name.starts_with("page-") && name.ends_with(".json"), "{name}");
}
