/* src/engine/rust/src/endpoint.rs */

//! Block type -> remote collection path.

use crate::kind::BlockKind;

pub const LANGUAGES_PATH: &str = "/v1/admin/languages";
pub const PAGES_PATH: &str = "/v1/admin/pages";

/// Collection path for a block kind. `None` means the kind cannot be bound
/// to a remote record and binding must be disabled for it.
pub fn resolve(kind: BlockKind) -> Option<&'static str> {
  let path = match kind {
    BlockKind::Hero => "/v1/admin/heroes",
    BlockKind::Card => "/v1/admin/cards",
    BlockKind::Process => "/v1/admin/processes",
    BlockKind::ContactForm => "/v1/admin/contact-form",
    BlockKind::BeforeAfter => "/v1/admin/before-afters",
    BlockKind::PromotionalLanding => "/v1/admin/promotional-landings",
    BlockKind::Slider => "/v1/admin/sliders",
    BlockKind::Package => "/v1/admin/packages",
    BlockKind::PriceCompare => "/v1/admin/price-compares",
    BlockKind::Blog => "/v1/admin/blogs",
    BlockKind::Service => "/v1/admin/services",
    BlockKind::SocialMedia => "/v1/admin/social-medias",
    BlockKind::Review => "/v1/admin/reviews",
    BlockKind::Faq => return None,
  };
  Some(path)
}

/// String-keyed lookup, also covering the system collections.
/// Unknown names resolve to `None`, never an error.
pub fn resolve_name(name: &str) -> Option<&'static str> {
  match name {
    "languages" => Some(LANGUAGES_PATH),
    "pages" => Some(PAGES_PATH),
    other => other.parse::<BlockKind>().ok().and_then(resolve),
  }
}
