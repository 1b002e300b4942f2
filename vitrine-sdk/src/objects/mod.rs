//! Wire types for the site configuration document.
//!
//! Field names follow the published JSON shape (camelCase keys), so a
//! document produced by any earlier editor round-trips byte-compatibly.

mod document;
mod media;
mod product;
mod upload;

pub use document::{AboutBlock, ContactBlock, HeroBlock, SiteDocument};
pub use media::{MediaKind, MediaReference};
pub use product::Product;
pub use upload::UploadResponse;
