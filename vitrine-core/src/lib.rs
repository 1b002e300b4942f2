//! Core state for Vitrine: the shared document store, the pure editing
//! model over the site document, and the locally persisted wishlist.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod edit;
pub mod store;
pub mod wishlist;
