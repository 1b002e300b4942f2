//! Shared types and HTTP clients for Vitrine.
//!
//! The site configuration lives as a single JSON document on a media host;
//! this crate defines the document's wire types ([`objects`]) and, behind
//! the `client` cargo feature, the HTTP clients that fetch the document,
//! upload media assets and publish edited documents ([`client`]).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod objects;

#[cfg(feature = "client")]
pub mod client;
