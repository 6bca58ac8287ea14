//! Common data structs and the schema decoder for the Gelbooru JSON API.
//!
//! The API is loosely typed: booleans travel as strings, tags as a single space-delimited
//! string and absent values as `""` or `"false"`. Everything in this crate turns that into
//! the [`Post`](post::Post) and [`Tag`](tag::Tag) records without touching the network.

// Public Exports
pub use ahash;
pub use log;
pub use serde;
pub use serde_json;

pub mod error;
mod fields;
pub mod macros;
pub mod post;
pub mod response;
pub mod tag;

/// Root of the Gelbooru website, used for browser-facing post links.
pub const SITE_URL: &str = "https://gelbooru.com";

/// Host serving original images and thumbnails.
pub const IMAGE_HOST: &str = "https://img3.gelbooru.com";

/// Image shown while no real post is available.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://gelbooru.com/layout/404.jpg";
