//! Typed client for the Gelbooru `dapi` post and tag listings.
//!
//! [`GelbooruClient`](client::GelbooruClient) builds the request URLs, sends them through a
//! [`Transport`](transport::Transport), checks the status and hands the body to the decoder in
//! [`gelbooru_common`]. Pagination is left to the caller, who passes the page index on every call.

extern crate gelbooru_common;

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod transport;
