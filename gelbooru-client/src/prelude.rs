pub use crate::client::{GelbooruClient, DEFAULT_LIMIT};
pub use crate::config::{Credentials, ServerConfig};
pub use crate::error::ClientError;
pub use crate::transport::{HttpResponse, HttpTransport, Transport};

pub use gelbooru_common::post::{rating::Rating, tags::TagSet, Post};
pub use gelbooru_common::tag::Tag;
