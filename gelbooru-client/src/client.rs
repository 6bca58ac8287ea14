//! Query client for the Gelbooru `dapi`
//!
//! # Example
//! ```no_run
//! use gelbooru_client::prelude::*;
//!
//! async fn newest_rin() -> Result<(), ClientError> {
//!     let client = GelbooruClient::new(Credentials::new("api_key", "user_id"))?;
//!
//!     let tags: TagSet = ["kagamine_rin", "-rating:explicit"]
//!         .iter()
//!         .map(|t| t.to_string())
//!         .collect();
//!
//!     // The caller owns the cursor: ask for page 1 next time.
//!     let posts = client.list_posts(&tags, 20, 0).await?;
//!
//!     for post in posts {
//!         println!("{} {}", post.id, post.url());
//!     }
//!     Ok(())
//! }
//! ```
use gelbooru_common::{
    join_tags,
    log::debug,
    post::{tags::TagSet, Post},
    response::{decode_post_list, decode_tag_list, PostList, TagList},
    tag::Tag,
};

use crate::{
    config::{Credentials, ServerConfig, MAX_PAGE_LIMIT},
    error::ClientError,
    transport::{HttpTransport, Transport},
};

/// Page size used when the caller has no preference.
pub const DEFAULT_LIMIT: u16 = 100;

/// Search tag that makes the server shuffle the results.
pub const RANDOM_SORT_TAG: &str = "sort:random";

/// Client holding the credentials and the transport used for every request.
///
/// It has no mutable state: no cursor, no cache. Share it by reference between tasks; every
/// call is one independent request.
#[derive(Debug, Clone)]
pub struct GelbooruClient<T = HttpTransport> {
    credentials: Credentials,
    config: ServerConfig,
    transport: T,
}

impl GelbooruClient<HttpTransport> {
    /// Client for the default Gelbooru server.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_config(credentials, ServerConfig::default())
    }

    pub fn with_config(
        credentials: Credentials,
        config: ServerConfig,
    ) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config, transport))
    }
}

impl<T: Transport> GelbooruClient<T> {
    pub fn with_transport(credentials: Credentials, config: ServerConfig, transport: T) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    #[inline]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[inline]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Base URL of the post listing, credentials included.
    pub fn post_request_url(&self) -> String {
        self.request_url("post")
    }

    /// Base URL of the tag listing, credentials included.
    pub fn tag_request_url(&self) -> String {
        self.request_url("tag")
    }

    fn request_url(&self, endpoint: &str) -> String {
        format!(
            "{}?page=dapi&s={endpoint}&q=index&json=1&api_key={}&user_id={}",
            self.config.api_url, self.credentials.api_key, self.credentials.user_id
        )
    }

    /// Full URL for one page of posts matching `tags`.
    pub fn posts_url(&self, tags: &TagSet, limit: u16, page: u32) -> String {
        let tag_string = join_tags!(tags);
        debug!("Tag List: {tag_string}");

        format!(
            "{}&limit={limit}&pid={page}&tags={tag_string}",
            self.post_request_url()
        )
    }

    /// Full URL for one page of the tag catalog.
    pub fn tags_url(&self, limit: u16, page_index: u32) -> String {
        format!("{}&limit={limit}&pid={page_index}", self.tag_request_url())
    }

    /// The server config may lower the page size cap, never raise it above the API's.
    fn check_limit(&self, limit: u16) -> Result<(), ClientError> {
        let max = MAX_PAGE_LIMIT.min(self.config.max_post_limit);
        if limit > max {
            return Err(ClientError::InvalidLimit { limit, max });
        }
        Ok(())
    }

    /// Sends the GET and returns the body of a successful response.
    async fn fetch(&self, url: &str) -> Result<String, ClientError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            debug!("Server answered with status {}", response.status);
            return Err(ClientError::RequestError {
                status: response.status,
            });
        }

        Ok(response.body)
    }

    /// Fetches one page of posts together with its pagination data.
    pub async fn post_page(
        &self,
        tags: &TagSet,
        limit: u16,
        page: u32,
    ) -> Result<PostList, ClientError> {
        self.check_limit(limit)?;

        debug!("Fetching post page {page} (limit {limit})");
        let body = self.fetch(&self.posts_url(tags, limit, page)).await?;

        Ok(decode_post_list(&body)?)
    }

    /// Fetches one page of the tag catalog together with its pagination data.
    pub async fn tag_page(&self, limit: u16, page_index: u32) -> Result<TagList, ClientError> {
        self.check_limit(limit)?;

        debug!("Fetching tag page {page_index} (limit {limit})");
        let body = self.fetch(&self.tags_url(limit, page_index)).await?;

        Ok(decode_tag_list(&body)?)
    }

    /// Lists posts matching `tags`, in the order the server returns them.
    ///
    /// `page` is zero-based, in units of `limit`. Fails with [`ClientError::InvalidLimit`]
    /// without sending anything when `limit` is above 100.
    pub async fn list_posts(
        &self,
        tags: &TagSet,
        limit: u16,
        page: u32,
    ) -> Result<Vec<Post>, ClientError> {
        Ok(self.post_page(tags, limit, page).await?.posts)
    }

    /// First page of posts matching `tags` at the default page size.
    pub async fn list_posts_default(&self, tags: &TagSet) -> Result<Vec<Post>, ClientError> {
        self.list_posts(tags, DEFAULT_LIMIT, 0).await
    }

    /// Lists one page of the tag catalog.
    ///
    /// `None` means the server sent no tag array, which happens past the last page.
    pub async fn list_tags(
        &self,
        limit: u16,
        page_index: u32,
    ) -> Result<Option<Vec<Tag>>, ClientError> {
        Ok(self.tag_page(limit, page_index).await?.tags)
    }

    /// Picks one random post matching `tags`, or `None` if nothing matches.
    pub async fn random_post(&self, tags: &TagSet) -> Result<Option<Post>, ClientError> {
        let mut tags = tags.clone();
        tags.insert(RANDOM_SORT_TAG.to_string());

        let posts = self.list_posts(&tags, 1, 0).await?;
        Ok(posts.into_iter().next())
    }
}

#[cfg(test)]
mod test {
    use gelbooru_common::{
        error::DecodeErrorKind,
        post::rating::Rating,
        serde_json::{json, Value},
    };
    use std::{
        io,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    use super::*;
    use crate::transport::HttpResponse;

    /// Answers every request with the same canned response and records the URLs.
    struct MockTransport {
        response: HttpResponse,
        urls: Mutex<Vec<String>>,
    }

    impl MockTransport {
        fn new(status: u16, body: impl Into<String>) -> Self {
            Self {
                response: HttpResponse {
                    status,
                    body: body.into(),
                },
                urls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.urls.lock().unwrap().len()
        }

        fn last_url(&self) -> String {
            self.urls.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for MockTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.response.clone())
        }
    }

    /// Fails every request as if the connection timed out.
    #[derive(Default)]
    struct TimeoutTransport {
        calls: AtomicUsize,
    }

    impl Transport for TimeoutTransport {
        async fn get(&self, _url: &str) -> Result<HttpResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ClientError::Transport(Box::new(io::Error::new(
                io::ErrorKind::TimedOut,
                "operation timed out",
            ))))
        }
    }

    fn client<T: Transport>(transport: T) -> GelbooruClient<T> {
        GelbooruClient::with_transport(
            Credentials::new("KEY", "1234"),
            ServerConfig::default(),
            transport,
        )
    }

    fn tag_set(tags: &[&str]) -> TagSet {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn post_json(id: u64, rating: &str) -> Value {
        json!({
            "id": id,
            "created_at": "Sat May 25 18:04:51 -0500 2024",
            "score": 1,
            "width": 100,
            "height": 100,
            "md5": "d41d8cd98f00b204e9800998ecf8427e",
            "directory": "d4/1d",
            "image": "d41d8cd98f00b204e9800998ecf8427e.jpg",
            "rating": rating,
            "source": "",
            "change": 0,
            "owner": "someone",
            "creator_id": 1,
            "parent_id": 0,
            "sample": 0,
            "preview_height": 100,
            "preview_width": 100,
            "tags": "1girl solo",
            "title": "",
            "has_notes": "false",
            "has_comments": "false",
            "file_url": "https://img3.gelbooru.com/images/d4/1d/d41d8cd98f00b204e9800998ecf8427e.jpg",
            "preview_url": "https://img3.gelbooru.com/thumbnails/d4/1d/thumbnail_d41d8cd98f00b204e9800998ecf8427e.jpg",
            "sample_url": "",
            "sample_height": 0,
            "sample_width": 0,
            "status": "active",
            "post_locked": 0,
            "has_children": "false"
        })
    }

    fn post_body(posts: Vec<Value>) -> String {
        json!({
            "@attributes": { "limit": 100, "offset": 0, "count": posts.len() },
            "post": posts,
        })
        .to_string()
    }

    const TAG_BODY: &str = r#"{"@attributes":{"limit":100,"offset":0,"count":2},"tag":[
        {"id":152532,"name":"1girl","count":6177845,"type":0,"ambiguous":0},
        {"id":380,"name":"kagamine_rin","count":49870,"type":4,"ambiguous":0}
    ]}"#;

    #[test]
    fn request_urls() {
        let client = client(MockTransport::new(200, ""));

        assert_eq!(
            client.post_request_url(),
            "https://gelbooru.com/index.php?page=dapi&s=post&q=index&json=1&api_key=KEY&user_id=1234"
        );
        assert_eq!(
            client.tag_request_url(),
            "https://gelbooru.com/index.php?page=dapi&s=tag&q=index&json=1&api_key=KEY&user_id=1234"
        );
        assert_eq!(
            client.tags_url(100, 7),
            "https://gelbooru.com/index.php?page=dapi&s=tag&q=index&json=1&api_key=KEY&user_id=1234&limit=100&pid=7"
        );
    }

    #[test]
    fn posts_url_joins_tags() {
        let client = client(MockTransport::new(200, ""));
        let url = client.posts_url(&tag_set(&["solo", "1girl"]), 10, 3);

        assert!(url.starts_with(&client.post_request_url()));
        assert!(url.ends_with("&limit=10&pid=3&tags=1girl+solo"));

        let url = client.posts_url(&TagSet::default(), 100, 0);
        assert!(url.ends_with("&limit=100&pid=0&tags="));
    }

    #[tokio::test]
    async fn list_posts_keeps_server_order() {
        let body = post_body(vec![
            post_json(30, "general"),
            post_json(10, "explicit"),
            post_json(20, "sensitive"),
        ]);
        let client = client(MockTransport::new(200, body));

        let posts = client
            .list_posts(&tag_set(&["1girl"]), DEFAULT_LIMIT, 2)
            .await
            .unwrap();

        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, [30, 10, 20]);
        assert_eq!(posts[1].rating, Rating::Explicit);

        assert_eq!(client.transport.calls(), 1);
        assert!(client
            .transport
            .last_url()
            .ends_with("&limit=100&pid=2&tags=1girl"));
    }

    #[tokio::test]
    async fn default_query_is_first_full_page() {
        let client = client(MockTransport::new(200, post_body(vec![post_json(1, "general")])));

        let posts = client.list_posts_default(&tag_set(&["solo"])).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert!(client
            .transport
            .last_url()
            .ends_with("&limit=100&pid=0&tags=solo"));
    }

    #[tokio::test]
    async fn invalid_limit_sends_nothing() {
        let client = client(MockTransport::new(200, post_body(vec![])));

        let err = client
            .list_posts(&tag_set(&["1girl"]), 101, 0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidLimit {
                limit: 101,
                max: 100
            }
        ));

        let err = client.list_tags(101, 0).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidLimit { limit: 101, .. }));

        assert_eq!(client.transport.calls(), 0);
    }

    #[tokio::test]
    async fn raised_server_limit_is_capped() {
        let config = ServerConfig {
            max_post_limit: 500,
            ..ServerConfig::default()
        };
        let client = GelbooruClient::with_transport(
            Credentials::new("KEY", "1234"),
            config,
            MockTransport::new(200, post_body(vec![])),
        );

        let err = client.list_tags(101, 0).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidLimit {
                limit: 101,
                max: 100
            }
        ));

        let err = client
            .list_posts(&TagSet::default(), 101, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidLimit { limit: 101, .. }));

        assert_eq!(client.transport.calls(), 0);
    }

    #[tokio::test]
    async fn lowered_server_limit_applies() {
        let config = ServerConfig {
            max_post_limit: 20,
            ..ServerConfig::default()
        };
        let client = GelbooruClient::with_transport(
            Credentials::new("KEY", "1234"),
            config,
            MockTransport::new(200, post_body(vec![])),
        );

        let err = client.list_tags(21, 0).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidLimit { limit: 21, max: 20 }));
        assert!(client.list_tags(20, 0).await.is_ok());
        assert_eq!(client.transport.calls(), 1);
    }

    #[tokio::test]
    async fn limit_boundaries_are_accepted() {
        let client = client(MockTransport::new(200, post_body(vec![])));

        assert!(client.list_posts(&TagSet::default(), 100, 0).await.is_ok());
        assert!(client.list_posts(&TagSet::default(), 0, 0).await.is_ok());
        assert_eq!(client.transport.calls(), 2);
    }

    #[tokio::test]
    async fn list_tags() {
        let client = client(MockTransport::new(200, TAG_BODY));

        let tags = client.list_tags(100, 4).await.unwrap().unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "kagamine_rin");
        assert!(client.transport.last_url().ends_with("&limit=100&pid=4"));
    }

    #[tokio::test]
    async fn list_tags_past_the_end() {
        let client = client(MockTransport::new(
            200,
            r#"{"@attributes":{"count":0,"limit":100}}"#,
        ));

        assert!(client.list_tags(100, 10_098).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn status_is_checked_before_decoding() {
        let client = client(MockTransport::new(404, "<html>Not Found</html>"));

        let err = client.list_tags(100, 0).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestError { status: 404 }));

        let err = client
            .list_posts(&TagSet::default(), 100, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::RequestError { status: 404 }));
    }

    #[tokio::test]
    async fn server_errors_are_request_errors() {
        let body = post_body(vec![post_json(1, "general")]);
        let client = client(MockTransport::new(503, body));

        let err = client
            .list_posts(&TagSet::default(), 100, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::RequestError { status: 503 }));
    }

    #[tokio::test]
    async fn bad_element_fails_the_whole_page() {
        let body = post_body(vec![post_json(1, "general"), post_json(2, "safe")]);
        let client = client(MockTransport::new(200, body));

        let err = client
            .list_posts(&TagSet::default(), 100, 0)
            .await
            .unwrap_err();

        match err {
            ClientError::Decode(e) => {
                assert_eq!(e.kind(), DecodeErrorKind::InvalidEnumValue);
                assert_eq!(e.field(), Some("post[1].rating"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let client = client(TimeoutTransport::default());

        let err = client.list_tags(100, 0).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.to_string().contains("timed out"));

        let err = client
            .list_posts(&TagSet::default(), 100, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));

        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn same_query_same_request() {
        let client = client(MockTransport::new(200, post_body(vec![])));
        let tags = tag_set(&["a", "b", "c"]);

        client.list_posts(&tags, 50, 1).await.unwrap();
        let first = client.transport.last_url();
        client.list_posts(&tags, 50, 1).await.unwrap();

        assert_eq!(first, client.transport.last_url());
    }

    #[tokio::test]
    async fn random_post() {
        let body = post_body(vec![post_json(77, "general")]);
        let client = client(MockTransport::new(200, body));

        let post = client
            .random_post(&tag_set(&["kagamine_rin"]))
            .await
            .unwrap();

        assert_eq!(post.map(|p| p.id), Some(77));
        let url = client.transport.last_url();
        assert!(url.contains("&limit=1&pid=0&"));
        assert!(url.ends_with("tags=kagamine_rin+sort:random"));
    }

    #[tokio::test]
    async fn random_post_without_matches() {
        let client = client(MockTransport::new(
            200,
            r#"{"@attributes":{"limit":1,"offset":0,"count":0}}"#,
        ));

        assert!(client.random_post(&TagSet::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn post_page_exposes_attributes() {
        let body = post_body(vec![post_json(1, "general")]);
        let client = client(MockTransport::new(200, body));

        let page = client.post_page(&TagSet::default(), 100, 0).await.unwrap();

        assert_eq!(page.attributes.count, 1);
        assert_eq!(page.attributes.limit, 100);
        assert_eq!(page.posts.len(), 1);
    }
}
