/// Joins a collection of tags into the `+`-separated form used by the `tags` query parameter.
///
/// Tags are sorted first so the same set always produces the same query string.
#[macro_export]
macro_rules! join_tags {
    ($x:expr) => {{
        let set = &$x;
        let mut tl: Vec<&str> = set.iter().map(|t| t.as_str()).collect();
        tl.sort_unstable();
        tl.join("+")
    }};
}
