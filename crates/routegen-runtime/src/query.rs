//! Query string serialization.

use crate::Params;

/// Serializes `query` as `key=value` pairs joined by `&`, keys in order
///
/// Keys and values are percent-encoded; a space becomes `%20`.
///
/// # Examples
///
/// ```
/// use routegen_runtime::{encode_query, Params};
///
/// let mut query = Params::new();
/// query.insert("q".into(), "rust & web".into());
/// query.insert("page".into(), "2".into());
/// assert_eq!(encode_query(&query), "page=2&q=rust%20%26%20web");
/// ```
pub fn encode_query(query: &Params) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a dynamic bag into the named path parameters and everything else
pub fn split_params(bag: Params, path_names: &[&str]) -> (Params, Params) {
    bag.into_iter()
        .partition(|(key, _)| path_names.contains(&key.as_str()))
}
