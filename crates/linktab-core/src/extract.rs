//! Extract the link set from a parsed document.
//!
//! Records that do not carry a usable web URL are skipped without error:
//! extraction is best-effort, only the document shape itself is validated.

use serde_json::Value;

use crate::error::LinkError;

/// Default top-level key holding the list of records.
pub const DEFAULT_PRIMARY_LIST_KEY: &str = "Saved Media";
/// Default per-record key holding the candidate URL.
pub const DEFAULT_URL_KEY_IN_ITEM: &str = "Media Download Url";

const ACCEPTED_SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Where to find the links inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub primary_list_key: String,
    pub url_key_in_item: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            primary_list_key: DEFAULT_PRIMARY_LIST_KEY.to_string(),
            url_key_in_item: DEFAULT_URL_KEY_IN_ITEM.to_string(),
        }
    }
}

/// Validated URLs in document order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet(Vec<String>);

impl LinkSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for LinkSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// True if `s` starts with `http://` or `https://` (case-sensitive).
pub fn is_web_url(s: &str) -> bool {
    ACCEPTED_SCHEME_PREFIXES
        .iter()
        .any(|prefix| s.starts_with(prefix))
}

/// The URL carried by one record, if it has one worth opening.
///
/// Returns `None` when the record is not an object, lacks `url_key`, holds a
/// non-string under it, or the string is not an http(s) URL.
pub fn link_from_record<'a>(record: &'a Value, url_key: &str) -> Option<&'a str> {
    record
        .as_object()?
        .get(url_key)?
        .as_str()
        .filter(|url| is_web_url(url))
}

/// Collect the link set from `doc`.
///
/// Fails with [`LinkError::Structure`] when `doc` has no array under
/// `cfg.primary_list_key`. An empty result is returned as an empty set.
pub fn extract_links(doc: &Value, cfg: &ExtractConfig) -> Result<LinkSet, LinkError> {
    let records = doc
        .get(cfg.primary_list_key.as_str())
        .and_then(Value::as_array)
        .ok_or_else(|| LinkError::Structure {
            key: cfg.primary_list_key.clone(),
        })?;

    let links: LinkSet = records
        .iter()
        .filter_map(|record| link_from_record(record, &cfg.url_key_in_item))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        records = records.len(),
        links = links.len(),
        key = %cfg.primary_list_key,
        "extracted links"
    );
    Ok(links)
}
