//! Request parameter mapping.
//!
//! Method-level parameters are written in snake_case; the WebUI wire format
//! expects camelCase. [`Params`] applies the [`to_camel`] transform to every
//! key it is given, serializes values to the exact tokens the server expects
//! (lowercase boolean literals, joined lists, POSIX paths), and keeps
//! insertion order. The handful of endpoints whose wire names defy the
//! convention (`last_known_id`, the add-form's snake fields) go through
//! [`Params::raw`].

use std::path::Path;
use std::time::Duration;

use crate::hashes::{Hashes, InfoHash};

/// Converts a snake_case parameter name to the wire's camelCase.
///
/// Splits on underscores, keeps the first word unchanged, and capitalizes
/// the first letter of every following word. Names without underscores pass
/// through untouched, which makes the transform idempotent.
///
/// # Example
///
/// ```
/// use qbt_core::params::to_camel;
///
/// assert_eq!(to_camel("save_path"), "savePath");
/// assert_eq!(to_camel("hashes"), "hashes");
/// assert_eq!(to_camel(&to_camel("seeding_time_limit")), "seedingTimeLimit");
/// ```
#[must_use]
pub fn to_camel(name: &str) -> String {
    let mut words = name.split('_').filter(|w| !w.is_empty());

    let mut out = String::with_capacity(name.len());
    if let Some(first) = words.next() {
        out.push_str(first);
    }

    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Ordered key/value pairs for a query string or form body.
///
/// # Example
///
/// ```
/// use qbt_core::Params;
///
/// let mut params = Params::new();
/// params.required_str("category", "tv");
/// params.optional_bool("seq_dl", Some(true));
/// assert_eq!(params.encode(), "category=tv&seqDl=true");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters selecting a single torrent (`hash=<hex>`).
    #[must_use]
    pub fn with_hash(hash: &InfoHash) -> Self {
        let mut params = Self::new();
        params.raw("hash", hash.as_str());
        params
    }

    /// Parameters selecting several torrents (`hashes=<joined>` or `all`).
    #[must_use]
    pub fn with_hashes(hashes: &Hashes) -> Self {
        let mut params = Self::new();
        params.raw("hashes", hashes.to_wire());
        params
    }

    fn insert(&mut self, key: &str, value: String) {
        self.pairs.push((to_camel(key), value));
    }

    /// Adds a pair with a verbatim wire name, bypassing the case transform.
    pub fn raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Adds a string value.
    pub fn required_str(&mut self, key: &str, value: impl Into<String>) {
        self.insert(key, value.into());
    }

    /// Adds a string value when present.
    pub fn optional_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.insert(key, value.to_owned());
        }
    }

    /// Adds an integer value.
    pub fn required_int(&mut self, key: &str, value: i64) {
        self.insert(key, value.to_string());
    }

    /// Adds an integer value when present.
    pub fn optional_int(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.required_int(key, value);
        }
    }

    /// Adds a floating-point value.
    pub fn required_float(&mut self, key: &str, value: f64) {
        self.insert(key, value.to_string());
    }

    /// Adds a boolean as the server's lowercase `true`/`false` literal.
    pub fn required_bool(&mut self, key: &str, value: bool) {
        self.insert(key, bool_token(value).to_owned());
    }

    /// Adds a boolean literal when present.
    pub fn optional_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.required_bool(key, value);
        }
    }

    /// Adds a path as a forward-slash string.
    pub fn required_path(&mut self, key: &str, value: impl AsRef<Path>) {
        let path = value.as_ref().to_string_lossy().replace('\\', "/");
        self.insert(key, path);
    }

    /// Adds a list joined with `sep`, in input order.
    pub fn required_list<I>(&mut self, key: &str, values: I, sep: &str)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let items: Vec<String> = values.into_iter().map(Into::into).collect();
        self.insert(key, items.join(sep));
    }

    /// Adds a joined list when present.
    pub fn optional_list<I>(&mut self, key: &str, values: Option<I>, sep: &str)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if let Some(values) = values {
            self.required_list(key, values, sep);
        }
    }

    /// Adds a duration as whole seconds.
    pub fn required_duration_secs(&mut self, key: &str, value: Duration) {
        self.required_int(key, value.as_secs().try_into().unwrap_or(i64::MAX));
    }

    /// Adds a duration as whole minutes.
    pub fn required_duration_mins(&mut self, key: &str, value: Duration) {
        let mins = value.as_secs() / 60;
        self.required_int(key, mins.try_into().unwrap_or(i64::MAX));
    }

    /// Returns `true` if no pair has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Borrows the accumulated pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Consumes into the accumulated pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Encodes the pairs as an `application/x-www-form-urlencoded` string.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

const fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn camel_transform() {
        assert_eq!(to_camel("save_path"), "savePath");
        assert_eq!(to_camel("delete_files"), "deleteFiles");
        assert_eq!(to_camel("seeding_time_limit"), "seedingTimeLimit");
        assert_eq!(to_camel("first_last_piece_prio"), "firstLastPiecePrio");
    }

    #[test]
    fn camel_passes_single_words_through() {
        assert_eq!(to_camel("hashes"), "hashes");
        assert_eq!(to_camel("category"), "category");
        assert_eq!(to_camel("limit"), "limit");
    }

    #[test]
    fn camel_is_idempotent() {
        for name in ["save_path", "hashes", "seeding_time_limit", "seq_dl"] {
            let once = to_camel(name);
            check!(to_camel(&once) == once, "{name:?}");
        }
    }

    #[test]
    fn bool_tokens_are_lowercase_literals() {
        let mut params = Params::new();
        params.required_bool("reverse", true);
        params.optional_bool("seq_dl", Some(false));
        params.optional_bool("skipped", None);

        assert_eq!(
            params.pairs(),
            [
                ("reverse".to_owned(), "true".to_owned()),
                ("seqDl".to_owned(), "false".to_owned()),
            ]
        );
    }

    #[test]
    fn optional_values_are_dropped_when_absent() {
        let mut params = Params::new();
        params.optional_str("filter", None);
        params.optional_int("limit", None);
        check!(params.is_empty());
    }

    #[test]
    fn raw_bypasses_the_transform() {
        let mut params = Params::new();
        params.raw("last_known_id", "12");
        assert_eq!(params.encode(), "last_known_id=12");
    }

    #[test]
    fn lists_join_in_input_order() {
        let mut params = Params::new();
        params.required_list("tags", ["linux", "iso"], ",");
        assert_eq!(params.pairs(), [("tags".to_owned(), "linux,iso".to_owned())]);
    }

    #[test]
    fn paths_use_forward_slashes() {
        let mut params = Params::new();
        params.required_path("save_path", r"d:\downloads\linux");
        assert_eq!(
            params.pairs(),
            [("savePath".to_owned(), "d:/downloads/linux".to_owned())]
        );
    }

    #[test]
    fn durations_round_to_whole_units() {
        let mut params = Params::new();
        params.required_duration_secs("eta", Duration::from_secs(90));
        params.required_duration_mins("seeding_time_limit", Duration::from_secs(30 * 60));

        assert_eq!(
            params.pairs(),
            [
                ("eta".to_owned(), "90".to_owned()),
                ("seedingTimeLimit".to_owned(), "30".to_owned()),
            ]
        );
    }

    #[test]
    fn hash_selections() {
        let hash: InfoHash = "8c212779b4abde7c6bc608063a0d008b7e40ce32"
            .parse()
            .expect("hash");

        let params = Params::with_hash(&hash);
        assert_eq!(
            params.encode(),
            "hash=8c212779b4abde7c6bc608063a0d008b7e40ce32"
        );

        let params = Params::with_hashes(&Hashes::All);
        assert_eq!(params.encode(), "hashes=all");
    }

    #[test]
    fn encode_is_form_urlencoded() {
        let mut params = Params::new();
        params.required_str("category", "tv shows");
        params.required_bool("reverse", true);

        insta::assert_snapshot!(params.encode(), @"category=tv+shows&reverse=true");
    }
}
