//! Query-string codec for the shareable location.
//!
//! A `Location` is an ordered list of `key=value` pairs with repeated keys
//! allowed, the same model as a browser's `URLSearchParams`. Unknown keys are
//! carried through untouched.

use std::fmt;

use crate::util::{percent_decode, percent_encode};

/// Ordered, multi-valued query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Decoded `(key, value)` pairs in document order.
    params: Vec<(String, String)>,
}

impl Location {
    /// What: Parse a location from user input.
    ///
    /// Inputs:
    /// - `input`: `?a=b&c=d`, `a=b`, or a full URL such as `https://host/?a=b#frag`
    ///
    /// Output:
    /// - Parsed location; never fails.
    ///
    /// Details:
    /// - Everything up to the first `?` is ignored when one is present.
    /// - A `#fragment` is dropped.
    /// - Empty segments (`&&`) are skipped; `key` without `=` has an empty value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let without_fragment = trimmed.split_once('#').map_or(trimmed, |(head, _)| head);
        let query = match without_fragment.split_once('?') {
            Some((_, q)) => q,
            None if without_fragment.contains('=') => without_fragment,
            None => "",
        };
        let params = query
            .split('&')
            .filter(|seg| !seg.is_empty())
            .map(|seg| {
                let (k, v) = seg.split_once('=').unwrap_or((seg, ""));
                (percent_decode(k), percent_decode(v))
            })
            .collect();
        Self { params }
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// `true` when at least one entry uses `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// What: Set `key` to a single value.
    ///
    /// Inputs:
    /// - `key`, `value`: Parameter to write
    ///
    /// Output:
    /// - Updates `self` in place.
    ///
    /// Details:
    /// - The first existing entry is overwritten in place and later duplicates are removed;
    ///   a missing key is appended at the end.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.params[first].1 = value;
                let mut idx = 0;
                self.params.retain(|(k, _)| {
                    let keep = idx <= first || k != key;
                    idx += 1;
                    keep
                });
            }
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Append another value for `key` at the end.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.params.push((key.to_string(), value.into()));
    }

    /// Remove every entry for `key`.
    pub fn delete(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// What: Remove the entries for `key` whose value satisfies `pred`.
    ///
    /// Inputs:
    /// - `key`: Parameter name
    /// - `pred`: Predicate on the decoded value
    ///
    /// Output:
    /// - Updates `self` in place; other entries keep their order.
    pub fn delete_where(&mut self, key: &str, mut pred: impl FnMut(&str) -> bool) {
        self.params.retain(|(k, v)| k != key || !pred(v));
    }

    /// `true` when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serialized form without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Location {
    /// Formats as `?key=value&...`, or `?` alone when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.query_string())
    }
}
