//! Query-string parsing for the CGI endpoint.
//!
//! # Responsibilities
//! - Decode `application/x-www-form-urlencoded` pairs
//! - Group values by key, keeping first-appearance order of keys
//! - Drop pairs whose value is empty
//!
//! # Design Decisions
//! - Keys are matched as written by the client; camera firmware clients send
//!   both `MotionDetect[].Enable` and `MotionDetect[0].Enable`

/// Parsed query parameters, ordered by first appearance of each key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match params.entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value.into_owned()),
                None => params
                    .entries
                    .push((key.into_owned(), vec![value.into_owned()])),
            }
        }

        params
    }

    /// First value for an exact key.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// First key (in query order) accepted by `predicate`, with its first value.
    pub fn find_key<F>(&self, mut predicate: F) -> Option<(&str, &str)>
    where
        F: FnMut(&str) -> bool,
    {
        self.entries
            .iter()
            .find(|(k, _)| predicate(k.as_str()))
            .and_then(|(k, values)| values.first().map(|v| (k.as_str(), v.as_str())))
    }
}
