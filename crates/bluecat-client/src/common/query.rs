//! Query utilities for BlueCat API
//!
//! Provides the ordered query-string builder used by every operation and the
//! `Options` list the server uses for its pipe-delimited option and property
//! parameters.

use std::fmt;

/// Ordered query parameters of one API call
///
/// Parameters keep insertion order on the wire. Names and values are
/// URL-encoded when the query string is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(&'static str, String)>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Append the `count`/`start` pagination pair
    #[must_use]
    pub fn page(self, count: i32, start: i32) -> Self {
        self.param("count", count).param("start", start)
    }

    /// Raw value of the first parameter with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All parameters, in wire order
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Build the URL-encoded query string (without the leading `?`)
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Pipe-delimited `name=value` option list
///
/// Serialises as `hint=^abc|retrieveFields=false`. The option names and their
/// meaning are defined by the server; they are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, String)>,
}

impl Options {
    /// Create an empty option list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing an earlier value with the same name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an option in place, replacing an earlier value with the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of an option
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}
