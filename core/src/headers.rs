//! Default headers stored on a client.
//!
//! Names compare ASCII-case-insensitively and keep the spelling of their
//! first insertion. Values are kept in insertion order. Nothing is
//! validated here; malformed names or values are rejected when a request
//! is built.

/// Mapping from header name to an ordered list of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `key` with `value`.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(idx) => self.entries[idx].1 = vec![value.to_string()],
            None => self.entries.push((key.to_string(), vec![value.to_string()])),
        }
    }

    /// Append `value` after any existing values of `key`.
    pub fn add(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(idx) => self.entries[idx].1.push(value.to_string()),
            None => self.entries.push((key.to_string(), vec![value.to_string()])),
        }
    }

    /// Drop `key` and all of its values.
    pub fn remove(&mut self, key: &str) {
        if let Some(idx) = self.position(key) {
            self.entries.remove(idx);
        }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// All values of `key`, empty when absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.position(key)
            .map(|idx| self.entries[idx].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(key))
    }
}
