use std::fmt;

use convert_case::{Case, Casing};

use crate::error::{Error, Result};

/// A node name used in dumps and log output: lowercase ASCII alphanumerics
/// and underscores, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName(String);

impl NodeName {
    /// Accept a name only if it is already in canonical form.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() || !name.chars().all(is_name_char) {
            return Err(Error::Invalid(format!("node name {name:?}")));
        }
        Ok(Self(name.to_string()))
    }

    /// Munge an arbitrary string into a node name: snake-case it, then drop
    /// anything outside the allowed alphabet. Falls back to `node`.
    pub fn convert(name: &str) -> Self {
        let munged: String = name
            .to_case(Case::Snake)
            .chars()
            .filter(|c| is_name_char(*c))
            .collect();
        if munged.is_empty() {
            Self("node".into())
        } else {
            Self(munged)
        }
    }

    /// Derive a name from a Rust type path, keeping only the last segment and
    /// stripping generic parameters.
    pub fn of_type(type_name: &str) -> Self {
        let base = type_name.split('<').next().unwrap_or(type_name);
        Self::convert(base.rsplit("::").next().unwrap_or(base))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Characters permitted in a node name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
