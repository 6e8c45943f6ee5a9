use crate::case::normalize_upper;
use crate::constants::method;
use indexmap::IndexSet;

/// Ordered set of methods a request may be overridden to.
///
/// Entries are trimmed and upper-cased on construction; later duplicates are dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(IndexSet<String>);

impl AllowedMethods {
    /// Construct an explicit list of override targets.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            values
                .into_iter()
                .map(|value| normalize_upper(value.into().trim()))
                .collect(),
        )
    }

    /// Whether `candidate` (already upper-cased) is an allowed override target.
    ///
    /// Matching is exact; surrounding whitespace is not stripped.
    pub fn allows_method(&self, candidate: &str) -> bool {
        !candidate.is_empty() && self.0.contains(candidate)
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
            method::PATCH,
        ])
    }
}

impl<'a> IntoIterator for &'a AllowedMethods {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AllowedMethods {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<String>> for AllowedMethods {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

impl From<AllowedMethods> for Vec<String> {
    fn from(methods: AllowedMethods) -> Self {
        methods.into_inner()
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
