use crate::case::equals_ignore_ascii_case;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to request headers with case-insensitive names.
pub trait HeaderSource {
    /// Returns the first header whose name matches `name`, ignoring ASCII case.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Read access to the fields of a body parsed by the host.
///
/// Only string-valued fields are visible; hosts return `None` for anything else.
pub trait BodySource {
    /// Returns the field stored under exactly `name`.
    fn field(&self, name: &str) -> Option<&str>;
}

pub fn lookup_header_ignore_case<'a, H>(headers: &'a H, name: &str) -> Option<&'a str>
where
    H: HeaderSource + ?Sized,
{
    headers.header(name)
}

pub fn lookup_body_field<'a, B>(body: &'a B, name: &str) -> Option<&'a str>
where
    B: BodySource + ?Sized,
{
    body.field(name)
}

fn find_pair<'a, I>(pairs: I, name: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    pairs
        .into_iter()
        .find(|(key, _)| equals_ignore_ascii_case(key, name))
        .map(|(_, value)| value.as_str())
}

/// Prefers the exact key, then the lowercase key, then the smallest matching key,
/// so differently cased duplicates resolve the same way on every call.
impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| self.get(&name.to_ascii_lowercase()))
            .or_else(|| {
                self.iter()
                    .filter(|(key, _)| equals_ignore_ascii_case(key, name))
                    .min_by(|(a, _), (b, _)| a.cmp(b))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .map(String::as_str)
            .or_else(|| find_pair(self, name))
    }
}

impl<S: BuildHasher> HeaderSource for IndexMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        find_pair(self, name)
    }
}

impl<'h> HeaderSource for [(&'h str, &'h str)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| equals_ignore_ascii_case(key, name))
            .map(|(_, value)| *value)
    }
}

impl HeaderSource for [(String, String)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| equals_ignore_ascii_case(key, name))
            .map(|(_, value)| value.as_str())
    }
}

impl HeaderSource for Vec<(String, String)> {
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}

impl<S: BuildHasher> BodySource for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl BodySource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> BodySource for IndexMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
