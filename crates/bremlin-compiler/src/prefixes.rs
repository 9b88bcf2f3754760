//! Namespace IRI → short alias substitutions.
//!
//! Commands are usually authored with full IRIs (`<https://.../Company>`),
//! while the symbol store keys identifiers by qname (`bsm:Company`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const BUILTIN: [(&str, &str); 6] = [
    ("bsm", "https://bsm.bloomberg.com/ontology/"),
    ("bsi", "https://bsm.bloomberg.com/instance/"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("ex", "http://example.org/"),
];

/// Ordered `alias → namespace` table, in the shape of a JSON-LD `@context`.
///
/// `Default` carries the built-in aliases; use [`PrefixTable::empty`] to
/// start from nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixTable {
    prefixes: IndexMap<String, String>,
}

impl Default for PrefixTable {
    fn default() -> Self {
        BUILTIN.into_iter().collect()
    }
}

impl PrefixTable {
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Load a table from a JSON object such as `{"ex": "http://example.org/"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::PrefixTable)
    }

    /// Add or replace an alias. Returns the namespace it previously mapped to.
    pub fn insert(
        &mut self,
        alias: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Option<String> {
        self.prefixes.insert(alias.into(), namespace.into())
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.prefixes.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(alias, ns)| (alias.as_str(), ns.as_str()))
    }

    /// Strips `<`/`>` and rewrites every known namespace to `alias:`.
    ///
    /// Longest namespace first, so `http://example.org/geo/x` picks a
    /// `geo` alias over `ex` when both are registered.
    pub fn shorten(&self, text: &str) -> String {
        let mut out: String = text.chars().filter(|c| !matches!(c, '<' | '>')).collect();

        let mut by_length: Vec<_> = self.iter().filter(|(_, ns)| !ns.is_empty()).collect();
        by_length.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        for (alias, namespace) in by_length {
            if out.contains(namespace) {
                out = out.replace(namespace, &format!("{alias}:"));
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PrefixTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            prefixes: iter
                .into_iter()
                .map(|(alias, ns)| (alias.into(), ns.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for PrefixTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (alias, ns) in iter {
            self.insert(alias, ns);
        }
    }
}
