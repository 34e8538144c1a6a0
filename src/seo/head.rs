//! Head-state reconciliation
//!
//! The document head is modelled as a keyed map: one value per tag key,
//! so "upsert" is structural and re-applying the same metadata can never
//! duplicate a tag. Reconciliation is a pure diff from the current state
//! to the desired metadata; applying the resulting mutations is delegated
//! to a [`HeadSink`] adapter so the logic stays testable without a real
//! document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::metadata::ResolvedSeo;

/// Identity of a managed head tag
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadKey {
    /// The document `<title>`
    Title,
    /// A `<meta name="...">` tag, keyed by its `name` attribute
    MetaName(String),
    /// A `<meta property="...">` tag, keyed by its `property` attribute
    MetaProperty(String),
    /// The single `<link rel="canonical">` tag
    Canonical,
}

impl HeadKey {
    pub fn meta_name(name: impl Into<String>) -> Self {
        HeadKey::MetaName(name.into())
    }

    pub fn meta_property(property: impl Into<String>) -> Self {
        HeadKey::MetaProperty(property.into())
    }
}

impl fmt::Display for HeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadKey::Title => write!(f, "title"),
            HeadKey::MetaName(name) => write!(f, "meta[name={}]", name),
            HeadKey::MetaProperty(property) => write!(f, "meta[property={}]", property),
            HeadKey::Canonical => write!(f, "link[rel=canonical]"),
        }
    }
}

/// Snapshot of the managed head tags
///
/// Holding at most one value per key is what makes re-application
/// idempotent: there is nowhere for a duplicate tag to accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadState {
    entries: BTreeMap<HeadKey, String>,
}

impl HeadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a key, if set
    pub fn get(&self, key: &HeadKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value, replacing any existing one
    pub fn set(&mut self, key: HeadKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    /// Number of managed tags present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in deterministic key order
    pub fn iter(&self) -> impl Iterator<Item = (&HeadKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

/// A single upsert against the head
///
/// There is deliberately no removal: the managed key set is fixed, and
/// tags outside it (viewport, charset, icons) are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMutation {
    pub key: HeadKey,
    pub value: String,
}

impl fmt::Display for HeadMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set {} = {:?}", self.key, self.value)
    }
}

impl ResolvedSeo {
    /// The desired head entries for this metadata, in application order
    pub fn head_entries(&self) -> Vec<(HeadKey, String)> {
        vec![
            (HeadKey::Title, self.title.clone()),
            (HeadKey::meta_name("description"), self.description.clone()),
            (HeadKey::meta_name("keywords"), self.keywords.clone()),
            (HeadKey::meta_name("robots"), self.robots.clone()),
            (HeadKey::meta_property("og:title"), self.og_title.clone()),
            (
                HeadKey::meta_property("og:description"),
                self.og_description.clone(),
            ),
            (HeadKey::meta_property("og:image"), self.og_image.clone()),
            (HeadKey::meta_property("og:url"), self.og_url.clone()),
            (HeadKey::meta_property("og:type"), self.og_type.clone()),
            (HeadKey::meta_name("twitter:card"), self.twitter_card.clone()),
            (
                HeadKey::meta_name("twitter:title"),
                self.twitter_title.clone(),
            ),
            (
                HeadKey::meta_name("twitter:description"),
                self.twitter_description.clone(),
            ),
            (
                HeadKey::meta_name("twitter:image"),
                self.twitter_image.clone(),
            ),
            (HeadKey::Canonical, self.canonical.clone()),
        ]
    }
}

/// Diff the current head state against the desired metadata
///
/// Returns only the mutations needed to converge; a head that already
/// matches produces an empty list.
pub fn reconcile(current: &HeadState, desired: &ResolvedSeo) -> Vec<HeadMutation> {
    desired
        .head_entries()
        .into_iter()
        .filter(|(key, value)| current.get(key) != Some(value.as_str()))
        .map(|(key, value)| HeadMutation { key, value })
        .collect()
}

/// Adapter over the actual head tag store
///
/// The synchronizer only ever reads the current state and applies
/// upserts; a real document adapter maps these onto tag lookups and
/// attribute writes.
pub trait HeadSink {
    /// Snapshot of the managed tags as currently rendered
    fn current(&self) -> HeadState;

    /// Apply one upsert
    fn apply(&mut self, mutation: &HeadMutation);
}

/// In-memory head used by tests and the CLI
#[derive(Debug, Clone, Default)]
pub struct MemoryHead {
    state: HeadState,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct access to the underlying state
    pub fn state(&self) -> &HeadState {
        &self.state
    }
}

impl HeadSink for MemoryHead {
    fn current(&self) -> HeadState {
        self.state.clone()
    }

    fn apply(&mut self, mutation: &HeadMutation) {
        self.state.set(mutation.key.clone(), mutation.value.clone());
    }
}
