//! Enumerated-key lookup tables with a required default entry.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::TableError;

/// A finite, enumerated key with a stable string token.
pub trait VariantKey: Copy + Ord + fmt::Debug + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Stable token for the key.
    fn token(self) -> &'static str;

    /// Parses a token produced by [`VariantKey::token`]. Unknown tokens yield `None`.
    fn from_token(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.token() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Key to token-bundle mapping whose declared default is always reachable.
///
/// Lookups for keys missing from the table, or for raw tokens that do not parse, return the
/// default bundle. A table whose default has no entry cannot be built.
pub struct VariantTable<K, B> {
    entries: BTreeMap<K, B>,
    default_key: K,
    default_bundle: B,
}

impl<K: VariantKey, B> VariantTable<K, B> {
    /// Builds a table from `entries`, failing when `default_key` has no entry or a key repeats.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateKey`] for repeated keys, [`TableError::EmptyTable`] when no
    /// entries were given, and [`TableError::MissingDefault`] when `default_key` is undefined.
    pub fn new(
        entries: impl IntoIterator<Item = (K, B)>,
        default_key: K,
    ) -> Result<Self, TableError> {
        let mut map = BTreeMap::new();
        for (key, bundle) in entries {
            if map.insert(key, bundle).is_some() {
                return Err(TableError::DuplicateKey {
                    key: key.token().to_string(),
                });
            }
        }
        if map.is_empty() {
            return Err(TableError::EmptyTable);
        }
        let default_bundle = map.remove(&default_key).ok_or_else(|| TableError::MissingDefault {
            key: default_key.token().to_string(),
        })?;
        Ok(Self {
            entries: map,
            default_key,
            default_bundle,
        })
    }

    /// Builds a table whose default entry is supplied explicitly. Later entries for the same key
    /// replace earlier ones; an entry for `default_key` is ignored.
    pub fn with_default(
        default_key: K,
        default_bundle: B,
        entries: impl IntoIterator<Item = (K, B)>,
    ) -> Self {
        let mut map: BTreeMap<K, B> = entries.into_iter().collect();
        map.remove(&default_key);
        Self {
            entries: map,
            default_key,
            default_bundle,
        }
    }

    /// Returns the bundle for `key`, or the default bundle when `key` is `None` or undefined.
    pub fn resolve(&self, key: Option<K>) -> &B {
        match key {
            Some(key) if key != self.default_key => {
                self.entries.get(&key).unwrap_or(&self.default_bundle)
            }
            _ => &self.default_bundle,
        }
    }

    /// Resolves a raw string key; unknown tokens fall back to the default bundle.
    pub fn resolve_raw(&self, raw: Option<&str>) -> &B {
        self.resolve(raw.and_then(K::from_token))
    }

    /// Returns the bundle explicitly defined for `key`, without falling back.
    pub fn get(&self, key: K) -> Option<&B> {
        if key == self.default_key {
            Some(&self.default_bundle)
        } else {
            self.entries.get(&key)
        }
    }

    /// Declared default key.
    pub fn default_key(&self) -> K {
        self.default_key
    }

    /// Keys explicitly defined by the table, in key order.
    pub fn keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.entries.keys().copied().collect();
        keys.push(self.default_key);
        keys.sort();
        keys
    }
}
