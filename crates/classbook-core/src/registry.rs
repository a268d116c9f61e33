//! Feature registry - the slug → feature lookup every other stage reads from
//!
//! Features arrive from the data repository either as a JSON object keyed by
//! slug or as a plain JSON array of records. Either way the `slug` field of the
//! record is authoritative, and two records claiming the same slug abort the
//! whole batch.

use crate::error::{ClassbookError, Result};
use crate::model::Feature;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Accepted shapes of a feature bundle
#[derive(Deserialize)]
#[serde(untagged)]
enum Bundle {
    Keyed(BTreeMap<String, Feature>),
    Listed(Vec<Feature>),
}

/// Immutable set of features, iterated in slug order
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: BTreeMap<String, Feature>,
}

impl FeatureRegistry {
    /// Build a registry from feature records
    ///
    /// # Errors
    ///
    /// Returns [`ClassbookError::DuplicateSlug`] if two records share a slug.
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for feature in features {
            if map.contains_key(&feature.slug) {
                return Err(ClassbookError::DuplicateSlug(feature.slug));
            }
            map.insert(feature.slug.clone(), feature);
        }
        tracing::debug!("Registered {} features", map.len());
        Ok(Self { features: map })
    }

    /// Parse a JSON feature bundle
    ///
    /// # Errors
    ///
    /// Returns [`ClassbookError::BundleInvalid`] for malformed JSON and
    /// [`ClassbookError::DuplicateSlug`] for slug collisions.
    pub fn from_json(json: &str) -> Result<Self> {
        let bundle: Bundle = serde_json::from_str(json)?;
        match bundle {
            Bundle::Keyed(map) => Self::new(map.into_values()),
            Bundle::Listed(list) => Self::new(list),
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Feature> {
        self.features.get(slug)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All features, ascending by slug
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// Every class named by any feature binding
    pub fn classes(&self) -> BTreeSet<&str> {
        self.features
            .values()
            .flat_map(|feature| feature.classes.keys().map(String::as_str))
            .collect()
    }

    /// Features bound to `class`, ascending by slug
    pub fn bound_to<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Feature> + 'a {
        self.features
            .values()
            .filter(move |feature| feature.binding(class).is_some())
    }

    /// Features whose binding for `class` carries a progression fragment
    pub fn class_features<'a>(&'a self, class: &'a str) -> Vec<&'a Feature> {
        self.features
            .values()
            .filter(|feature| feature.progression(class).is_some())
            .collect()
    }
}
