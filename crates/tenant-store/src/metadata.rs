//! # Labels & Annotations
//!
//! Every resource carries two metadata maps:
//!
//! - **Labels**: a key maps to a *set* of string values. Adding unions the incoming values
//!   into the set, deleting subtracts them.
//! - **Annotations**: a key maps to exactly one opaque value. An annotation is added once and
//!   must be deleted explicitly before the key can be reused.
//!
//! The [`Metadata`] trait only asks a resource to hand out its two maps; the mutation rules
//! live in the provided methods so every resource type behaves identically. Each method checks
//! its preconditions before touching a map, so a failed call leaves the resource unchanged.

use crate::error::ErrorKind;
use std::collections::{BTreeMap, BTreeSet};

pub type Labels = BTreeMap<String, BTreeSet<String>>;

pub type Annotations = BTreeMap<String, serde_json::Value>;

/// Errors raised by label and annotation mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("label {0} doesn't exist")]
    LabelNotFound(String),
    #[error("annotation {0} does already exist")]
    AnnotationExists(String),
    #[error("annotation {0} doesn't exist")]
    AnnotationNotFound(String),
}

impl MetadataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetadataError::LabelNotFound(_) | MetadataError::AnnotationNotFound(_) => {
                ErrorKind::NotFound
            }
            MetadataError::AnnotationExists(_) => ErrorKind::Conflict,
        }
    }
}

/// Label and annotation mutation for a resource.
pub trait Metadata {
    fn labels(&self) -> &Labels;

    fn labels_mut(&mut self) -> &mut Labels;

    fn annotations(&self) -> &Annotations;

    fn annotations_mut(&mut self) -> &mut Annotations;

    /// Unions `values` into the set stored under `key`, creating the key if needed.
    fn add_label<K, I, V>(&mut self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.labels_mut()
            .entry(key.into())
            .or_default()
            .extend(values.into_iter().map(Into::<String>::into));
    }

    /// Removes `values` from the set under `key`.
    ///
    /// An empty `values` removes the whole key. Removing every value one by one leaves the
    /// key in place with an empty set.
    fn delete_label<I, V>(&mut self, key: &str, values: I) -> Result<(), MetadataError>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let values: Vec<V> = values.into_iter().collect();
        let labels = self.labels_mut();

        if !labels.contains_key(key) {
            return Err(MetadataError::LabelNotFound(key.to_string()));
        }

        if values.is_empty() {
            labels.remove(key);
            return Ok(());
        }

        if let Some(existing) = labels.get_mut(key) {
            for value in &values {
                existing.remove(value.as_ref());
            }
        }
        Ok(())
    }

    /// Sets `key` to `value`; fails if the key is already present.
    fn add_annotation<K, V>(&mut self, key: K, value: V) -> Result<(), MetadataError>
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        let key = key.into();
        let annotations = self.annotations_mut();
        if annotations.contains_key(&key) {
            return Err(MetadataError::AnnotationExists(key));
        }
        annotations.insert(key, value.into());
        Ok(())
    }

    fn delete_annotation(&mut self, key: &str) -> Result<(), MetadataError> {
        match self.annotations_mut().remove(key) {
            Some(_) => Ok(()),
            None => Err(MetadataError::AnnotationNotFound(key.to_string())),
        }
    }
}
