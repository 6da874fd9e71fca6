//! Episode metadata carried alongside observations.
use crate::error::HullError;
use std::collections::{
    hash_map::{IntoIter, Iter, Keys},
    HashMap,
};

/// Represents possible types of values that can be stored in an [`Info`] map.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    /// A boolean flag, e.g. a success indicator.
    Bool(bool),

    /// An integer value.
    Int(i64),

    /// A single floating-point value.
    Scalar(f64),

    /// A text value, useful for labels or descriptions.
    String(String),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),
}

/// A string-keyed map of metadata returned alongside each `reset`/`step`
/// result.
///
/// Environments populate it with auxiliary values; wrappers may add, rename
/// or remove keys they own, but must not corrupt keys they don't.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info(HashMap<String, InfoValue>);

impl Info {
    /// Creates an empty info map.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates an info map from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, InfoValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair, replacing any existing value for the key.
    pub fn insert(&mut self, k: impl Into<String>, v: InfoValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, k: &str) -> Option<&InfoValue> {
        self.0.get(k)
    }

    /// Removes a key and returns its value, if present.
    pub fn remove(&mut self, k: &str) -> Option<InfoValue> {
        self.0.remove(k)
    }

    /// `true` if the map contains the key.
    pub fn contains_key(&self, k: &str) -> bool {
        self.0.contains_key(k)
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> Keys<String, InfoValue> {
        self.0.keys()
    }

    /// Returns an iterator over key-value pairs.
    pub fn iter(&self) -> Iter<String, InfoValue> {
        self.0.iter()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges two maps, with entries of `other` taking precedence.
    pub fn merge(mut self, other: Info) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Returns the boolean value for a key.
    pub fn get_bool(&self, k: &str) -> Result<bool, HullError> {
        match self.0.get(k) {
            Some(InfoValue::Bool(v)) => Ok(*v),
            Some(_) => Err(HullError::InfoValueTypeError(k.to_string())),
            None => Err(HullError::InfoKeyError(k.to_string())),
        }
    }

    /// Returns the scalar value for a key.
    pub fn get_scalar(&self, k: &str) -> Result<f64, HullError> {
        match self.0.get(k) {
            Some(InfoValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(HullError::InfoValueTypeError(k.to_string())),
            None => Err(HullError::InfoKeyError(k.to_string())),
        }
    }

    /// Returns the integer value for a key.
    pub fn get_int(&self, k: &str) -> Result<i64, HullError> {
        match self.0.get(k) {
            Some(InfoValue::Int(v)) => Ok(*v),
            Some(_) => Err(HullError::InfoValueTypeError(k.to_string())),
            None => Err(HullError::InfoKeyError(k.to_string())),
        }
    }
}

impl IntoIterator for Info {
    type Item = (String, InfoValue);
    type IntoIter = IntoIter<String, InfoValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
