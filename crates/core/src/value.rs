// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A small tagged-union value tree (mapping | sequence | scalar) used
//! throughout the configuration pipeline, plus a deterministic,
//! precedence-ordered merge over it.
//!
//! This exists so the materializer (SPEC_FULL.md §4.5) can express its
//! layered-default logic as one generic merge call instead of repeated
//! ad hoc attribute probing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A leaf value in the configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Null,
}

impl Scalar {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer coercion. Only exact integers coerce; a float with a
    /// fractional part or a non-numeric string does not (SPEC_FULL.md §4.5:
    /// "values that fail integer coercion fall through to the next layer").
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            Scalar::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            Scalar::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

/// A node in the configuration value tree: a mapping, a sequence, or a
/// scalar. Mappings preserve insertion order (matters for deterministic
/// output when re-serializing, and for stable iteration in tests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Mapping(IndexMap<String, Value>),
    Sequence(Vec<Value>),
    Scalar(Scalar),
}

impl Value {
    pub fn mapping() -> Self {
        Value::Mapping(IndexMap::new())
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Look up a key in a mapping; `None` for non-mappings or missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?.get(key)
    }

    /// Remove and return a key from a mapping ("consumed" per SPEC_FULL.md
    /// §4.5's defaults precedence: the file-level value is taken out of the
    /// mapping once read, so the module-body pass below doesn't see it).
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.as_mapping_mut()?.shift_remove(key)
    }

    /// Merge `other` into `self` for mappings: for each key present in
    /// `other` but absent in `self`, insert it. `self`'s existing keys win
    /// (left-precedence merge) and nested mappings are not merged
    /// recursively — the materializer only ever needs a flat backfill of
    /// missing top-level keys, so that's the only semantics this provides.
    ///
    /// No-op (and idempotent: merging a mapping with itself changes
    /// nothing) when either side is not a mapping.
    pub fn backfill(&mut self, other: &Value) {
        let (Value::Mapping(into), Value::Mapping(from)) = (self, other) else {
            return;
        };
        for (key, value) in from {
            into.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(v: serde_yaml::Value) -> Self {
        match v {
            serde_yaml::Value::Null => Value::Scalar(Scalar::Null),
            serde_yaml::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Scalar(Scalar::Int(i))
                } else {
                    Value::Scalar(Scalar::Float(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_yaml::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_yaml::Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut out = IndexMap::with_capacity(map.len());
                for (k, v) in map {
                    if let Some(key) = k.as_str() {
                        out.insert(key.to_string(), Value::from(v));
                    }
                }
                Value::Mapping(out)
            }
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
