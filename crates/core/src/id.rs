// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Newtype identifiers used across the configuration and loading pipeline.

/// Define a newtype ID wrapper around `String`.
///
/// Generates `new()`, `as_str()`, `Display`, `From<String>`, `From<&str>`,
/// `PartialEq<str>`, `PartialEq<&str>`, and `Borrow<str>` implementations.
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Name of a collector module, derived from its filename with the
    /// `.chart.py` suffix stripped (exact-suffix match — see SPEC_FULL.md §9
    /// Open Questions on the source's character-class trim bug).
    pub struct ModuleName;
}

/// Fixed discovery suffix collector module files are named with.
pub const MODULE_FILE_SUFFIX: &str = ".chart.py";

impl ModuleName {
    /// Derive a module name from a filename, stripping the exact
    /// [`MODULE_FILE_SUFFIX`] suffix if present.
    pub fn from_filename(filename: &str) -> Option<Self> {
        filename
            .strip_suffix(MODULE_FILE_SUFFIX)
            .filter(|stem| !stem.is_empty())
            .map(Self::new)
    }

    /// The on-disk filename this module would be discovered under.
    pub fn filename(&self) -> String {
        format!("{}{}", self.0, MODULE_FILE_SUFFIX)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
