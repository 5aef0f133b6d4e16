//! The component catalog: named pin lists loaded from a JSON document.
//!
//! The catalog schema is a single JSON object mapping component names to
//! ordered arrays of pin-label strings:
//!
//! ```json
//! {
//!     "Raspberry Pi": ["3.3V", "5V", "GPIO 2 (SDA1)", "5V"],
//!     "Arduino": ["5V", "GND", "GPIO 0", "GPIO 1"]
//! }
//! ```
//!
//! Every array must hold an even, non-zero number of strings (a component
//! always has two symmetric pin columns). The catalog is loaded once at
//! startup and is read-only afterwards; malformed structure fails fast at
//! load time with an error naming the offending component. Entry order is
//! preserved, since it drives the upstream per-component action surface.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while loading or validating a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("component `{component}`: pin list must be a JSON array")]
    NotAnArray { component: String },

    #[error("component `{component}`: pin entry at index {index} is not a string")]
    NonStringPin { component: String, index: usize },

    #[error(
        "component `{component}`: pin list must be non-empty with an even number of labels, got {len}"
    )]
    InvalidPinCount { component: String, len: usize },
}

/// An ordered, validated list of pin labels for one component.
///
/// The length is guaranteed even and non-zero; pin at index `i` belongs to
/// the left column if `i` is even, the right column if `i` is odd. Labels
/// are opaque strings with no electrical semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinSpec {
    labels: Vec<String>,
}

impl PinSpec {
    /// Creates a pin spec, validating the even-length invariant.
    ///
    /// # Errors
    ///
    /// Returns `Err(len)` with the rejected length if `labels` is empty or
    /// has odd length.
    pub fn new(labels: Vec<String>) -> Result<Self, usize> {
        if labels.is_empty() || labels.len() % 2 != 0 {
            return Err(labels.len());
        }
        Ok(Self { labels })
    }

    /// Returns the pin labels in physical interleaved order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the total number of pins
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; an empty pin list never passes validation
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of rows per column (half the pin count)
    pub fn rows(&self) -> usize {
        self.labels.len() / 2
    }
}

/// A named component and its pin spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDefinition {
    name: String,
    pins: PinSpec,
}

impl ComponentDefinition {
    pub fn new(name: impl Into<String>, pins: PinSpec) -> Self {
        Self {
            name: name.into(),
            pins,
        }
    }

    /// Returns the component's unique name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the component's pin spec
    pub fn pins(&self) -> &PinSpec {
        &self.pins
    }
}

/// The full component catalog, keyed by component name.
///
/// Loaded once at startup and read-only for the lifetime of the process.
/// Iteration order matches the order of entries in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    components: IndexMap<String, ComponentDefinition>,
}

impl Catalog {
    /// Loads a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or any
    /// validation error from [`Catalog::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// Validation is fail-fast: the first malformed component aborts the
    /// load, and the error names that component.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Parse`] if the document is not a JSON object
    /// - [`CatalogError::NotAnArray`] if a component's value is not an array
    /// - [`CatalogError::NonStringPin`] if a pin entry is not a string
    /// - [`CatalogError::InvalidPinCount`] if a pin list is empty or odd
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, Value> = serde_json::from_str(json)?;

        let mut components = IndexMap::with_capacity(raw.len());
        for (name, value) in raw {
            let Value::Array(entries) = value else {
                return Err(CatalogError::NotAnArray { component: name });
            };

            let mut labels = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                let Value::String(label) = entry else {
                    return Err(CatalogError::NonStringPin {
                        component: name,
                        index,
                    });
                };
                labels.push(label);
            }

            let pins = PinSpec::new(labels).map_err(|len| CatalogError::InvalidPinCount {
                component: name.clone(),
                len,
            })?;

            components.insert(name.clone(), ComponentDefinition::new(name, pins));
        }

        Ok(Self { components })
    }

    /// Looks up a component by name
    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.get(name)
    }

    /// Returns true if the catalog holds a component with this name
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Returns the component names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Iterates the components in document order
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.components.values()
    }

    /// Returns the number of components in the catalog
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the catalog holds no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
