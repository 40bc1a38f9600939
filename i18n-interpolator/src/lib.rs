//! Resolve `${i18n("KEY", variables)}` markers embedded in JSON documents.
//!
//! Every string in a document may carry markers. Each marker is replaced by
//! the template registered under `KEY` for the selected language, with the
//! `${path}` placeholders of that template filled in from `variables`:
//!
//! ```
//! use i18n_interpolator::{Catalog, Interpolator};
//! use serde_json::json;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_message("default", "greeting", "Hello, ${user.name}!");
//!
//! let interpolator = Interpolator::new(catalog);
//! let document = json!({"title": r#"${i18n("greeting", {user: {name: "Ada"}})}"#});
//! assert_eq!(
//!     interpolator.interpolate(&document).unwrap(),
//!     json!({"title": "Hello, Ada!"})
//! );
//! ```
//!
//! The variables argument is JSON5 and may itself contain markers. Those are
//! resolved first, so nested translations end up inside the outer template.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

pub mod catalog;
pub mod error;
pub mod format;
pub mod loader;
pub mod parser;
pub mod path;
pub mod template;
pub mod variables;

#[cfg(test)]
mod integration_tests;

pub use catalog::{Catalog, DEFAULT_LANGUAGE, LocalizedMessages};
pub use error::{InterpolateError, InterpolateResult, LoadError, PathError};
pub use format::format_value;
pub use loader::{load_catalog_from_dir, load_messages_from_file};
pub use parser::{Call, find_call};
pub use path::resolve_path;
pub use template::substitute;
pub use variables::parse_relaxed;

/// Default limit on document and marker nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone)]
pub struct Interpolator {
    catalog: Arc<Catalog>,
    language: String,
    max_depth: usize,
}

impl Interpolator {
    pub fn new(catalog: Catalog) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    pub fn from_shared(catalog: Arc<Catalog>) -> Self {
        Interpolator {
            catalog,
            language: DEFAULT_LANGUAGE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Select the active language.
    ///
    /// A language missing from the catalog resets the selection to
    /// [`DEFAULT_LANGUAGE`] instead of failing.
    pub fn set_language(&mut self, language: &str) -> &mut Self {
        self.language = select_language(&self.catalog, language).to_string();
        self
    }

    /// A new interpolator sharing this catalog, bound to `language`.
    pub fn for_language(&self, language: &str) -> Self {
        Interpolator {
            catalog: Arc::clone(&self.catalog),
            language: select_language(&self.catalog, language).to_string(),
            max_depth: self.max_depth,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn with_max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolve every marker in `document` using the active language.
    pub fn interpolate(&self, document: &Value) -> InterpolateResult<Value> {
        self.pass(&self.language).value(document, 0)
    }

    /// Resolve every marker in `document` using `language`, leaving the
    /// active language untouched.
    pub fn interpolate_in(&self, language: &str, document: &Value) -> InterpolateResult<Value> {
        self.pass(select_language(&self.catalog, language))
            .value(document, 0)
    }

    /// Resolve every marker in a single string.
    pub fn interpolate_str(&self, text: &str) -> InterpolateResult<String> {
        self.pass(&self.language).string(text, 0)
    }

    fn pass<'a>(&'a self, language: &'a str) -> Pass<'a> {
        Pass {
            catalog: &self.catalog,
            language,
            max_depth: self.max_depth,
        }
    }
}

fn select_language<'a>(catalog: &Catalog, language: &'a str) -> &'a str {
    if catalog.has_language(language) {
        language
    } else {
        debug!(
            "Language '{}' not in catalog, falling back to '{}'",
            language, DEFAULT_LANGUAGE
        );
        DEFAULT_LANGUAGE
    }
}

/// A single interpolation run with the language fixed up front.
struct Pass<'a> {
    catalog: &'a Catalog,
    language: &'a str,
    max_depth: usize,
}

impl Pass<'_> {
    fn value(&self, value: &Value, depth: usize) -> InterpolateResult<Value> {
        if depth > self.max_depth {
            return Err(InterpolateError::RecursionLimit {
                limit: self.max_depth,
            });
        }

        match value {
            Value::String(text) => self.string(text, depth).map(Value::String),
            Value::Array(items) => items
                .iter()
                .map(|item| self.value(item, depth + 1))
                .collect::<InterpolateResult<Vec<Value>>>()
                .map(Value::Array),
            Value::Object(map) => {
                let mut result = Map::with_capacity(map.len());
                for (key, item) in map {
                    result.insert(key.clone(), self.value(item, depth + 1)?);
                }
                Ok(Value::Object(result))
            }
            other => Ok(other.clone()),
        }
    }

    fn string(&self, text: &str, depth: usize) -> InterpolateResult<String> {
        let mut result = String::with_capacity(text.len());
        let mut position = 0;

        while let Some(call) = parser::find_call(text, position)? {
            result.push_str(&text[position..call.start]);

            let variables = match call.raw_variables {
                Some(raw) => {
                    let parsed = variables::parse_relaxed(&call.key, raw)?;
                    // Markers inside the variables resolve before the outer template
                    self.value(&parsed, depth + 1)?
                }
                None => Value::Null,
            };

            let template = self.catalog.resolve(self.language, &call.key);
            result.push_str(&template::substitute(template, &variables));
            position = call.end;
        }

        result.push_str(&text[position..]);
        Ok(result)
    }
}
