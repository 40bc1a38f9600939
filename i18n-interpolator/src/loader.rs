use crate::catalog::{Catalog, LocalizedMessages};
use crate::error::LoadError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load messages from a single JSON or JSON5 file
///
/// The file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "message-key": "template with ${placeholder}",
///     "another-key": "another template"
/// }
/// ```
///
/// Files with a `.json5` extension are read with the relaxed parser, every
/// other file as strict JSON.
///
/// # Errors
/// - File read errors
/// - Invalid JSON
/// - Root value that is not an object
pub fn load_messages_from_file(path: &Path) -> Result<LocalizedMessages, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let json: Value = if is_json5(path) {
        json5::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let obj = json
        .as_object()
        .ok_or_else(|| LoadError::NotAnObject(path.to_path_buf()))?;

    let mut messages = LocalizedMessages::new();
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        if let Some(template) = value.as_str() {
            messages.with_message(key, template);
        } else {
            warn!(
                "Message '{}' in '{}' is not a string, skipping",
                key,
                path.display()
            );
        }
    }

    Ok(messages)
}

/// Load a catalog from a directory of message files
///
/// Every `*.json` and `*.json5` file in the directory becomes one language,
/// named after the file stem: `default.json` -> `"default"`,
/// `zh-hans.json5` -> `"zh-hans"`. Subdirectories are not searched.
///
/// # Errors
/// - Directory not found or not a directory
/// - File read/parse errors
pub fn load_catalog_from_dir(dir: &Path) -> Result<Catalog, LoadError> {
    if !dir.exists() {
        return Err(LoadError::NotFound(dir.to_path_buf()));
    }

    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut catalog = Catalog::new();
    let mut loaded = 0;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !is_json(&path) && !is_json5(&path) {
            continue;
        }

        let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!("Skipping file with invalid name: {}", path.display());
            continue;
        };

        let messages = load_messages_from_file(&path)?;
        debug!(
            "Loaded {} messages for language '{}' from {}",
            messages.len(),
            language,
            path.display()
        );
        catalog.with_messages_for_language(language, messages);
        loaded += 1;
    }

    if loaded == 0 {
        warn!("No message files found in directory {}", dir.display());
    }

    Ok(catalog)
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

fn is_json5(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json5")
}
