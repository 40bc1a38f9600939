use std::collections::HashMap;

use tracing::trace;

/// Language used when no language, or an unknown one, is selected.
pub const DEFAULT_LANGUAGE: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedMessages(pub HashMap<String, String>);

impl LocalizedMessages {
    pub fn new() -> Self {
        LocalizedMessages(HashMap::new())
    }
    pub fn with_message(&mut self, key: &str, template: &str) -> &mut Self {
        self.0.insert(key.to_owned(), template.to_owned());
        self
    }
    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn get_messages(&self) -> &HashMap<String, String> {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LocalizedMessages(
            iter.into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
        )
    }
}

/// Translation templates keyed by language and then by message key.
///
/// e.g. catalog["default"]["greeting"] = "Hello, ${name}"
///      catalog["fr"]["greeting"]      = "Bonjour, ${name}"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    languages: HashMap<String, LocalizedMessages>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            languages: HashMap::new(),
        }
    }

    pub fn with_messages_for_language(
        &mut self,
        language: &str,
        messages: LocalizedMessages,
    ) -> &mut Self {
        self.languages.insert(language.to_string(), messages);
        self
    }

    pub fn add_message(&mut self, language: &str, key: &str, template: &str) -> &mut Self {
        self.languages
            .entry(language.to_string())
            .or_insert_with(LocalizedMessages::new)
            .with_message(key, template);
        self
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Languages present in the catalog, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn get_template(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|messages| messages.get_message(key))
            .map(String::as_str)
    }

    /// Template for `key` under `language`, or the key itself on a miss.
    ///
    /// An empty template counts as a miss. The key is then used as the
    /// template, so placeholders written inside the key still get expanded.
    pub fn resolve<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        match self.get_template(language, key) {
            Some(template) if !template.is_empty() => template,
            _ => {
                trace!(
                    "No template for '{}' in language '{}', using the key",
                    key, language
                );
                key
            }
        }
    }
}

impl FromIterator<(String, LocalizedMessages)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, LocalizedMessages)>>(iter: I) -> Self {
        Catalog {
            languages: iter.into_iter().collect(),
        }
    }
}
