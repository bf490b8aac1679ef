// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deep merging of message dictionaries.
//!
//! Mapping levels (languages, error types, per-field maps) merge key by key, recursing
//! when both sides are mappings. Anything else is a shallow overwrite: a later source
//! always wins over earlier sources and over the value already in the destination.
//! When a mapping arrives where the destination holds a leaf, the leaf is replaced by
//! a copy of the mapping.
//!
//! # Constraints
//! Dictionaries are trusted configuration data. Ownership rules out cycles, but no
//! key is treated specially, so a source can overwrite any entry, `_default`
//! included.

use std::sync::Arc;

use crate::messages::entry::{FieldMessages, LanguageMessages, MessageEntry, MessageList};

/// Recursive merge of `source` into `self`, with `source` winning conflicts.
pub trait DeepMerge {
    fn merge_from(&mut self, source: &Self);
}

/// Merge each source into `destination`, in order, and return the destination.
///
/// # Arguments
/// * `destination` - Dictionary mutated in place
/// * `sources` - Dictionaries applied left to right; later sources win
///
/// # Example
/// ```
/// use message_box::messages::{merge, LanguageMessages, Message};
///
/// let base = LanguageMessages::new()
///     .with_template("required", "It is required")
///     .with_template("minCount", "Too few");
/// let overrides = LanguageMessages::new().with_template("required", "Es requerido");
///
/// let mut merged = LanguageMessages::new();
/// merge(&mut merged, &[&base, &overrides]);
///
/// let required = merged.get("required").unwrap().select(None);
/// assert_eq!(required, Some(&Message::from("Es requerido")));
/// assert!(merged.get("minCount").is_some());
/// ```
pub fn merge<'a, T: DeepMerge>(destination: &'a mut T, sources: &[&T]) -> &'a mut T {
    for source in sources {
        destination.merge_from(source);
    }
    destination
}

impl DeepMerge for FieldMessages {
    fn merge_from(&mut self, source: &Self) {
        // Field entries are leaves.
        for (field, message) in source.iter() {
            self.insert(field.clone(), message.clone());
        }
    }
}

impl DeepMerge for MessageEntry {
    fn merge_from(&mut self, source: &Self) {
        if let (MessageEntry::PerField(destination), MessageEntry::PerField(fields)) = (&mut *self, source) {
            destination.merge_from(fields);
            return;
        }
        *self = source.clone();
    }
}

impl DeepMerge for LanguageMessages {
    fn merge_from(&mut self, source: &Self) {
        for (error_type, entry) in source.iter() {
            match self.get_mut(error_type) {
                Some(existing) => existing.merge_from(entry),
                None => self.insert(error_type.clone(), entry.clone()),
            }
        }
    }
}

impl DeepMerge for MessageList {
    fn merge_from(&mut self, source: &Self) {
        for (language, messages) in source.iter() {
            match self.get_mut(language) {
                Some(existing) => Arc::make_mut(existing).merge_from(messages),
                None => self.insert_shared(language.clone(), Arc::clone(messages)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::entry::Message;

    fn template(messages: &LanguageMessages, error_type: &str, field: Option<&str>) -> Option<Message> {
        messages
            .get(error_type)
            .and_then(|entry| entry.select(field))
            .cloned()
    }

    #[test]
    fn test_merge_disjoint_keys_is_union() {
        let a = LanguageMessages::new().with_template("required", "A");
        let b = LanguageMessages::new().with_template("minCount", "B");

        let mut merged = LanguageMessages::new();
        merge(&mut merged, &[&a, &b]);

        assert_eq!(merged.len(), 2);
        assert_eq!(template(&merged, "required", None), Some(Message::from("A")));
        assert_eq!(template(&merged, "minCount", None), Some(Message::from("B")));
    }

    #[test]
    fn test_merge_later_scalar_wins() {
        let a = LanguageMessages::new().with_template("required", "first");
        let b = LanguageMessages::new().with_template("required", "second");
        let c = LanguageMessages::new().with_template("required", "third");

        let mut destination = LanguageMessages::new().with_template("required", "original");
        merge(&mut destination, &[&a, &b, &c]);

        assert_eq!(template(&destination, "required", None), Some(Message::from("third")));
    }

    #[test]
    fn test_merge_nested_maps_recurse() {
        let a = LanguageMessages::new().with_fields(
            "required",
            FieldMessages::new().with_default("DEFAULT").with_field("foo", "FOO"),
        );
        let b = LanguageMessages::new()
            .with_fields("required", FieldMessages::new().with_field("bar", "BAR"));

        let mut merged = LanguageMessages::new();
        merge(&mut merged, &[&a, &b]);

        assert_eq!(template(&merged, "required", Some("foo")), Some(Message::from("FOO")));
        assert_eq!(template(&merged, "required", Some("bar")), Some(Message::from("BAR")));
        assert_eq!(template(&merged, "required", None), Some(Message::from("DEFAULT")));
    }

    #[test]
    fn test_merge_leaf_replaces_field_map_and_back() {
        let fields = LanguageMessages::new()
            .with_fields("required", FieldMessages::new().with_default("DEFAULT"));
        let leaf = LanguageMessages::new().with_template("required", "LEAF");

        let mut destination = fields.clone();
        merge(&mut destination, &[&leaf]);
        assert_eq!(destination.get("required"), Some(&MessageEntry::from("LEAF")));

        merge(&mut destination, &[&fields]);
        assert_eq!(
            destination.get("required"),
            Some(&MessageEntry::PerField(FieldMessages::new().with_default("DEFAULT")))
        );
    }

    #[test]
    fn test_merge_message_lists_recurse_into_languages() {
        let base = MessageList::new()
            .with_language("en", LanguageMessages::new().with_template("required", "A"));
        let extra = MessageList::new()
            .with_language("en", LanguageMessages::new().with_template("minCount", "B"))
            .with_language("de", LanguageMessages::new().with_template("required", "C"));

        let mut merged = MessageList::new();
        merge(&mut merged, &[&base, &extra]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("en").unwrap().len(), 2);
        assert_eq!(merged.get("de").unwrap().len(), 1);
    }

    #[test]
    fn test_merge_does_not_mutate_sources() {
        let source = MessageList::new()
            .with_language("en", LanguageMessages::new().with_template("required", "A"));

        let mut destination = MessageList::new();
        merge(&mut destination, &[&source]);

        let update = MessageList::new()
            .with_language("en", LanguageMessages::new().with_template("required", "B"));
        merge(&mut destination, &[&update]);

        assert_eq!(
            template(source.get("en").unwrap(), "required", None),
            Some(Message::from("A"))
        );
        assert_eq!(
            template(destination.get("en").unwrap(), "required", None),
            Some(Message::from("B"))
        );
    }

    #[test]
    fn test_merge_returns_destination() {
        let source = LanguageMessages::new().with_template("required", "A");
        let mut destination = LanguageMessages::new();
        let returned = merge(&mut destination, &[&source]);
        assert_eq!(returned.len(), 1);
    }
}
