//! Webhook records and the ordered table collecting them.

use std::collections::HashMap;

/// A webhook event and the activity types it can fire with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    /// Event name, e.g. `pull_request`. Never empty.
    pub name: String,
    /// Activity types in document order. Empty when the event has none.
    pub types: Vec<String>,
}

impl Webhook {
    pub fn new(name: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }
}

/// Webhooks keyed by name, iterated in the order they were first inserted.
///
/// The order is the order of appearance in the source document; it is not
/// sorted.
#[derive(Debug, Clone, Default)]
pub struct WebhookTable {
    entries: Vec<Webhook>,
    index: HashMap<String, usize>,
}

impl WebhookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a webhook.
    ///
    /// A name seen before keeps its position and takes the new types.
    /// Returns true if the name was new.
    pub fn insert(&mut self, webhook: Webhook) -> bool {
        if let Some(&pos) = self.index.get(&webhook.name) {
            self.entries[pos].types = webhook.types;
            return false;
        }
        self.index.insert(webhook.name.clone(), self.entries.len());
        self.entries.push(webhook);
        true
    }

    /// Returns the activity types of the named webhook.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].types.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates webhooks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Webhook> {
        self.entries.iter()
    }

    /// Returns the webhook names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|w| w.name.as_str())
    }
}

impl<'t> IntoIterator for &'t WebhookTable {
    type Item = &'t Webhook;
    type IntoIter = std::slice::Iter<'t, Webhook>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Webhook> for WebhookTable {
    fn from_iter<I: IntoIterator<Item = Webhook>>(iter: I) -> Self {
        let mut table = Self::new();
        for webhook in iter {
            table.insert(webhook);
        }
        table
    }
}
