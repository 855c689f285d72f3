//! Placeholder sets for message templates.
//!
//! Built once through [`build_placeholder`], then frozen. Consumers only get
//! read access.

use std::collections::BTreeMap;

/// Substitution slot: `{name}` or `{0}` in a template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Named(String),
    Index(usize),
}

impl From<&str> for Slot {
    fn from(name: &str) -> Self {
        Slot::Named(name.to_string())
    }
}

impl From<String> for Slot {
    fn from(name: String) -> Self {
        Slot::Named(name)
    }
}

impl From<usize> for Slot {
    fn from(index: usize) -> Self {
        Slot::Index(index)
    }
}

/// Accumulates slot bindings. Duplicate slots overwrite (last write wins).
#[derive(Debug, Default)]
pub struct PlaceholderBuilder {
    bindings: BTreeMap<Slot, String>,
    next_index: usize,
}

impl PlaceholderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: impl Into<Slot>, value: impl Into<String>) -> &mut Self {
        let slot = slot.into();
        if let Slot::Index(i) = slot {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }
        self.bindings.insert(slot, value.into());
        self
    }

    /// Binds the next free positional slot.
    pub fn push(&mut self, value: impl Into<String>) -> &mut Self {
        let index = self.next_index;
        self.set(Slot::Index(index), value)
    }

    pub fn build(self) -> Placeholder {
        Placeholder {
            bindings: self.bindings,
        }
    }
}

/// Runs `block` against a fresh builder and freezes the result.
pub fn build_placeholder(block: impl FnOnce(&mut PlaceholderBuilder)) -> Placeholder {
    let mut builder = PlaceholderBuilder::new();
    block(&mut builder);
    builder.build()
}

/// Immutable slot → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    bindings: BTreeMap<Slot, String>,
}

impl Placeholder {
    pub fn get(&self, slot: &Slot) -> Option<&str> {
        self.bindings.get(slot).map(String::as_str)
    }

    pub fn named(&self, name: &str) -> Option<&str> {
        self.get(&Slot::Named(name.to_string()))
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.get(&Slot::Index(index))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> {
        self.bindings.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Replaces `{name}` and `{N}` tokens in `template`. Unbound or malformed
    /// tokens are copied through unchanged.
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let key = &after[..close];
            if key.contains('{') {
                // Stray brace: keep it and rescan from the next one.
                out.push('{');
                rest = after;
                continue;
            }
            let slot = match key.parse::<usize>() {
                Ok(i) => Slot::Index(i),
                Err(_) => Slot::Named(key.to_string()),
            };
            match self.get(&slot) {
                Some(value) if !key.is_empty() => out.push_str(value),
                _ => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }
}
