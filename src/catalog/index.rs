use std::collections::HashMap;

/// Lowercased view of one searchable field across the catalog.
///
/// `keys[i]` is the lowercased field of record `i`. Several records may share
/// a key; lookups by key resolve to the first of them in catalog order.
#[derive(Debug, Default, Clone)]
pub struct FieldIndex {
    keys: Vec<String>,
    first_by_key: HashMap<String, usize>,
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the field of the next record
    pub fn push(&mut self, field: &str) {
        let key = field.to_lowercase();
        let index = self.keys.len();
        self.first_by_key.entry(key.clone()).or_insert(index);
        self.keys.push(key);
    }

    /// All keys in catalog order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Index of the first record whose key equals `key`
    pub fn first(&self, key: &str) -> Option<usize> {
        self.first_by_key.get(key).copied()
    }

    /// Indices of records whose key contains `needle`, in catalog order
    pub fn containing<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.keys
            .iter()
            .enumerate()
            .filter(move |(_, key)| key.contains(needle))
            .map(|(idx, _)| idx)
    }
}
