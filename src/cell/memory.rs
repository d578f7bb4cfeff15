use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{Cell, CellError, CellIter};

#[derive(Debug, Default)]
pub struct MemoryCell {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Cell for MemoryCell {
    fn get(&self, key: &str) -> Result<Vec<u8>, CellError> {
        self.entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| CellError::NotFound(key.to_string()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), CellError> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn iter_prefix(&self, prefix: &str) -> CellIter<'_> {
        // Snapshot so the lock is not held across the caller's pass.
        let matches: Vec<_> = self
            .entries
            .read()
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_bytes().to_vec(), v.clone()))
            .collect();
        Box::new(matches.into_iter())
    }
}
