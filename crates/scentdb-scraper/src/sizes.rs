//! Deduplicated size dimension table.

use std::collections::HashMap;

use scentdb_core::Size;

use crate::ids::{EntityKind, IdAllocator};
use crate::parse::canonical_size_label;

/// Size rows keyed by canonical label, in first-seen order.
#[derive(Debug, Default)]
pub struct SizeTable {
    rows: Vec<Size>,
    by_name: HashMap<String, i64>,
}

impl SizeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalizes `raw_label` and returns the id of its size row,
    /// allocating a new row the first time a canonical label is seen.
    pub fn resolve(&mut self, ids: &mut IdAllocator, raw_label: &str) -> i64 {
        let name = canonical_size_label(raw_label);
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }

        let id = ids.next(EntityKind::Size);
        tracing::debug!(size_id = id, name = %name, raw_label, "new size row");
        self.by_name.insert(name.clone(), id);
        self.rows.push(Size { id, name });
        id
    }

    #[must_use]
    pub fn rows(&self) -> &[Size] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Size> {
        self.rows
    }
}
