//! Column schema — maps declared field names onto output row positions.

use std::collections::HashMap;

/// Ordered column list with a name → position index.
///
/// Positions follow the left-to-right order of the declared list. When a name
/// is declared more than once, the last declaration owns the mapping and the
/// earlier slots stay in the row, permanently empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ColumnSchema {
    /// Split a comma-separated column list. Empty pieces are kept as columns,
    /// so `"a,,b"` and `"a,b,"` both declare three slots.
    pub fn parse(columns: &str) -> Self {
        let names: Vec<String> = columns.split(',').map(str::to_owned).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            index.insert(name.clone(), position);
        }
        Self { names, index }
    }

    /// Number of declared columns, duplicates included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declared names in column order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names declared more than once, in order of first repeat.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (position, name) in self.names.iter().enumerate() {
            if self.index.get(name) != Some(&position) && !out.contains(&name.as_str()) {
                out.push(name);
            }
        }
        out
    }
}
