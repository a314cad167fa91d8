use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Entry – one row of the cleaned table
// ---------------------------------------------------------------------------

/// A single venue listing after cleaning.
///
/// `score` and `lowest_price` are always finite once an `Entry` exists; rows
/// whose values could not be coerced never make it this far.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Display name. Not guaranteed unique.
    pub name: String,
    /// Popularity score, usually within 0.0–5.0.
    pub score: f64,
    /// Lowest price in yen.
    pub lowest_price: f64,
    pub comment: String,
    /// Auxiliary label, only ever displayed.
    pub stress: String,
    pub link: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete cleaned table
// ---------------------------------------------------------------------------

/// The full cleaned dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Entries in source row order, minus dropped rows.
    pub entries: Vec<Entry>,
    /// Sorted set of distinct `stress` values (used for colouring).
    pub stress_values: BTreeSet<String>,
    /// Number of source rows dropped during cleaning.
    pub dropped_rows: usize,
}

impl Dataset {
    /// Build the dataset and its stress index from cleaned entries.
    pub fn from_entries(entries: Vec<Entry>, dropped_rows: usize) -> Self {
        let stress_values = entries.iter().map(|e| e.stress.clone()).collect();
        Dataset {
            entries,
            stress_values,
            dropped_rows,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that occur more than once, with their occurrence count.
    ///
    /// Link lookup by name picks the first match, so these are the names
    /// for which later rows can never be resolved.
    pub fn duplicate_names(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for e in &self.entries {
            *counts.entry(e.name.as_str()).or_default() += 1;
        }
        counts.retain(|_, n| *n > 1);
        counts
    }
}

#[cfg(test)]
pub(crate) fn entry(name: &str, score: f64, lowest_price: f64) -> Entry {
    Entry {
        name: name.to_string(),
        score,
        lowest_price,
        comment: format!("{name} comment"),
        stress: String::new(),
        link: format!("https://example.com/{name}"),
    }
}
