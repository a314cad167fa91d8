use std::cmp::Ordering;
use std::fmt;

use super::model::Entry;

/// Number of rows shown in the ranking table.
pub const TOP_N: usize = 10;

/// Column the ranking is ordered by. Direction is fixed per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest score first.
    #[default]
    Score,
    /// Cheapest first.
    LowestPrice,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Score, SortKey::LowestPrice];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::LowestPrice => "lowest_price",
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortKey::LowestPrice)
    }

    /// Entry values are always finite, so `partial_cmp` is total here and
    /// `-0.0` ties with `0.0`.
    fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        let ord = match self {
            SortKey::Score => b.score.partial_cmp(&a.score),
            SortKey::LowestPrice => a.lowest_price.partial_cmp(&b.lowest_price),
        };
        ord.unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the ranking table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingRow<'a> {
    pub name: &'a str,
    pub lowest_price: f64,
    pub score: f64,
    pub comment: &'a str,
}

impl<'a> From<&'a Entry> for RankingRow<'a> {
    fn from(e: &'a Entry) -> Self {
        RankingRow {
            name: &e.name,
            lowest_price: e.lowest_price,
            score: e.score,
            comment: &e.comment,
        }
    }
}

/// Sort `subset` by `key` and keep the first `top_n` rows.
///
/// The sort is stable: entries with equal keys keep their subset order.
pub fn rank<'a>(subset: &[&'a Entry], key: SortKey, top_n: usize) -> Vec<RankingRow<'a>> {
    let mut sorted = subset.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted.into_iter().take(top_n).map(RankingRow::from).collect()
}
