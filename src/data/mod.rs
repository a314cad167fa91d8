/// Data layer: core types, loading, filtering and ranking.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean → Dataset   (memoized by `cache`)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  min score / max price → subset (dataset order)
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │   rank    │   │  lookup   │  name → link
///   └──────────┘   └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod rank;
