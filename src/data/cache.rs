use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::error::DataError;
use super::loader::load_file;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Memoized loader
// ---------------------------------------------------------------------------

struct CachedDataset {
    modified: Option<SystemTime>,
    dataset: Arc<Dataset>,
}

/// Memo table for cleaned datasets, keyed by source path.
///
/// A cached entry is reused only while the file's modification time is
/// unchanged. Files whose mtime cannot be read are keyed by path alone.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CachedDataset>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cleaned dataset for `path`, re-reading it when stale.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Dataset>, DataError> {
        let key = cache_key(path);
        let modified = modified_time(path);

        if let Some(cached) = self.entries.get(&key) {
            if cached.modified == modified {
                log::debug!("cache hit for {}", key.display());
                return Ok(Arc::clone(&cached.dataset));
            }
            log::info!("{} changed on disk, reloading", key.display());
        }

        let dataset = Arc::new(load_file(path)?);
        self.entries.insert(
            key,
            CachedDataset {
                modified,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Forget the cached dataset for `path`, if any.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(&cache_key(path)).is_some()
    }

    /// Forget every cached dataset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use std::fs::{File, FileTimes};
    use std::io::Write;
    use std::time::Duration;

    use super::*;

    impl DatasetCache {
        fn len(&self) -> usize {
            self.entries.len()
        }

        fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }

    const HEADER: &str = "name,score,lowest_price,comment,stress,link\n";

    fn write_csv(path: &Path, rows: &str) {
        let mut f = File::create(path).unwrap();
        write!(f, "{HEADER}{rows}").unwrap();
    }

    fn set_mtime(path: &Path, t: SystemTime) {
        let f = File::options().write(true).open(path).unwrap();
        f.set_times(FileTimes::new().set_modified(t)).unwrap();
    }

    #[test]
    fn repeated_load_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gourmet.csv");
        write_csv(&path, "A,4.0,1000,,,https://a\n");

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn modified_file_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gourmet.csv");
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        write_csv(&path, "A,4.0,1000,,,https://a\n");
        set_mtime(&path, t0);

        let mut cache = DatasetCache::new();
        assert_eq!(cache.load(&path).unwrap().len(), 1);

        write_csv(&path, "A,4.0,1000,,,https://a\nB,3.0,2000,,,https://b\n");
        set_mtime(&path, t0 + Duration::from_secs(60));

        assert_eq!(cache.load(&path).unwrap().len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidate_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gourmet.csv");
        write_csv(&path, "A,4.0,1000,,,https://a\n");

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        assert!(cache.invalidate(&path));
        assert!(!cache.invalidate(&path));
        let second = cache.load(&path).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn errors_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");

        let mut cache = DatasetCache::new();
        assert!(cache.load(&path).is_err());
        assert!(cache.is_empty());

        write_csv(&path, "A,4.0,1000,,,https://a\n");
        assert_eq!(cache.load(&path).unwrap().len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_forgets_every_path() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        write_csv(&a, "A,4.0,1000,,,https://a\n");
        write_csv(&b, "B,4.0,1000,,,https://b\n");

        let mut cache = DatasetCache::new();
        let first = cache.load(&a).unwrap();
        cache.load(&b).unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(!Arc::ptr_eq(&first, &cache.load(&a).unwrap()));
    }
}
