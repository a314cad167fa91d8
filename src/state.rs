use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::cache::DatasetCache;
use crate::data::error::DataError;
use crate::data::filter::{filtered_indices, Thresholds};
use crate::data::lookup::resolve_link;
use crate::data::model::{Dataset, Entry};
use crate::data::rank::{rank, RankingRow, SortKey, TOP_N};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every setter recomputes the derived views synchronously; widgets only
/// ever read `subset()`, `ranking()` and `selected_link()`.
#[derive(Default)]
pub struct AppState {
    cache: DatasetCache,

    /// Path of the currently shown source.
    pub source: Option<PathBuf>,

    /// Loaded dataset (None until a file loads).
    pub dataset: Option<Arc<Dataset>>,

    pub thresholds: Thresholds,

    pub sort_key: SortKey,

    /// Name chosen in the entry selector.
    pub selected_name: Option<String>,

    /// Indices of entries passing the current thresholds (cached).
    pub visible_indices: Vec<usize>,

    /// Colours for the scatter plot, one per stress label.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` through the cache and make it the current dataset.
    ///
    /// On failure the previous dataset stays in place. Switching to a
    /// different path drops every other cached dataset.
    pub fn open(&mut self, path: &Path) -> Result<(), DataError> {
        if self.source.as_deref().is_some_and(|current| current != path) {
            self.cache.clear();
        }
        let dataset = self.cache.load(path)?;
        self.source = Some(path.to_path_buf());
        self.set_dataset(dataset);
        Ok(())
    }

    /// Drop the cached copy of the current source and read it again.
    pub fn reload(&mut self) -> Result<(), DataError> {
        let Some(path) = self.source.clone() else {
            return Ok(());
        };
        self.cache.invalidate(&path);
        self.open(&path)
    }

    /// Open `path`, reporting any failure in the status bar.
    pub fn open_or_report(&mut self, path: &Path) {
        match self.open(path) {
            Ok(()) => {}
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and recompute every view.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.color_map = ColorMap::new(&dataset.stress_values);
        self.selected_name = None;
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds.clamped();
        self.refilter();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Select an entry by name. Names outside the current subset are ignored.
    pub fn select_name(&mut self, name: &str) {
        if self.subset().iter().any(|e| e.name == name) {
            self.selected_name = Some(name.to_string());
        }
    }

    /// Recompute `visible_indices` and keep the selection valid.
    ///
    /// A selection that dropped out of the subset falls back to the first
    /// remaining name, or to nothing when the subset is empty.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(ds, &self.thresholds),
            None => Vec::new(),
        };

        let subset = self.subset();
        let still_visible = self
            .selected_name
            .as_deref()
            .is_some_and(|name| subset.iter().any(|e| e.name == name));
        if !still_visible {
            let first = subset.first().map(|e| e.name.clone());
            self.selected_name = first;
        }
    }

    /// Entries passing the current thresholds, in dataset order.
    pub fn subset(&self) -> Vec<&Entry> {
        let Some(ds) = self.dataset.as_deref() else {
            return Vec::new();
        };
        self.visible_indices
            .iter()
            .filter_map(|&i| ds.entries.get(i))
            .collect()
    }

    /// Top rows of the subset under the current sort key.
    pub fn ranking(&self) -> Vec<RankingRow<'_>> {
        rank(&self.subset(), self.sort_key, TOP_N)
    }

    /// Name and link of the selected entry.
    pub fn selected_link(&self) -> Option<(&str, &str)> {
        let name = self.selected_name.as_deref()?;
        match resolve_link(&self.subset(), name) {
            Ok(link) => Some((name, link)),
            Err(e) => {
                // refilter() keeps the selection inside the subset.
                debug_assert!(false, "{e}");
                log::error!("{e}");
                None
            }
        }
    }
}
