//! Progress display for registry lookups
//!
//! Provides visual feedback during analysis using indicatif. The bar is driven
//! by [`TrackedSource`], which wraps the metadata source and ticks once per
//! finished lookup, whatever order lookups complete in.

use crate::domain::PackageMetadata;
use crate::registry::MetadataSource;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len} ({eta})";

/// Progress reporter for an analysis run
pub struct Progress {
    /// Whether progress display is enabled (disabled in quiet and JSON modes)
    enabled: bool,
    /// Current progress bar
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Start a progress bar for a known number of lookups
    pub fn start(&mut self, total: u64, message: &str) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(total);
        // The template is a constant; a bad one falls back to the default style
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .map(|style| style.progress_chars("█▓▒░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Increment progress by one
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Wrap a metadata source so each completed lookup advances the bar
    pub fn track(&self, inner: Arc<dyn MetadataSource>) -> Arc<dyn MetadataSource> {
        match self.bar {
            Some(ref bar) => Arc::new(TrackedSource {
                inner,
                bar: bar.clone(),
            }),
            None => inner,
        }
    }

    /// Finish and clear the current progress bar
    pub fn finish_and_clear(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
        self.bar = None;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Metadata source decorator that ticks a progress bar
pub struct TrackedSource {
    inner: Arc<dyn MetadataSource>,
    bar: ProgressBar,
}

#[async_trait]
impl MetadataSource for TrackedSource {
    fn source_name(&self) -> &str {
        self.inner.source_name()
    }

    async fn fetch_package_metadata(&self, package: &str) -> Option<PackageMetadata> {
        let metadata = self.inner.fetch_package_metadata(package).await;
        self.bar.set_message(format!("Checked {}", package));
        self.bar.inc(1);
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SnapshotRegistry;

    fn source() -> Arc<dyn MetadataSource> {
        Arc::new(SnapshotRegistry::new().with_package(PackageMetadata::new("rxjs").with_version("7.8.1")))
    }

    #[test]
    fn test_progress_disabled() {
        let mut progress = Progress::disabled();
        progress.start(10, "test");
        progress.inc();
        assert!(progress.bar.is_none());
        progress.finish_and_clear();
    }

    #[test]
    fn test_progress_enabled() {
        let mut progress = Progress::new(true);
        progress.start(3, "Processing");
        progress.inc();
        progress.inc();
        assert_eq!(progress.bar.as_ref().map(|b| b.position()), Some(2));
        progress.finish_and_clear();
        assert!(progress.bar.is_none());
    }

    #[tokio::test]
    async fn test_track_without_bar_passes_through() {
        let progress = Progress::disabled();
        let tracked = progress.track(source());
        assert_eq!(tracked.source_name(), "snapshot");
        assert!(tracked.fetch_package_metadata("rxjs").await.is_some());
    }

    #[tokio::test]
    async fn test_tracked_source_ticks_per_lookup() {
        let mut progress = Progress::new(true);
        progress.start(2, "Checking dependencies");
        let tracked = progress.track(source());

        assert!(tracked.fetch_package_metadata("rxjs").await.is_some());
        assert!(tracked.fetch_package_metadata("missing").await.is_none());

        assert_eq!(progress.bar.as_ref().map(|b| b.position()), Some(2));
        progress.finish_and_clear();
    }
}
