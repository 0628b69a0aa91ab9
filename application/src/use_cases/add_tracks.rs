//! Batched track addition
//!
//! The streaming service accepts at most 100 URIs per add request, so
//! resolved URIs are split into contiguous chunks and submitted one chunk at
//! a time. Submission is best effort: a failed chunk is recorded and the
//! remaining chunks are still attempted.

use crate::config::MAX_ADD_BATCH_SIZE;
use crate::ports::music_catalog::MusicCatalog;
use crate::ports::progress::{NoProgress, RunProgressNotifier};
use crate::use_cases::shared::capture;
use curator_domain::run::tool_names::ADD_ITEMS_TO_PLAYLIST;
use curator_domain::{AuthSession, RunStage, SnapshotAck, ToolError, ToolResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of submitting one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutcome {
    /// 0-based chunk position
    pub index: usize,
    /// Number of URIs in the chunk
    pub size: usize,
    pub result: ToolResult<SnapshotAck>,
}

/// Per-chunk report of a batched addition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub chunks: Vec<ChunkOutcome>,
}

impl BatchReport {
    /// Number of add calls issued
    pub fn calls(&self) -> usize {
        self.chunks.len()
    }

    /// URIs in chunks that were accepted
    pub fn added_count(&self) -> usize {
        self.chunks
            .iter()
            .filter(|c| c.result.is_success())
            .map(|c| c.size)
            .sum()
    }

    /// Errors of the failed chunks, in chunk order
    pub fn errors(&self) -> Vec<ToolError> {
        self.chunks
            .iter()
            .filter_map(|c| c.result.error().cloned())
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.chunks.iter().all(|c| c.result.is_success())
    }
}

/// Number of calls needed for `len` URIs at `batch_size` per call
pub fn batch_count(len: usize, batch_size: usize) -> usize {
    len.div_ceil(batch_size.max(1))
}

/// Submits track URIs to a playlist in fixed-size batches
pub struct BatchAdder<C: MusicCatalog + 'static> {
    catalog: Arc<C>,
    batch_size: usize,
}

impl<C: MusicCatalog + 'static> BatchAdder<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            batch_size: MAX_ADD_BATCH_SIZE,
        }
    }

    /// Batch size, clamped to 1..=100
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.clamp(1, MAX_ADD_BATCH_SIZE);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Add all URIs without progress reporting
    pub async fn add(&self, auth: &AuthSession, playlist_id: &str, uris: &[String]) -> BatchReport {
        self.add_with_progress(auth, playlist_id, uris, &NoProgress)
            .await
    }

    /// Add all URIs, reporting each chunk as a task of [`RunStage::AddTracks`]
    pub async fn add_with_progress(
        &self,
        auth: &AuthSession,
        playlist_id: &str,
        uris: &[String],
        progress: &dyn RunProgressNotifier,
    ) -> BatchReport {
        let total = batch_count(uris.len(), self.batch_size);
        let mut report = BatchReport::default();

        for (index, chunk) in uris.chunks(self.batch_size).enumerate() {
            let label = format!("batch {}/{} ({} tracks)", index + 1, total, chunk.len());
            let outcome = self
                .catalog
                .add_items_to_playlist(auth, playlist_id, chunk)
                .await;

            let result = match capture(ADD_ITEMS_TO_PLAYLIST, outcome) {
                ToolResult::Failure(mut e) => {
                    warn!("Failed to add {}; continuing with remaining batches", label);
                    e.exception = format!("{}: {}", label, e.exception);
                    ToolResult::Failure(e)
                }
                ok => ok,
            };

            progress.on_task_complete(RunStage::AddTracks, &label, result.is_success());
            report.chunks.push(ChunkOutcome {
                index,
                size: chunk.len(),
                result,
            });
        }

        info!(
            "Added {} of {} tracks in {} batches",
            report.added_count(),
            uris.len(),
            report.calls()
        );
        report
    }
}
