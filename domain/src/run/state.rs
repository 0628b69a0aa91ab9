//! Run state — everything a single curation run produced

use crate::playlist::entities::PlaylistSummary;
use crate::run::result::ToolError;
use crate::song::entities::Song;
use serde::{Deserialize, Serialize};

/// Stage of a curation run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStage {
    /// Ask the language model for a title and songs
    Generate,
    /// Look up the streaming-service user
    IdentifyUser,
    /// Create the (empty) playlist
    CreatePlaylist,
    /// Search the catalog for each song
    ResolveTracks,
    /// Add resolved tracks in batches
    AddTracks,
    /// Summary written
    Finalize,
}

impl RunStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStage::Generate => "generate",
            RunStage::IdentifyUser => "identify_user",
            RunStage::CreatePlaylist => "create_playlist",
            RunStage::ResolveTracks => "resolve_tracks",
            RunStage::AddTracks => "add_tracks",
            RunStage::Finalize => "finalize",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RunStage::Generate => "Generate Songs",
            RunStage::IdentifyUser => "Identify User",
            RunStage::CreatePlaylist => "Create Playlist",
            RunStage::ResolveTracks => "Resolve Tracks",
            RunStage::AddTracks => "Add Tracks",
            RunStage::Finalize => "Finalize",
        }
    }

    /// 1-based position in the run
    pub fn number(&self) -> usize {
        *self as usize + 1
    }
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Accumulated state of one run (Entity)
///
/// Created fresh for every run and handed back to the caller, who keeps it
/// for display until the next run replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Free text the user asked for
    pub description: String,
    /// Number of songs requested
    pub limit: usize,
    /// Title suggested by the model (or the fallback)
    pub playlist_title: Option<String>,
    /// Display name used when creating the playlist
    pub playlist_name: Option<String>,
    pub songs: Vec<Song>,
    pub resolved_track_count: usize,
    pub playlist_id: Option<String>,
    /// Every error and warning, in the order encountered
    pub errors: Vec<ToolError>,
    /// Last stage that was entered
    pub stage: RunStage,
    /// Written by the finalize stage
    pub summary: Option<PlaylistSummary>,
}

impl RunState {
    pub fn new(description: impl Into<String>, limit: usize) -> Self {
        Self {
            description: description.into(),
            limit,
            playlist_title: None,
            playlist_name: None,
            songs: Vec::new(),
            resolved_track_count: 0,
            playlist_id: None,
            errors: Vec::new(),
            stage: RunStage::Generate,
            summary: None,
        }
    }

    pub fn enter(&mut self, stage: RunStage) {
        self.stage = stage;
    }

    pub fn record(&mut self, error: ToolError) {
        self.errors.push(error);
    }

    pub fn is_finalized(&self) -> bool {
        self.summary.is_some()
    }

    /// Errors excluding warnings
    pub fn hard_errors(&self) -> impl Iterator<Item = &ToolError> {
        self.errors.iter().filter(|e| !e.is_warning())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ToolError> {
        self.errors.iter().filter(|e| e.is_warning())
    }

    /// Write the summary from the current state.
    ///
    /// Does nothing unless a playlist was created.
    pub fn finalize(&mut self) {
        let (Some(name), Some(id)) = (&self.playlist_name, &self.playlist_id) else {
            return;
        };
        self.summary = Some(PlaylistSummary {
            playlist_name: name.clone(),
            playlist_description: self.description.clone(),
            songs: self.songs.clone(),
            resolved_track_count: self.resolved_track_count,
            playlist_id: id.clone(),
        });
        self.stage = RunStage::Finalize;
    }
}
