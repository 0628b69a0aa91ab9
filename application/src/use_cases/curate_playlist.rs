//! Curate Playlist use case
//!
//! Orchestrates a full curation run:
//!
//! 1. **Generate** — ask the language model for a title and songs
//! 2. **Identify user** — fetch the streaming-service profile
//! 3. **Create playlist** — private playlist named `"AI: " + title`
//! 4. **Resolve tracks** — search the catalog for every song
//! 5. **Add tracks** — submit resolved URIs in batches
//! 6. **Finalize** — write the summary into the [`RunState`]
//!
//! Stages 1–3 end the run on failure (there is nothing to act on). Stage 1
//! only ends it when the call itself fails: an unparseable answer is recorded
//! and the run continues with no songs. Stages 4 and 5 record every failure
//! and keep going. The returned [`RunState`] always carries every error seen.

use crate::config::CurationParams;
use crate::ports::llm_gateway::ChatCompletionGateway;
use crate::ports::music_catalog::{MusicCatalog, NewPlaylist};
use crate::ports::progress::{NoProgress, RunProgressNotifier};
use crate::use_cases::add_tracks::{BatchAdder, batch_count};
use crate::use_cases::resolve_track::{TrackResolution, TrackResolver};
use crate::use_cases::shared::{capture, record};
use curator_domain::run::tool_names::{
    ADD_ITEMS_TO_PLAYLIST, CREATE_CHAT_COMPLETION, CREATE_PLAYLIST, GET_CURRENT_USER_PROFILE,
    SEARCH_FOR_ITEM,
};
use curator_domain::{
    AuthSession, CurationRequest, DomainError, ErrorKind, GeneratedPlaylist, PromptTemplate,
    RunStage, RunState, ToolError, ToolResult, parse_generated_playlist,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for running a playlist curation
pub struct CuratePlaylistUseCase<L, C>
where
    L: ChatCompletionGateway + 'static,
    C: MusicCatalog + 'static,
{
    llm: Arc<L>,
    catalog: Arc<C>,
    resolver: TrackResolver<C>,
    adder: BatchAdder<C>,
    params: CurationParams,
}

impl<L, C> CuratePlaylistUseCase<L, C>
where
    L: ChatCompletionGateway + 'static,
    C: MusicCatalog + 'static,
{
    pub fn new(llm: Arc<L>, catalog: Arc<C>) -> Self {
        Self::with_params(llm, catalog, CurationParams::default())
    }

    pub fn with_params(llm: Arc<L>, catalog: Arc<C>, params: CurationParams) -> Self {
        let resolver = TrackResolver::new(Arc::clone(&catalog))
            .with_item_type(params.search_item_type.clone());
        let adder = BatchAdder::new(Arc::clone(&catalog)).with_batch_size(params.batch_size);
        Self {
            llm,
            catalog,
            resolver,
            adder,
            params,
        }
    }

    /// Validate the inputs and run without progress reporting.
    ///
    /// Invalid input (blank description, limit outside 1–50) is rejected
    /// before any remote call is made.
    pub async fn run(
        &self,
        description: &str,
        limit: usize,
        auth: &AuthSession,
    ) -> Result<RunState, DomainError> {
        let request = CurationRequest::new(description, limit)?;
        Ok(self.execute(&request, auth).await)
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, request: &CurationRequest, auth: &AuthSession) -> RunState {
        self.execute_with_progress(request, auth, &NoProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: &CurationRequest,
        auth: &AuthSession,
        progress: &dyn RunProgressNotifier,
    ) -> RunState {
        let mut state = RunState::new(request.description(), request.limit());
        info!("Starting curation run: {}", request);

        // Stage 1: Generate
        let Some(generated) = self.stage_generate(request, &mut state, progress).await else {
            return state;
        };
        state.playlist_title = Some(generated.title_or(request.description()));
        state.songs = generated.songs;

        // Stage 2: Identify user
        let Some(user_id) = self.stage_identify_user(auth, &mut state, progress).await else {
            return state;
        };

        // Stage 3: Create playlist
        let Some(playlist_id) = self
            .stage_create_playlist(&user_id, auth, &mut state, progress)
            .await
        else {
            return state;
        };

        // Stage 4: Resolve tracks
        let uris = self.stage_resolve_tracks(auth, &mut state, progress).await;
        state.resolved_track_count = uris.len();

        // Stage 5: Add tracks
        self.stage_add_tracks(&playlist_id, &uris, auth, &mut state, progress)
            .await;

        // Stage 6: Finalize
        state.finalize();
        progress.on_stage_start(RunStage::Finalize, 0);
        progress.on_stage_complete(RunStage::Finalize, true);

        info!(
            "Curation run finished: {} of {} songs resolved, {} errors/warnings",
            state.resolved_track_count,
            state.songs.len(),
            state.errors.len()
        );
        state
    }

    /// Stage 1. Returns `None` only when the completion call failed.
    async fn stage_generate(
        &self,
        request: &CurationRequest,
        state: &mut RunState,
        progress: &dyn RunProgressNotifier,
    ) -> Option<GeneratedPlaylist> {
        state.enter(RunStage::Generate);
        progress.on_stage_start(RunStage::Generate, 1);
        debug!("Requesting songs from {}", self.llm.model_name());

        let messages = PromptTemplate::curator_messages(request.description(), request.limit());
        let completion = self.llm.create_chat_completion(&messages).await;

        let content = match capture(CREATE_CHAT_COMPLETION, completion) {
            ToolResult::Success(content) => content,
            ToolResult::Failure(e) => {
                progress.on_task_complete(RunStage::Generate, self.llm.model_name(), false);
                record(state, progress, e);
                progress.on_stage_complete(RunStage::Generate, false);
                return None;
            }
        };
        progress.on_task_complete(RunStage::Generate, self.llm.model_name(), true);

        let generated = match parse_generated_playlist(&content, request.limit()) {
            Ok(generated) => generated,
            Err(e) => {
                warn!("Could not parse model response: {}", e);
                record(
                    state,
                    progress,
                    ToolError::malformed_response(CREATE_CHAT_COMPLETION, e.to_string())
                        .with_trace(content),
                );
                GeneratedPlaylist::default()
            }
        };

        info!(
            "Model proposed {} songs (requested {})",
            generated.songs.len(),
            request.limit()
        );
        progress.on_stage_complete(RunStage::Generate, true);
        Some(generated)
    }

    /// Stage 2. Returns the user id, or `None` when the run must stop.
    async fn stage_identify_user(
        &self,
        auth: &AuthSession,
        state: &mut RunState,
        progress: &dyn RunProgressNotifier,
    ) -> Option<String> {
        state.enter(RunStage::IdentifyUser);
        progress.on_stage_start(RunStage::IdentifyUser, 1);

        let outcome = capture(
            GET_CURRENT_USER_PROFILE,
            self.catalog.current_user_profile(auth).await,
        )
        .into_result()
        .and_then(|profile| {
            profile
                .id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ToolError::missing_identifier(GET_CURRENT_USER_PROFILE, "user"))
        });

        self.finish_fatal_stage(RunStage::IdentifyUser, outcome, state, progress)
    }

    /// Stage 3. Returns the playlist id, or `None` when the run must stop.
    async fn stage_create_playlist(
        &self,
        user_id: &str,
        auth: &AuthSession,
        state: &mut RunState,
        progress: &dyn RunProgressNotifier,
    ) -> Option<String> {
        state.enter(RunStage::CreatePlaylist);
        progress.on_stage_start(RunStage::CreatePlaylist, 1);

        let title = state
            .playlist_title
            .clone()
            .unwrap_or_else(|| state.description.clone());
        let naming = &self.params.naming;
        let new_playlist =
            NewPlaylist::private(naming.name_for(&title), naming.description_for(&state.description));
        state.playlist_name = Some(new_playlist.name.clone());

        let outcome = capture(
            CREATE_PLAYLIST,
            self.catalog.create_playlist(auth, user_id, &new_playlist).await,
        )
        .into_result()
        .and_then(|created| {
            if let Some(url) = created.web_url() {
                info!("Playlist available at {}", url);
            }
            created
                .id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ToolError::missing_identifier(CREATE_PLAYLIST, "playlist"))
        });

        let playlist_id = self.finish_fatal_stage(RunStage::CreatePlaylist, outcome, state, progress)?;
        info!("Created playlist {:?} ({})", new_playlist.name, playlist_id);
        state.playlist_id = Some(playlist_id.clone());
        Some(playlist_id)
    }

    /// Stage 4. Every song is attempted; failures and misses are recorded.
    async fn stage_resolve_tracks(
        &self,
        auth: &AuthSession,
        state: &mut RunState,
        progress: &dyn RunProgressNotifier,
    ) -> Vec<String> {
        state.enter(RunStage::ResolveTracks);
        progress.on_stage_start(RunStage::ResolveTracks, state.songs.len());

        let songs = state.songs.clone();
        let mut uris = Vec::with_capacity(songs.len());

        for song in &songs {
            let label = song.to_string();
            match self.resolver.resolve(song, auth).await {
                Ok(TrackResolution::Found(uri)) => {
                    progress.on_task_complete(RunStage::ResolveTracks, &label, true);
                    uris.push(uri);
                }
                Ok(TrackResolution::NotFound) => {
                    warn!("No track found for: {}", label);
                    progress.on_task_complete(RunStage::ResolveTracks, &label, false);
                    record(
                        state,
                        progress,
                        ToolError::not_found(SEARCH_FOR_ITEM, "no track uri found").with_song(&label),
                    );
                }
                Err(e) => {
                    warn!("Search failed for {}: {}", label, e);
                    progress.on_task_complete(RunStage::ResolveTracks, &label, false);
                    record(state, progress, e.to_tool_error(SEARCH_FOR_ITEM).with_song(&label));
                }
            }
        }

        info!(
            "{} track URIs resolved out of {} requested",
            uris.len(),
            songs.len()
        );
        progress.on_stage_complete(RunStage::ResolveTracks, uris.len() == songs.len());
        uris
    }

    /// Stage 5. Skipped with a warning when nothing was resolved.
    async fn stage_add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
        auth: &AuthSession,
        state: &mut RunState,
        progress: &dyn RunProgressNotifier,
    ) {
        state.enter(RunStage::AddTracks);
        progress.on_stage_start(
            RunStage::AddTracks,
            batch_count(uris.len(), self.adder.batch_size()),
        );

        if uris.is_empty() {
            warn!("No track URIs to add to playlist");
            record(
                state,
                progress,
                ToolError::new(
                    ADD_ITEMS_TO_PLAYLIST,
                    ErrorKind::NotFound,
                    "no track uris to add",
                )
                .as_warning(),
            );
            progress.on_stage_complete(RunStage::AddTracks, false);
            return;
        }

        let report = self
            .adder
            .add_with_progress(auth, playlist_id, uris, progress)
            .await;
        for error in report.errors() {
            record(state, progress, error);
        }
        progress.on_stage_complete(RunStage::AddTracks, report.all_succeeded());
    }

    /// Record a fatal stage's error (if any) and report completion.
    fn finish_fatal_stage(
        &self,
        stage: RunStage,
        outcome: Result<String, ToolError>,
        state: &mut RunState,
        progress: &dyn RunProgressNotifier,
    ) -> Option<String> {
        match outcome {
            Ok(id) => {
                progress.on_task_complete(stage, stage.display_name(), true);
                progress.on_stage_complete(stage, true);
                Some(id)
            }
            Err(e) => {
                warn!("{} failed, ending run: {}", stage, e);
                progress.on_task_complete(stage, stage.display_name(), false);
                record(state, progress, e);
                progress.on_stage_complete(stage, false);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::shared::test_support::{MockCatalog, MockChat, auth};
    use curator_domain::{CreatedPlaylist, Severity, UserProfile};
    use std::sync::Mutex;

    const RAIN: &str = r#"{"playlist_title":"Rainy Mood","songs":[{"title":"A","artist":"X"},{"title":"B","artist":"Y"},{"title":"C","artist":"Z"}]}"#;

    fn use_case(
        chat: MockChat,
        catalog: MockCatalog,
    ) -> (
        CuratePlaylistUseCase<MockChat, MockCatalog>,
        Arc<MockChat>,
        Arc<MockCatalog>,
    ) {
        let chat = Arc::new(chat);
        let catalog = Arc::new(catalog);
        (
            CuratePlaylistUseCase::new(Arc::clone(&chat), Arc::clone(&catalog)),
            chat,
            catalog,
        )
    }

    fn rain_request() -> CurationRequest {
        CurationRequest::new("songs about rain", 3).unwrap()
    }

    #[tokio::test]
    async fn test_rain_scenario_one_song_not_found() {
        let catalog = MockCatalog::new()
            .with_hit("A", "spotify:track:a")
            .with_hit("C", "spotify:track:c");
        let (uc, chat, catalog) = use_case(MockChat::replying(RAIN), catalog);

        let state = uc.execute(&rain_request(), &auth()).await;

        assert_eq!(chat.call_count(), 1);
        assert_eq!(state.songs.len(), 3);
        assert_eq!(state.resolved_track_count, 2);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].kind, ErrorKind::NotFound);
        assert_eq!(state.errors[0].tool, "search_for_item");
        assert_eq!(state.errors[0].song.as_deref(), Some("B — Y"));
        assert_eq!(state.errors[0].severity, Severity::Warning);

        assert_eq!(
            catalog.added(),
            vec![vec![
                "spotify:track:a".to_string(),
                "spotify:track:c".to_string()
            ]]
        );

        let summary = state.summary.as_ref().expect("run should finalize");
        assert_eq!(summary.playlist_name, "AI: Rainy Mood");
        assert_eq!(summary.playlist_description, "songs about rain");
        assert_eq!(summary.playlist_id, "playlist-1");
        assert_eq!(summary.resolved_track_count, 2);
        assert_eq!(state.stage, RunStage::Finalize);
    }

    #[tokio::test]
    async fn test_llm_failure_ends_run_before_catalog_calls() {
        let (uc, _chat, catalog) = use_case(
            MockChat::failing(GatewayError::ConnectionError("network down".into())),
            MockCatalog::new(),
        );

        let state = uc.execute(&rain_request(), &auth()).await;

        assert!(!state.is_finalized());
        assert!(state.songs.is_empty());
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].tool, "create_chat_completion");
        assert_eq!(state.errors[0].kind, ErrorKind::RemoteCallFailed);
        assert_eq!(state.stage, RunStage::Generate);
        assert!(catalog.log().is_empty(), "stages 2-5 must not run");
    }

    #[tokio::test]
    async fn test_profile_without_id_ends_run_before_create() {
        let catalog = MockCatalog::new().with_profile(Ok(UserProfile {
            id: None,
            display_name: Some("Ana".into()),
        }));
        let (uc, _chat, catalog) = use_case(MockChat::replying(RAIN), catalog);

        let state = uc.execute(&rain_request(), &auth()).await;

        assert_eq!(catalog.log(), vec!["profile".to_string()]);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].kind, ErrorKind::MissingIdentifier);
        assert_eq!(state.errors[0].tool, "get_current_user_profile");
        assert_eq!(state.stage, RunStage::IdentifyUser);
        assert!(!state.is_finalized());
        // Songs from stage 1 remain visible
        assert_eq!(state.songs.len(), 3);
    }

    #[tokio::test]
    async fn test_profile_call_failure_ends_run() {
        let catalog = MockCatalog::new()
            .with_profile(Err(GatewayError::Unauthorized("token expired".into())));
        let (uc, _chat, catalog) = use_case(MockChat::replying(RAIN), catalog);

        let state = uc.execute(&rain_request(), &auth()).await;

        assert_eq!(catalog.log(), vec!["profile".to_string()]);
        assert_eq!(state.errors[0].kind, ErrorKind::RemoteCallFailed);
        assert!(state.errors[0].trace.is_some());
    }

    #[tokio::test]
    async fn test_create_playlist_failures_end_run() {
        for created in [
            Ok(CreatedPlaylist::default()),
            Err(GatewayError::RequestFailed {
                status: 403,
                message: "forbidden".into(),
            }),
        ] {
            let catalog = MockCatalog::new().with_created(created).with_hit("A", "u:a");
            let (uc, _chat, catalog) = use_case(MockChat::replying(RAIN), catalog);

            let state = uc.execute(&rain_request(), &auth()).await;

            assert_eq!(state.stage, RunStage::CreatePlaylist);
            assert_eq!(state.errors.len(), 1);
            assert_eq!(state.errors[0].tool, "create_playlist");
            assert!(!state.is_finalized());
            assert!(state.playlist_id.is_none());
            assert!(
                catalog.log().iter().all(|c| !c.starts_with("search:")),
                "no searches after a failed create"
            );
        }
    }

    #[tokio::test]
    async fn test_search_failure_does_not_stop_other_songs() {
        let catalog = MockCatalog::new()
            .with_search_error("A", GatewayError::Timeout)
            .with_hit("B", "u:b")
            .with_hit("C", "u:c");
        let (uc, _chat, catalog) = use_case(MockChat::replying(RAIN), catalog);

        let state = uc.execute(&rain_request(), &auth()).await;

        assert_eq!(state.resolved_track_count, 2);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].kind, ErrorKind::RemoteCallFailed);
        assert_eq!(state.errors[0].song.as_deref(), Some("A — X"));
        assert_eq!(catalog.added(), vec![vec!["u:b".to_string(), "u:c".to_string()]]);
        assert!(state.is_finalized());
    }

    #[tokio::test]
    async fn test_nothing_resolved_skips_add_with_warning() {
        let (uc, _chat, catalog) = use_case(MockChat::replying(RAIN), MockCatalog::new());

        let state = uc.execute(&rain_request(), &auth()).await;

        assert!(catalog.added().is_empty());
        assert_eq!(state.resolved_track_count, 0);
        // three not-found entries plus the skipped add
        assert_eq!(state.errors.len(), 4);
        let last = state.errors.last().unwrap();
        assert_eq!(last.tool, "add_items_to_playlist");
        assert!(last.is_warning());
        assert!(state.is_finalized());
    }

    #[tokio::test]
    async fn test_malformed_completion_continues_with_no_songs() {
        let (uc, _chat, catalog) = use_case(
            MockChat::replying("Here are some great songs about rain!"),
            MockCatalog::new(),
        );

        let state = uc.execute(&rain_request(), &auth()).await;

        assert!(state.songs.is_empty());
        assert_eq!(state.errors[0].kind, ErrorKind::MalformedResponse);
        assert_eq!(state.errors[0].tool, "create_chat_completion");
        assert_eq!(state.playlist_name.as_deref(), Some("AI: songs about rain"));
        assert_eq!(
            catalog.log(),
            vec!["profile".to_string(), "create:AI: songs about rain".to_string()]
        );
        assert!(state.is_finalized());
    }

    #[tokio::test]
    async fn test_fewer_songs_than_requested_and_malformed_items() {
        let raw = r#"{"playlist_title":"Short","songs":[{"title":"A","artist":"X"},{"title":"no artist"}]}"#;
        let catalog = MockCatalog::new().with_hit("A", "u:a");
        let (uc, _chat, _catalog) = use_case(MockChat::replying(raw), catalog);

        let request = CurationRequest::new("short list", 10).unwrap();
        let state = uc.execute(&request, &auth()).await;

        assert_eq!(state.songs.len(), 1);
        assert_eq!(state.resolved_track_count, 1);
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_long_title_truncated_in_playlist_name() {
        let title = "T".repeat(60);
        let raw = format!(r#"{{"playlist_title":"{}","songs":[]}}"#, title);
        let (uc, _chat, catalog) = use_case(MockChat::replying(&raw), MockCatalog::new());

        let state = uc.execute(&rain_request(), &auth()).await;

        let expected = format!("AI: {}", "T".repeat(40));
        assert_eq!(state.playlist_name.as_deref(), Some(expected.as_str()));
        let (user, created) = catalog.created_with.lock().unwrap().clone().unwrap();
        assert_eq!(user, "user-1");
        assert_eq!(created.name, expected);
        assert!(!created.public);
    }

    #[tokio::test]
    async fn test_prompt_embeds_description_and_limit() {
        let (uc, chat, _catalog) = use_case(MockChat::replying(RAIN), MockCatalog::new());
        uc.execute(&rain_request(), &auth()).await;

        let calls = chat.calls.lock().unwrap();
        let user_prompt = &calls[0][1].content;
        assert!(user_prompt.contains("songs about rain"));
        assert!(user_prompt.contains("up to 3 songs"));
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_input_without_calls() {
        let (uc, chat, catalog) = use_case(MockChat::replying(RAIN), MockCatalog::new());

        assert!(uc.run("   ", 3, &auth()).await.is_err());
        assert!(uc.run("rain", 0, &auth()).await.is_err());
        assert!(uc.run("rain", 51, &auth()).await.is_err());
        assert_eq!(chat.call_count(), 0);
        assert!(catalog.log().is_empty());

        let state = uc.run("songs about rain", 3, &auth()).await.unwrap();
        assert_eq!(state.limit, 3);
    }

    #[tokio::test]
    async fn test_custom_batch_size_splits_additions() {
        let raw = r#"{"playlist_title":"Three","songs":[{"title":"A","artist":"X"},{"title":"B","artist":"Y"},{"title":"C","artist":"Z"}]}"#;
        let chat = Arc::new(MockChat::replying(raw));
        let catalog = Arc::new(
            MockCatalog::new()
                .with_hit("A", "u:a")
                .with_hit("B", "u:b")
                .with_hit("C", "u:c")
                .failing_add_call(0),
        );
        let uc = CuratePlaylistUseCase::with_params(
            chat,
            Arc::clone(&catalog),
            CurationParams::default().with_batch_size(2),
        );

        let state = uc.execute(&rain_request(), &auth()).await;

        assert_eq!(catalog.added().len(), 2);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].tool, "add_items_to_playlist");
        assert!(state.is_finalized());
    }

    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RunProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: RunStage, total_tasks: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}:{}", stage.as_str(), total_tasks));
        }

        fn on_task_complete(&self, _stage: RunStage, _label: &str, _success: bool) {}

        fn on_stage_complete(&self, stage: RunStage, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("end:{}:{}", stage.as_str(), success));
        }

        fn on_error_recorded(&self, error: &ToolError) {
            self.events
                .lock()
                .unwrap()
                .push(format!("error:{}", error.tool));
        }
    }

    #[tokio::test]
    async fn test_progress_sees_stages_in_order() {
        let catalog = MockCatalog::new()
            .with_hit("A", "u:a")
            .with_hit("C", "u:c");
        let (uc, _chat, _catalog) = use_case(MockChat::replying(RAIN), catalog);
        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };

        uc.execute_with_progress(&rain_request(), &auth(), &progress)
            .await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "start:generate:1",
                "end:generate:true",
                "start:identify_user:1",
                "end:identify_user:true",
                "start:create_playlist:1",
                "end:create_playlist:true",
                "start:resolve_tracks:3",
                "error:search_for_item",
                "end:resolve_tracks:false",
                "start:add_tracks:1",
                "end:add_tracks:true",
                "start:finalize:0",
                "end:finalize:true",
            ]
        );
    }
}
