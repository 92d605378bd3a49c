use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashmap::DashMap;
use poise::serenity_prelude::GuildId;
use songbird::{
    Event, EventContext, EventHandler as VoiceEventHandler, TrackEvent, tracks::TrackHandle,
};
use tracing::warn;

use crate::services::speech::SpeechArtifact;

/// Removes a speech file once its track stops, whether it finished or failed.
///
/// Registered for both `TrackEvent::End` and `TrackEvent::Error`; whichever
/// fires first deletes the file.
#[derive(Clone)]
pub struct ArtifactCleanup {
    artifact: Arc<Mutex<Option<SpeechArtifact>>>,
    guild_id: GuildId,
    now_playing: Arc<DashMap<GuildId, TrackHandle>>,
}

impl ArtifactCleanup {
    pub fn new(
        artifact: SpeechArtifact,
        guild_id: GuildId,
        now_playing: Arc<DashMap<GuildId, TrackHandle>>,
    ) -> Self {
        Self {
            artifact: Arc::new(Mutex::new(Some(artifact))),
            guild_id,
            now_playing,
        }
    }

    /// Delete the file if it has not been deleted yet. Returns whether this
    /// call did the deletion.
    pub fn release(&self) -> bool {
        let artifact = match self.artifact.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match artifact {
            Some(artifact) => {
                artifact.discard();
                true
            }
            None => false,
        }
    }

    fn forget_track(&self, track: &TrackHandle) {
        let uuid = track.uuid();
        self.now_playing
            .remove_if(&self.guild_id, |_, current| current.uuid() == uuid);
    }
}

/// Register `cleanup` for a track's End and Error events.
///
/// Registration failures are logged, not returned: playback has already
/// started. If no registration holds a clone, dropping `cleanup` deletes the
/// file. Returns whether both events were registered.
pub fn attach_cleanup<E: std::fmt::Display>(
    cleanup: ArtifactCleanup,
    mut add_event: impl FnMut(Event, ArtifactCleanup) -> Result<(), E>,
) -> bool {
    let mut attached = true;

    for event in [TrackEvent::End, TrackEvent::Error] {
        if let Err(e) = add_event(Event::Track(event), cleanup.clone()) {
            warn!("Failed to register speech file cleanup: {}", e);
            attached = false;
        }
    }

    attached
}

#[async_trait]
impl VoiceEventHandler for ArtifactCleanup {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::Track(tracks) = ctx {
            for (_, handle) in tracks.iter() {
                self.forget_track(handle);
            }
        }

        self.release();
        Some(Event::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> (SpeechArtifact, std::path::PathBuf) {
        let file = tempfile::Builder::new().suffix(".mp3").tempfile().unwrap();
        let artifact = SpeechArtifact::new(file.into_temp_path());
        let path = artifact.path().to_path_buf();
        (artifact, path)
    }

    #[test]
    fn test_release_deletes_once() {
        let (artifact, path) = artifact();
        let cleanup = ArtifactCleanup::new(artifact, GuildId::new(1), Arc::new(DashMap::new()));
        let on_error = cleanup.clone();

        assert!(path.exists());
        assert!(cleanup.release());
        assert!(!path.exists());
        assert!(!on_error.release());
    }

    #[test]
    fn test_release_swallows_missing_file() {
        let (artifact, path) = artifact();
        let cleanup = ArtifactCleanup::new(artifact, GuildId::new(1), Arc::new(DashMap::new()));

        std::fs::remove_file(&path).unwrap();
        assert!(cleanup.release());
    }

    #[test]
    fn test_attach_cleanup_registers_end_and_error() {
        let (artifact, path) = artifact();
        let cleanup = ArtifactCleanup::new(artifact, GuildId::new(1), Arc::new(DashMap::new()));
        let mut registered = Vec::new();

        let attached = attach_cleanup(cleanup, |event, action| {
            registered.push((event, action));
            Ok::<(), String>(())
        });

        assert!(attached);
        assert_eq!(registered.len(), 2);
        assert!(path.exists(), "file stays while handlers are registered");

        registered.clear();
        assert!(!path.exists());
    }

    #[test]
    fn test_attach_cleanup_failure_is_not_fatal() {
        let (artifact, path) = artifact();
        let cleanup = ArtifactCleanup::new(artifact, GuildId::new(1), Arc::new(DashMap::new()));

        let attached = attach_cleanup(cleanup, |_, _| Err("track already ended"));

        assert!(!attached);
        assert!(!path.exists(), "unregistered cleanup deletes the file on drop");
    }

    #[test]
    fn test_dropping_all_handlers_deletes_file() {
        let (artifact, path) = artifact();
        let cleanup = ArtifactCleanup::new(artifact, GuildId::new(1), Arc::new(DashMap::new()));
        let on_error = cleanup.clone();

        drop(cleanup);
        assert!(path.exists());
        drop(on_error);
        assert!(!path.exists());
    }
}
