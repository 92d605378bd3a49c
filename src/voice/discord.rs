use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use poise::serenity_prelude::{ChannelId, GuildId};
use songbird::{
    Call, Songbird,
    input::File as FileInput,
    tracks::{PlayMode, TrackHandle},
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    models::{Context, Error},
    services::{
        invocation::{Invocation, PlayOutcome, VoiceChannel, VoiceConnection},
        speech::SpeechArtifact,
    },
    utils::messages::build_context_error,
    utils::validation::{ValidationError, require_guild},
};

use super::cleanup::{ArtifactCleanup, attach_cleanup};

/// A command invocation inside a guild, backed by the songbird manager
pub struct DiscordInvocation<'a> {
    ctx: Context<'a>,
    guild_id: GuildId,
    manager: Arc<Songbird>,
}

impl<'a> DiscordInvocation<'a> {
    pub async fn new(ctx: Context<'a>) -> Result<Self, ValidationError> {
        let guild_id = require_guild(ctx.guild_id())?;
        let manager = songbird::get(ctx.serenity_context())
            .await
            .ok_or(ValidationError::VoiceNotInitialized)?;

        Ok(Self {
            ctx,
            guild_id,
            manager,
        })
    }

    /// Build the invocation, replying with an error when used outside a server
    pub async fn for_command(ctx: Context<'a>) -> Result<Option<Self>, Error> {
        match Self::new(ctx).await {
            Ok(invocation) => Ok(Some(invocation)),
            Err(ValidationError::NotInGuild) => {
                ctx.say(build_context_error("in a server")).await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn connection(&self, call: Arc<Mutex<Call>>) -> SongbirdConnection {
        SongbirdConnection {
            guild_id: self.guild_id,
            manager: Arc::clone(&self.manager),
            call,
            now_playing: Arc::clone(&self.ctx.data().now_playing),
        }
    }
}

#[async_trait]
impl<'a> Invocation for DiscordInvocation<'a> {
    type Connection = SongbirdConnection;

    async fn caller_voice_channel(&self) -> Option<VoiceChannel> {
        let channel_id = {
            let guild = self.ctx.guild()?;
            guild.voice_states.get(&self.ctx.author().id)?.channel_id?
        };

        let name = match channel_id.name(self.ctx.serenity_context()).await {
            Ok(name) => name,
            Err(e) => {
                debug!("Failed to resolve name of channel {}: {}", channel_id, e);
                channel_id.to_string()
            }
        };

        Some(VoiceChannel {
            id: channel_id,
            name,
        })
    }

    async fn voice_connection(&self) -> Option<SongbirdConnection> {
        self.manager
            .get(self.guild_id)
            .map(|call| self.connection(call))
    }

    async fn connect(&self, channel: &VoiceChannel) -> Result<SongbirdConnection, Error> {
        let call = self.manager.join(self.guild_id, channel.id).await?;
        info!(
            "Connected to voice channel {} in guild {}",
            channel.id, self.guild_id
        );
        Ok(self.connection(call))
    }

    async fn reply(&self, text: String) -> Result<(), Error> {
        self.ctx.say(text).await?;
        Ok(())
    }
}

/// Songbird call for one guild
pub struct SongbirdConnection {
    guild_id: GuildId,
    manager: Arc<Songbird>,
    call: Arc<Mutex<Call>>,
    now_playing: Arc<DashMap<GuildId, TrackHandle>>,
}

impl SongbirdConnection {
    fn now_playing_handle(&self) -> Option<TrackHandle> {
        self.now_playing
            .get(&self.guild_id)
            .map(|entry| entry.value().clone())
    }
}

/// A missing or finished track counts as idle
async fn track_is_playing(handle: Option<TrackHandle>) -> bool {
    let Some(handle) = handle else {
        return false;
    };

    match handle.get_info().await {
        Ok(state) => matches!(state.playing, PlayMode::Play),
        Err(_) => false,
    }
}

#[async_trait]
impl VoiceConnection for SongbirdConnection {
    async fn channel_id(&self) -> Option<ChannelId> {
        let current = self.call.lock().await.current_channel()?;
        Some(ChannelId::new(current.0.get()))
    }

    async fn move_to(&self, channel: &VoiceChannel) -> Result<(), Error> {
        self.manager.join(self.guild_id, channel.id).await?;
        info!(
            "Moved to voice channel {} in guild {}",
            channel.id, self.guild_id
        );
        Ok(())
    }

    async fn is_playing(&self) -> bool {
        track_is_playing(self.now_playing_handle()).await
    }

    async fn play(&self, artifact: SpeechArtifact) -> Result<PlayOutcome, Error> {
        // Held until the new track is recorded so concurrent plays see it
        let mut call = self.call.lock().await;

        if track_is_playing(self.now_playing_handle()).await {
            debug!("Refusing playback in guild {}: already playing", self.guild_id);
            return Ok(PlayOutcome::Busy);
        }

        let input = FileInput::new(artifact.path().to_path_buf());
        let handle = call.play_input(input.into());
        self.now_playing.insert(self.guild_id, handle.clone());
        drop(call);

        let cleanup = ArtifactCleanup::new(artifact, self.guild_id, Arc::clone(&self.now_playing));
        attach_cleanup(cleanup, |event, action| handle.add_event(event, action));

        Ok(PlayOutcome::Started)
    }

    async fn disconnect(&self) -> Result<(), Error> {
        self.manager.remove(self.guild_id).await?;
        self.now_playing.remove(&self.guild_id);
        info!("Disconnected from voice in guild {}", self.guild_id);
        Ok(())
    }
}
