/// Per-invocation context handed to the voice commands
use async_trait::async_trait;
use poise::serenity_prelude::ChannelId;

use crate::{models::Error, services::speech::SpeechArtifact};

/// A voice channel the caller currently occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannel {
    pub id: ChannelId,
    pub name: String,
}

/// What a command knows about the user who invoked it
#[async_trait]
pub trait Invocation: Send + Sync {
    type Connection: VoiceConnection;

    /// The voice channel the caller is in, if any
    async fn caller_voice_channel(&self) -> Option<VoiceChannel>;

    /// The bot's existing voice connection for this guild, if any
    async fn voice_connection(&self) -> Option<Self::Connection>;

    /// Open a voice connection to `channel`
    async fn connect(&self, channel: &VoiceChannel) -> Result<Self::Connection, Error>;

    /// Send a message back to where the command came from
    async fn reply(&self, text: String) -> Result<(), Error>;
}

/// Result of asking a connection to start playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    /// Another track was still playing; nothing new was started
    Busy,
}

/// A live voice session in one guild
#[async_trait]
pub trait VoiceConnection: Send + Sync {
    /// Channel the session is bound to, `None` while not connected
    async fn channel_id(&self) -> Option<ChannelId>;

    async fn move_to(&self, channel: &VoiceChannel) -> Result<(), Error>;

    /// Whether a track is still being streamed
    async fn is_playing(&self) -> bool;

    /// Start streaming `artifact` unless a track is already playing. The
    /// busy check and the start are atomic per connection. The artifact is
    /// removed after playback ends or fails, or immediately when busy.
    async fn play(&self, artifact: SpeechArtifact) -> Result<PlayOutcome, Error>;

    async fn disconnect(&self) -> Result<(), Error>;
}
