use std::sync::Arc;

use dashmap::DashMap;
use poise::serenity_prelude::GuildId;
use songbird::tracks::TrackHandle;

use crate::services::speech::{SpeechOptions, SpeechSynthesizer};

/// Bot state shared across all commands
pub struct Data {
    /// Language and speed used for every `say`
    pub speech_options: SpeechOptions,
    /// Backend turning text into audio
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    /// Track currently streamed into each guild's voice connection
    pub now_playing: Arc<DashMap<GuildId, TrackHandle>>,
}

impl Data {
    pub fn new(speech_options: SpeechOptions, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            speech_options,
            synthesizer,
            now_playing: Arc::new(DashMap::new()),
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
