/// Text-to-speech synthesis through the Google Translate speech endpoint
use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tempfile::TempPath;
use thiserror::Error;
use tracing::debug;

use crate::{
    constants::{GOOGLE_TTS_ENDPOINT, TTS_CHUNK_CHARS},
    utils::text::chunk_text,
};

/// Speech error types
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("No text to speak")]
    EmptyText,

    #[error("Speech request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Speech service returned HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to write audio file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audio writer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Process-wide synthesis settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOptions {
    /// Language code, e.g. `en` or `fr`
    pub language: String,
    /// Read the text slowly
    pub slow: bool,
}

/// A synthesized audio file used for a single playback.
///
/// The file is deleted when the artifact is dropped or discarded.
#[derive(Debug)]
pub struct SpeechArtifact {
    path: TempPath,
}

impl SpeechArtifact {
    pub fn new(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now. Failures are logged and otherwise ignored.
    pub fn discard(self) {
        let shown = self.path.display().to_string();
        if let Err(e) = self.path.close() {
            debug!("Failed to delete speech file {}: {}", shown, e);
        }
    }
}

/// Backend turning text into playable audio
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        options: &SpeechOptions,
    ) -> Result<SpeechArtifact, SpeechError>;
}

/// Synthesizer backed by Google Translate's speech endpoint
pub struct GoogleTts {
    client: Client,
    endpoint: String,
}

impl GoogleTts {
    pub fn new() -> Result<Self, SpeechError> {
        Self::with_endpoint(GOOGLE_TTS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .user_agent(concat!("speve/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        index: usize,
        total: usize,
        options: &SpeechOptions,
    ) -> Result<Vec<u8>, SpeechError> {
        let query = chunk_query(chunk, index, total, options);

        let response = self.client.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(
        &self,
        text: &str,
        options: &SpeechOptions,
    ) -> Result<SpeechArtifact, SpeechError> {
        let chunks = chunk_text(text, TTS_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            audio.extend(self.fetch_chunk(chunk, index, chunks.len(), options).await?);
        }

        debug!(
            chunks = chunks.len(),
            bytes = audio.len(),
            language = %options.language,
            "Synthesized speech"
        );

        let path = tokio::task::spawn_blocking(move || write_temp_audio(&audio)).await??;
        Ok(SpeechArtifact::new(path))
    }
}

/// Query parameters for one chunk request
fn chunk_query(
    chunk: &str,
    index: usize,
    total: usize,
    options: &SpeechOptions,
) -> Vec<(&'static str, String)> {
    let speed = if options.slow { "0.3" } else { "1" };

    vec![
        ("ie", "UTF-8".to_string()),
        ("client", "tw-ob".to_string()),
        ("tl", options.language.clone()),
        ("q", chunk.to_string()),
        ("ttsspeed", speed.to_string()),
        ("total", total.to_string()),
        ("idx", index.to_string()),
        ("textlen", chunk.chars().count().to_string()),
    ]
}

fn write_temp_audio(audio: &[u8]) -> std::io::Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("speve-")
        .suffix(".mp3")
        .tempfile()?;
    file.write_all(audio)?;
    file.flush()?;
    Ok(file.into_temp_path())
}
