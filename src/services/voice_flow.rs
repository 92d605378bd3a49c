/// Voice and speech command flows, independent of the chat platform
use tracing::{info, warn};

use crate::{
    constants::{
        ALREADY_SPEAKING, BOT_NOT_IN_VOICE, NEED_VOICE_CHANNEL, NOT_CONNECTED_REPLY, SPEECH_FAILED,
    },
    models::Error,
    services::{
        invocation::{Invocation, PlayOutcome, VoiceConnection},
        speech::{SpeechOptions, SpeechSynthesizer},
    },
    utils::messages::{build_joined, format_error},
};

/// Speak `text` in the caller's voice channel.
///
/// Connects, or moves an existing connection, to the caller's channel first.
/// Refuses while something is already playing.
pub async fn speak<I: Invocation>(
    invocation: &I,
    synthesizer: &dyn SpeechSynthesizer,
    options: &SpeechOptions,
    text: &str,
) -> Result<(), Error> {
    let Some(channel) = invocation.caller_voice_channel().await else {
        invocation.reply(format_error(NEED_VOICE_CHANNEL)).await?;
        return Ok(());
    };

    let connection = match invocation.voice_connection().await {
        None => invocation.connect(&channel).await?,
        Some(connection) => {
            if connection.channel_id().await != Some(channel.id) {
                connection.move_to(&channel).await?;
            }
            connection
        }
    };

    if connection.is_playing().await {
        invocation.reply(format_error(ALREADY_SPEAKING)).await?;
        return Ok(());
    }

    let artifact = match synthesizer.synthesize(text, options).await {
        Ok(artifact) => artifact,
        Err(e) => {
            warn!("Speech synthesis failed: {}", e);
            invocation.reply(format_error(SPEECH_FAILED)).await?;
            return Ok(());
        }
    };

    // Another `say` may have started while this one was synthesizing
    if connection.play(artifact).await? == PlayOutcome::Busy {
        invocation.reply(format_error(ALREADY_SPEAKING)).await?;
        return Ok(());
    }
    info!("Started speaking in {}", channel.name);

    Ok(())
}

/// Join the caller's voice channel. Connection failures propagate.
pub async fn join<I: Invocation>(invocation: &I) -> Result<(), Error> {
    match invocation.caller_voice_channel().await {
        Some(channel) => {
            invocation.connect(&channel).await?;
            info!("Joined voice channel {} ({})", channel.name, channel.id);
            invocation.reply(build_joined(&channel.name)).await?;
        }
        None => {
            invocation.reply(NOT_CONNECTED_REPLY.to_string()).await?;
        }
    }

    Ok(())
}

/// Leave the current voice channel
pub async fn leave<I: Invocation>(invocation: &I) -> Result<(), Error> {
    match invocation.voice_connection().await {
        Some(connection) => {
            connection.disconnect().await?;
            info!("Left voice channel");
        }
        None => {
            invocation.reply(format_error(BOT_NOT_IN_VOICE)).await?;
        }
    }

    Ok(())
}
