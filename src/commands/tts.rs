use crate::{
    models::{Context, Error},
    services::voice_flow,
    voice::DiscordInvocation,
};

/// Speaks text in your voice channel.
#[poise::command(prefix_command)]
pub async fn say(
    ctx: Context<'_>,
    #[rest]
    #[description = "Text to speak"]
    text: String,
) -> Result<(), Error> {
    let Some(invocation) = DiscordInvocation::for_command(ctx).await? else {
        return Ok(());
    };

    let data = ctx.data();
    voice_flow::speak(
        &invocation,
        data.synthesizer.as_ref(),
        &data.speech_options,
        &text,
    )
    .await
}
