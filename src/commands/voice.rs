use crate::{
    models::{Context, Error},
    services::voice_flow,
    voice::DiscordInvocation,
};

/// Joins the voice channel you are in.
#[poise::command(prefix_command)]
pub async fn join(ctx: Context<'_>) -> Result<(), Error> {
    let Some(invocation) = DiscordInvocation::for_command(ctx).await? else {
        return Ok(());
    };
    voice_flow::join(&invocation).await
}

/// Leaves the voice channel.
#[poise::command(prefix_command)]
pub async fn leave(ctx: Context<'_>) -> Result<(), Error> {
    let Some(invocation) = DiscordInvocation::for_command(ctx).await? else {
        return Ok(());
    };
    voice_flow::leave(&invocation).await
}
