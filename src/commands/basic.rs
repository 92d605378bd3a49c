use poise::serenity_prelude::Mentionable;

use crate::{
    constants::{PADDLE, PONG_REPLY},
    models::{Context, Error},
    utils::messages::build_greeting,
};

/// Greets you.
#[poise::command(prefix_command)]
pub async fn hello(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(build_greeting(&ctx.author().mention().to_string()))
        .await?;
    Ok(())
}

/// Checks that the bot is alive.
#[poise::command(prefix_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(PONG_REPLY).await?;
    Ok(())
}

/// Pong
#[poise::command(prefix_command, rename = "🏓")]
pub async fn pong(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(PADDLE).await?;
    Ok(())
}

/// Repeats the user's message.
#[poise::command(prefix_command)]
pub async fn echo(
    ctx: Context<'_>,
    #[rest]
    #[description = "Text to repeat"]
    message: String,
) -> Result<(), Error> {
    ctx.say(message).await?;
    Ok(())
}
