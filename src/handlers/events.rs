use poise::serenity_prelude::{self as serenity, FullEvent};
use tracing::info;

use crate::models::{Data, Error};

/// Handle gateway events the commands do not cover
pub async fn handle_event(
    _ctx: &serenity::Context,
    event: &FullEvent,
    _data: &Data,
) -> Result<(), Error> {
    if let FullEvent::Ready { data_about_bot } = event {
        info!(
            "Logged in as {} (ID: {})",
            data_about_bot.user.name, data_about_bot.user.id
        );
    }

    Ok(())
}
