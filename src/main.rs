mod commands;
mod config;
mod constants;
mod handlers;
mod models;
mod services;
mod utils;
mod voice;

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use songbird::SerenityInit;
use tracing::{error, info};

use crate::{
    commands::commands,
    config::Config,
    constants::LOG_DIRECTIVES,
    handlers::{handle_event, on_error},
    models::{Data, Error},
    services::speech::GoogleTts,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let synthesizer = match GoogleTts::new() {
        Ok(synthesizer) => synthesizer,
        Err(e) => {
            error!("Failed to create speech client: {}", e);
            std::process::exit(1);
        }
    };

    let data = Data::new(config.speech.clone(), Arc::new(synthesizer));

    if let Err(e) = start_bot(config, data).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the logging system
fn initialize_logging() {
    let filter = LOG_DIRECTIVES.iter().fold(
        tracing_subscriber::EnvFilter::from_default_env(),
        |filter, directive| filter.add_directive(directive.parse().expect("valid log directive")),
    );

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Create and start the Discord bot
async fn start_bot(config: Config, data: Data) -> Result<(), Error> {
    info!(
        "Using command prefix {:?}, speech language {}",
        config.command_prefix, config.speech.language
    );

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, _framework, data| {
                Box::pin(handle_event(ctx, event, data))
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move {
                info!("Bot is ready!");
                Ok(data)
            })
        })
        .build();

    // Prefix commands need message content; voice states drive the voice commands
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_VOICE_STATES;

    let mut client = serenity::ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .register_songbird()
        .await?;

    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
