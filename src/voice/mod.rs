/// Songbird-backed voice connections
mod cleanup;
mod discord;

pub use discord::DiscordInvocation;
