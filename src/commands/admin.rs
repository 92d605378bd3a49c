use std::process::Command;

use tracing::{error, info};

use crate::{
    constants::RESTARTING_REPLY,
    models::{Context, Error},
};

/// Restarts the bot. Owner only.
#[poise::command(prefix_command, owners_only)]
pub async fn restart(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(RESTARTING_REPLY).await?;
    info!("Restart requested by {}", ctx.author().id);

    let e = relaunch();
    error!("Failed to restart: {}", e);
    Err(e.into())
}

/// Command that starts this binary again with the same arguments
fn restart_command() -> std::io::Result<Command> {
    let mut command = Command::new(std::env::current_exe()?);
    command.args(std::env::args_os().skip(1));
    Ok(command)
}

/// Replace the running process. Only returns on failure.
#[cfg(unix)]
fn relaunch() -> std::io::Error {
    use std::os::unix::process::CommandExt;

    match restart_command() {
        Ok(mut command) => command.exec(),
        Err(e) => e,
    }
}

#[cfg(not(unix))]
fn relaunch() -> std::io::Error {
    match restart_command().and_then(|mut command| command.spawn()) {
        Ok(_) => std::process::exit(0),
        Err(e) => e,
    }
}
