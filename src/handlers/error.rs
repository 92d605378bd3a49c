use poise::FrameworkError;
use tracing::error;

use crate::{
    models::{Context, Data, Error},
    utils::messages::{DispatchFailure, dispatch_error_reply},
};

/// Map framework errors to user replies
pub async fn on_error(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::NotAnOwner { ctx, .. } => {
            send_failure(ctx, DispatchFailure::NotOwner).await;
        }
        FrameworkError::ArgumentParse {
            ctx, input, error, ..
        } if is_missing_argument(input.as_deref(), &*error) => {
            let name = missing_parameter(ctx.command());
            send_failure(ctx, DispatchFailure::MissingArgument(name)).await;
        }
        FrameworkError::UnknownCommand { ctx, msg, .. } => {
            let Some(reply) = dispatch_error_reply(&DispatchFailure::UnknownCommand) else {
                return;
            };
            if let Err(e) = msg.channel_id.say(ctx, reply).await {
                error!("Failed to send error reply: {}", e);
            }
        }
        FrameworkError::Command { error, ctx, .. } => {
            error!(
                "Unhandled error in {}: {}",
                ctx.command().qualified_name,
                error
            );
            send_failure(ctx, DispatchFailure::Unexpected).await;
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Whether an argument parse failure means the argument was not given at all
fn is_missing_argument(
    input: Option<&str>,
    error: &(dyn std::error::Error + Send + Sync + 'static),
) -> bool {
    input.is_none() || error.is::<poise::TooFewArguments>()
}

/// Name of the first required parameter of a command
fn missing_parameter(command: &poise::Command<Data, Error>) -> String {
    command
        .parameters
        .iter()
        .find(|parameter| parameter.required)
        .map(|parameter| parameter.name.clone())
        .unwrap_or_else(|| "argument".to_string())
}

async fn send_failure(ctx: Context<'_>, failure: DispatchFailure) {
    let Some(reply) = dispatch_error_reply(&failure) else {
        return;
    };

    if let Err(e) = ctx.say(reply).await {
        error!("Failed to send error reply: {}", e);
    }
}
