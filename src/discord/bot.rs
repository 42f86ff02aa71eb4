use tracing::{error, info};

use crate::error::AppError;
use crate::riot::RiotClient;

use super::commands;
use super::handler::event_handler;

/// Character every command message starts with.
pub const TRIGGER: &str = "!";

/// Shared read-only data accessible in all commands
#[derive(Debug)]
pub struct Data {
    pub riot: RiotClient,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub fn create_framework(data: Data) -> poise::Framework<Data, AppError> {
    poise::Framework::builder()
        .options(framework_options())
        .setup(|_ctx, ready, _framework| {
            Box::pin(async move {
                info!(
                    bot_name = %ready.user.name,
                    guild_count = ready.guilds.len(),
                    "🎮 Bot is ready"
                );
                Ok(data)
            })
        })
        .build()
}

fn framework_options() -> poise::FrameworkOptions<Data, AppError> {
    poise::FrameworkOptions {
        commands: vec![commands::region_lookup()],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(TRIGGER.into()),
            mention_as_prefix: false,
            case_insensitive_commands: true,
            ignore_bots: true,
            ..Default::default()
        },
        event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
        on_error: |error| {
            Box::pin(async move {
                handle_error(error).await;
            })
        },
        ..Default::default()
    }
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        // Anything after `!` that isn't a region is none of our business.
        poise::FrameworkError::UnknownCommand { .. } => {}
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                error = ?error,
                command = ctx.invoked_command_name(),
                user_id = %ctx.author().id,
                "🎮 ❌ Command execution failed"
            );
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                error = ?error,
                event = event.snake_case_name(),
                "🎮 ❌ Event handler failed"
            );
        }
        poise::FrameworkError::Setup { error, .. } => {
            error!(error = ?error, "🎮 ❌ Framework setup failed");
        }
        other => {
            error!(error = ?other, "🎮 ❌ Unhandled framework error");
        }
    }
}
