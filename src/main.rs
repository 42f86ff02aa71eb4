use poise::serenity_prelude::{self as serenity, GatewayIntents};
use tracing::{error, info};

use config::Config;
use discord::{Data, create_framework};
use error::AppError;
use riot::RiotClient;

mod config;
mod discord;
mod error;
mod logging;
mod profile;
mod riot;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logging::init();

    info!("🐙 Starting...");

    let data = Data {
        riot: RiotClient::new(&config),
    };

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(create_framework(data))
        .await?;

    info!("🌐 [DISCORD] connecting to gateway");
    if let Err(why) = client.start().await {
        error!("❌ [DISCORD] connection failed: {why:?}");
        return Err(why.into());
    }

    Ok(())
}
