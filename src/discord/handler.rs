use poise::serenity_prelude::{self as serenity, ActivityData, CreateEmbed};
use tracing::{error, info, instrument, warn};

use crate::error::AppError;
use crate::profile::build_report;
use crate::riot::{Region, RiotClient};

use super::bot::Data;

/// The only thing users see when a lookup fails, whatever the stage.
pub const APOLOGY: &str = "Wystąpił błąd podczas pobierania danych przywoływacza.";

/// Outbound message for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupReply {
    Summary(Box<CreateEmbed>),
    Apology,
}

pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _data: &Data,
) -> Result<(), AppError> {
    if let serenity::FullEvent::Ready { data_about_bot, .. } = event {
        info!(
            "🤖 Bot succesfuly connected to user: {}",
            data_about_bot.user.name
        );
        ctx.set_activity(Some(ActivityData::playing("League of Legends")));
    }

    Ok(())
}

/// Run the whole lookup and turn the outcome into a reply.
#[instrument(skip(riot, region), fields(region = %region))]
pub async fn lookup(riot: &RiotClient, region: Region, summoner_name: &str) -> LookupReply {
    info!("🛠️ [CMD] summoner lookup invoked");

    // No summoner can match an empty name.
    if summoner_name.is_empty() {
        warn!("🛠️ ⚠️ [CMD] summoner lookup without a name");
        return LookupReply::Apology;
    }

    match build_report(riot, region, summoner_name).await {
        Ok(report) => LookupReply::Summary(Box::new(report.into_embed())),
        Err(e) => {
            error!(error = %e, "🛠️ ❌ [CMD] summoner lookup failed");
            LookupReply::Apology
        }
    }
}
