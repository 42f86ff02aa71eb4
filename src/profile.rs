//! Summoner lookup pipeline: profile, then ranks, then masteries.
//!
//! Every stage logs the underlying failure and replaces it with its own
//! user-safe [`AppError`] variant. Stages run one after the other; a failure
//! anywhere discards what earlier stages already fetched.

use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::riot::{Region, RiotClient};

/// Number of champions shown per summoner.
pub const MASTERY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Encrypted summoner id
    pub id: String,
    pub name: String,
    pub level: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub queue: &'static str,
    pub tier: String,
    pub division: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteryEntry {
    pub champion: String,
    pub points: i64,
    pub level: i32,
    pub icon_url: String,
}

/// Everything needed to render one summoner summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummonerReport {
    pub region: Region,
    pub profile: Profile,
    pub ranks: Vec<RankEntry>,
    pub masteries: Vec<MasteryEntry>,
}

pub async fn fetch_profile(
    riot: &RiotClient,
    region: Region,
    summoner_name: &str,
) -> Result<Profile, AppError> {
    let summoner = riot
        .get_summoner_by_name(region, summoner_name)
        .await
        .map_err(|e| {
            error!(error = %e, %region, summoner_name, "🛰️ ❌ Summoner profile request failed");
            AppError::ProfileFetch
        })?;

    Ok(Profile {
        level: format!("Poziom - {}", summoner.summoner_level),
        icon_url: riot.profile_icon_url(summoner.profile_icon_id),
        id: summoner.id,
        name: summoner.name,
    })
}

pub async fn fetch_ranks(
    riot: &RiotClient,
    region: Region,
    summoner_id: &str,
) -> Result<Vec<RankEntry>, AppError> {
    let entries = riot
        .get_league_entries_by_summoner(region, summoner_id)
        .await
        .map_err(|e| {
            error!(error = %e, %region, summoner_id, "🛰️ ❌ League entries request failed");
            AppError::RankFetch
        })?;

    Ok(entries
        .into_iter()
        .map(|entry| RankEntry {
            queue: entry.queue_label(),
            tier: entry.tier,
            division: entry.rank,
            league_points: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
        })
        .collect())
}

/// Top masteries, named through the Data Dragon champion catalog.
///
/// Masteries whose champion is missing from the catalog are skipped.
pub async fn fetch_masteries(
    riot: &RiotClient,
    region: Region,
    summoner_id: &str,
    limit: usize,
) -> Result<Vec<MasteryEntry>, AppError> {
    let masteries = riot
        .get_top_masteries_by_summoner(region, summoner_id, limit)
        .await
        .map_err(|e| {
            error!(error = %e, %region, summoner_id, "🛰️ ❌ Champion mastery request failed");
            AppError::MasteryFetch
        })?;

    let catalog = riot.get_champion_catalog().await.map_err(|e| {
        error!(error = %e, "🛰️ ❌ Champion catalog request failed");
        AppError::MasteryFetch
    })?;

    Ok(masteries
        .into_iter()
        .take(limit)
        .filter_map(|mastery| {
            let Some(name) = catalog.name_of(mastery.champion_id) else {
                warn!(
                    champion_id = mastery.champion_id,
                    "⚠️ Champion missing from catalog"
                );
                return None;
            };

            Some(MasteryEntry {
                champion: name.to_string(),
                points: mastery.champion_points,
                level: mastery.champion_level,
                icon_url: riot.champion_icon_url(name),
            })
        })
        .collect())
}

pub async fn build_report(
    riot: &RiotClient,
    region: Region,
    summoner_name: &str,
) -> Result<SummonerReport, AppError> {
    let profile = fetch_profile(riot, region, summoner_name).await?;
    debug!(summoner_id = %profile.id, "profile fetched");

    let ranks = fetch_ranks(riot, region, &profile.id).await?;
    let masteries = fetch_masteries(riot, region, &profile.id, MASTERY_LIMIT).await?;

    Ok(SummonerReport {
        region,
        profile,
        ranks,
        masteries,
    })
}
