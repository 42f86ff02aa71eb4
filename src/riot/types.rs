use std::collections::HashMap;

use serde::Deserialize;

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id
    pub id: String,
    pub name: String,
    pub summoner_level: i64,
    pub profile_icon_id: i32,
}

// ============================================================================
// League-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl LeagueEntryDto {
    pub fn queue_label(&self) -> &'static str {
        queue_label(&self.queue_type)
    }
}

pub fn queue_label(queue_type: &str) -> &'static str {
    match queue_type {
        "RANKED_SOLO_5x5" => "Solo/Duo",
        "RANKED_FLEX_SR" => "Flex 5v5",
        "RANKED_TFT" => "Teamfight Tactics",
        _ => "Unknown",
    }
}

// ============================================================================
// Champion-Mastery-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
}

// ============================================================================
// Data Dragon
// ============================================================================

/// `champion.json`, keyed by champion name.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionCatalog {
    pub data: HashMap<String, CatalogChampion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogChampion {
    /// Numeric champion id, serialized as a string.
    pub key: String,
}

impl ChampionCatalog {
    /// Name of the champion whose key matches `champion_id`.
    pub fn name_of(&self, champion_id: i64) -> Option<&str> {
        let key = champion_id.to_string();
        self.data
            .iter()
            .find(|(_, champion)| champion.key == key)
            .map(|(name, _)| name.as_str())
    }
}
