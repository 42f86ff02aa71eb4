use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::LeagueEntryDto;

impl RiotClient {
    /// Get league entries (ranked info) for a summoner by encrypted summoner id
    pub async fn get_league_entries_by_summoner(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_url(region),
            summoner_id
        );

        self.get(&url).await
    }
}
