use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::ChampionMasteryDto;

impl RiotClient {
    /// Get the `count` highest champion masteries of a summoner, best first.
    pub async fn get_top_masteries_by_summoner(
        &self,
        region: Region,
        summoner_id: &str,
        count: usize,
    ) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = format!(
            "{}/lol/champion-mastery/v4/champion-masteries/by-summoner/{}/top?count={}",
            self.platform_url(region),
            summoner_id,
            count
        );

        self.get(&url).await
    }
}
