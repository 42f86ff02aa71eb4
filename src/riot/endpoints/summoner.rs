use crate::error::AppError;
use crate::riot::{Region, RiotClient, SummonerDto};

impl RiotClient {
    /// Get summoner by display name.
    ///
    /// The name is percent-encoded as a single path segment, so spaces reach
    /// the API as `%20` instead of being dropped.
    pub async fn get_summoner_by_name(
        &self,
        region: Region,
        summoner_name: &str,
    ) -> Result<SummonerDto, AppError> {
        self.get(&self.summoner_by_name_url(region, summoner_name))
            .await
    }

    fn summoner_by_name_url(&self, region: Region, summoner_name: &str) -> String {
        format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.platform_url(region),
            urlencoding::encode(summoner_name)
        )
    }
}
