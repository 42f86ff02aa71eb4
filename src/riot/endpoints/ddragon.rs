//! Data Dragon: Riot's static, versioned CDN for images and game data.

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::ChampionCatalog;

impl RiotClient {
    pub async fn get_champion_catalog(&self) -> Result<ChampionCatalog, AppError> {
        let url = format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.ddragon_url, self.ddragon_version, self.ddragon_locale
        );

        self.get_static(&url).await
    }

    pub fn profile_icon_url(&self, icon_id: i32) -> String {
        format!(
            "{}/cdn/{}/img/profileicon/{}.png",
            self.ddragon_url, self.ddragon_version, icon_id
        )
    }

    pub fn champion_icon_url(&self, champion_name: &str) -> String {
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.ddragon_url, self.ddragon_version, champion_name
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    use super::*;

    #[test]
    fn icon_urls_follow_cdn_layout() {
        let mut config = Config::for_tests("http://127.0.0.1:1");
        config.ddragon_url = "https://ddragon.leagueoflegends.com".into();
        let client = RiotClient::new(&config);

        assert_eq!(
            client.profile_icon_url(4),
            "https://ddragon.leagueoflegends.com/cdn/13.13.1/img/profileicon/4.png"
        );
        assert_eq!(
            client.champion_icon_url("Ahri"),
            "https://ddragon.leagueoflegends.com/cdn/13.13.1/img/champion/Ahri.png"
        );
    }
}
