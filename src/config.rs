use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub riot_api_key: String,
    /// Overrides the per-region `https://<host>` base when set.
    pub riot_api_url: Option<String>,
    pub ddragon_url: String,
    pub ddragon_version: String,
    pub ddragon_locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const DEFAULT_DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";
        const DEFAULT_DDRAGON_VERSION: &str = "13.13.1";
        const DEFAULT_DDRAGON_LOCALE: &str = "pl_PL";

        let discord_token = lookup("DISCORD_TOKEN")
            .ok_or_else(|| AppError::Config("DISCORD_TOKEN must be set".into()))?;

        let riot_api_key = lookup("RIOT_API_KEY")
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let riot_api_url = lookup("RIOT_API_URL").map(|url| url.trim_end_matches('/').to_string());

        let ddragon_url = lookup("DDRAGON_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_DDRAGON_URL.into());

        let ddragon_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.into());

        let ddragon_locale =
            lookup("DDRAGON_LOCALE").unwrap_or_else(|| DEFAULT_DDRAGON_LOCALE.into());

        Ok(Self {
            discord_token,
            riot_api_key,
            riot_api_url,
            ddragon_url,
            ddragon_version,
            ddragon_locale,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Points both the platform API and Data Dragon at a local mock server.
    pub fn for_tests(base_url: &str) -> Self {
        Self {
            discord_token: "DISCORD-TEST".into(),
            riot_api_key: "RGAPI-TEST".into(),
            riot_api_url: Some(base_url.to_string()),
            ddragon_url: base_url.to_string(),
            ddragon_version: "13.13.1".into(),
            ddragon_locale: "pl_PL".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secrets_are_set() {
        let config =
            Config::from_lookup(lookup_in(&[("DISCORD_TOKEN", "t"), ("RIOT_API_KEY", "k")]))
                .unwrap();

        assert_eq!(config.riot_api_key, "k");
        assert_eq!(config.riot_api_url, None);
        assert_eq!(config.ddragon_url, "https://ddragon.leagueoflegends.com");
        assert_eq!(config.ddragon_version, "13.13.1");
        assert_eq!(config.ddragon_locale, "pl_PL");
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let res = Config::from_lookup(lookup_in(&[("DISCORD_TOKEN", "t")]));

        assert!(matches!(res, Err(AppError::Config(_))));
    }

    #[test]
    fn missing_discord_token_is_a_config_error() {
        let res = Config::from_lookup(lookup_in(&[("RIOT_API_KEY", "k")]));

        assert!(matches!(res, Err(AppError::Config(_))));
    }

    #[test]
    fn base_urls_are_trimmed() {
        let config = Config::from_lookup(lookup_in(&[
            ("DISCORD_TOKEN", "t"),
            ("RIOT_API_KEY", "k"),
            ("RIOT_API_URL", "http://127.0.0.1:8080/"),
            ("DDRAGON_URL", "http://127.0.0.1:9090/"),
        ]))
        .unwrap();

        assert_eq!(config.riot_api_url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.ddragon_url, "http://127.0.0.1:9090");
    }
}
