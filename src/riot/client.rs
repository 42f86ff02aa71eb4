use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::AppError;
use crate::riot::region::Region;

/// HTTP client shared by every command invocation.
///
/// Holds only read-only settings, so it can be used concurrently without locking.
#[derive(Debug, Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    /// Riot API Key
    api_key: String,
    api_url: Option<String>,
    pub(crate) ddragon_url: String,
    pub(crate) ddragon_version: String,
    pub(crate) ddragon_locale: String,
}

impl RiotClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.riot_api_key.clone(),
            api_url: config.riot_api_url.clone(),
            ddragon_url: config.ddragon_url.clone(),
            ddragon_version: config.ddragon_version.clone(),
            ddragon_locale: config.ddragon_locale.clone(),
        }
    }

    /// Base URL of the platform API serving `region`.
    pub fn platform_url(&self, region: Region) -> String {
        match &self.api_url {
            Some(url) => url.clone(),
            None => region.base_url(),
        }
    }

    /// GET an authenticated Riot API resource.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::trace!(url, "[RIOT::CLIENT] GET");

        let request = self.http.get(url).query(&[("api_key", &self.api_key)]);
        send(request).await
    }

    /// GET a public Data Dragon document.
    pub async fn get_static<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::trace!(url, "[DDRAGON] GET");

        send(self.http.get(url)).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AppError> {
    let res = request.send().await?;
    let status = res.status();

    if !status.is_success() {
        let message = res.text().await.unwrap_or_default();
        return Err(AppError::RiotApi {
            status: status.as_u16(),
            message,
        });
    }

    Ok(res.json().await?)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Pong {
        ok: bool,
    }

    #[tokio::test]
    async fn get_attaches_api_key_as_query_param() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/ping")
                    .query_param("api_key", "RGAPI-TEST");
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = RiotClient::new(&Config::for_tests(&server.base_url()));
        let pong: Pong = client.get(&server.url("/ping")).await.unwrap();

        mock.assert_async().await;
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn static_documents_are_fetched_without_api_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/cdn/data.json").matches(|req| {
                    !req.query_params
                        .as_ref()
                        .is_some_and(|params| params.iter().any(|(k, _)| k == "api_key"))
                });
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = RiotClient::new(&Config::for_tests(&server.base_url()));
        let pong: Pong = client
            .get_static(&server.url("/cdn/data.json"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404).body("Data not found");
            })
            .await;

        let client = RiotClient::new(&Config::for_tests(&server.base_url()));
        let res: Result<Pong, AppError> = client.get(&server.url("/missing")).await;

        assert!(matches!(
            res,
            Err(AppError::RiotApi { status: 404, ref message }) if message == "Data not found"
        ));
    }

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client = RiotClient::new(&Config::for_tests("http://127.0.0.1:1"));

        let res: Result<(), AppError> = client.get("ht!tp://invalid-url").await;

        assert!(matches!(res, Err(AppError::Http(_))));
    }

    #[test]
    fn platform_url_defaults_to_region_host() {
        let mut config = Config::for_tests("http://127.0.0.1:1");
        config.riot_api_url = None;
        let client = RiotClient::new(&config);

        assert_eq!(
            client.platform_url(Region::Euw),
            "https://euw1.api.riotgames.com"
        );
    }
}
