//! API client for the T8 REST endpoints

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use t8_lib::{Codec, ListingResponse, SpectrumRecord, WaveRecord};
use tracing::debug;
use url::Url;

/// Timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the T8 server.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    user: String,
    password: String,
    codec: Codec,
}

impl ApiClient {
    /// Create a client for `host` (a `host:port` pair) with Basic auth
    /// credentials. All payloads are requested in `codec`'s wire format.
    pub fn new(host: &str, user: &str, password: &str, codec: Codec) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to create HTTP client")?;

        let base_url =
            Url::parse(&format!("http://{host}/")).context("invalid T8_HOST address")?;

        Ok(Self {
            client,
            base_url,
            user: user.to_string(),
            password: password.to_string(),
            codec,
        })
    }

    /// The codec every payload is requested in.
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// List waveform snapshots for a measurement point.
    pub async fn list_waves(
        &self,
        machine: &str,
        point: &str,
        pmode: &str,
    ) -> Result<ListingResponse> {
        self.get_json(&self.listing_path("waves", machine, point, pmode))
            .await
    }

    /// List spectrum snapshots for a measurement point.
    pub async fn list_spectra(
        &self,
        machine: &str,
        point: &str,
        pmode: &str,
    ) -> Result<ListingResponse> {
        self.get_json(&self.listing_path("spectra", machine, point, pmode))
            .await
    }

    /// Fetch one waveform snapshot by epoch.
    pub async fn get_wave(
        &self,
        machine: &str,
        point: &str,
        pmode: &str,
        epoch: i64,
    ) -> Result<WaveRecord> {
        self.get_json(&self.record_path("waves", machine, point, pmode, epoch))
            .await
    }

    /// Fetch one spectrum snapshot by epoch.
    pub async fn get_spectrum(
        &self,
        machine: &str,
        point: &str,
        pmode: &str,
        epoch: i64,
    ) -> Result<SpectrumRecord> {
        self.get_json(&self.record_path("spectra", machine, point, pmode, epoch))
            .await
    }

    fn listing_path(&self, resource: &str, machine: &str, point: &str, pmode: &str) -> String {
        format!(
            "rest/{resource}/{machine}/{point}/{pmode}/?array_fmt={}",
            self.codec.wire_name()
        )
    }

    fn record_path(
        &self,
        resource: &str,
        machine: &str,
        point: &str,
        pmode: &str,
        epoch: i64,
    ) -> String {
        format!(
            "rest/{resource}/{machine}/{point}/{pmode}/{epoch}/?array_fmt={}",
            self.codec.wire_name()
        )
    }

    /// Make an authenticated GET request and parse the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("invalid request path")?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await
            .with_context(|| format!("failed to reach the T8 server at {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("T8 server error ({status}): {body}");
        }

        response
            .json()
            .await
            .context("failed to parse the T8 server response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // zlib(b64) of the little-endian i16 sequence [1, 2, 3]
    const PAYLOAD_123: &str = "eJxjZGBiYGYAAAAaAAc=";

    fn test_client(server: &mockito::Server) -> ApiClient {
        ApiClient::new(&server.host_with_port(), "user", "pass", Codec::Zint).unwrap()
    }

    #[tokio::test]
    async fn fetches_a_wave_with_basic_auth_and_format_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/waves/LP_Turbine/MAD31CY005/AM1/946684800/")
            .match_query(mockito::Matcher::UrlEncoded(
                "array_fmt".into(),
                "zint".into(),
            ))
            // base64("user:pass")
            .match_header("authorization", "Basic dXNlcjpwYXNz")
            .with_body(format!(
                r#"{{"sample_rate": 1000, "factor": 2.0, "data": "{PAYLOAD_123}"}}"#
            ))
            .create_async()
            .await;

        let client = test_client(&server);
        let record = client
            .get_wave("LP_Turbine", "MAD31CY005", "AM1", 946684800)
            .await
            .unwrap();
        mock.assert_async().await;

        let (sample_rate, factor, data) = record.into_parts().unwrap();
        assert_eq!(sample_rate, 1000.0);
        assert_eq!(factor, 2.0);
        assert_eq!(client.codec().decode(&data).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn fetches_a_spectrum_record() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/spectra/M1/P1/AM1/1678883445/")
            .match_query(mockito::Matcher::UrlEncoded(
                "array_fmt".into(),
                "zint".into(),
            ))
            .with_body(format!(
                r#"{{"min_freq": 2.5, "max_freq": 800, "factor": 0.5, "data": "{PAYLOAD_123}"}}"#
            ))
            .create_async()
            .await;

        let client = test_client(&server);
        let record = client
            .get_spectrum("M1", "P1", "AM1", 1678883445)
            .await
            .unwrap();
        mock.assert_async().await;

        let (min_freq, max_freq, factor, _) = record.into_parts().unwrap();
        assert_eq!(min_freq, 2.5);
        assert_eq!(max_freq, 800.0);
        assert_eq!(factor, 0.5);
    }

    #[tokio::test]
    async fn lists_wave_snapshots() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/waves/M1/P1/AM1/")
            .match_query(mockito::Matcher::UrlEncoded(
                "array_fmt".into(),
                "zint".into(),
            ))
            .with_body(
                r#"{"_items": [
                    {"_links": {"self": "http://host/rest/waves/M1/P1/AM1/0"}},
                    {"_links": {"self": "http://host/rest/waves/M1/P1/AM1/1678883445"}}
                ]}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let listing = client.list_waves("M1", "P1", "AM1").await.unwrap();
        mock.assert_async().await;
        assert_eq!(listing.items.len(), 2);
    }

    #[tokio::test]
    async fn surfaces_server_errors_with_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/waves/M1/P1/AM1/946684800/")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = test_client(&server);
        let err = client
            .get_wave("M1", "P1", "AM1", 946684800)
            .await
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("500"), "unexpected error: {message}");
    }

    #[tokio::test]
    async fn surfaces_connection_failures_as_context() {
        // Nothing listens on this port.
        let client = ApiClient::new("127.0.0.1:1", "user", "pass", Codec::Zint).unwrap();
        let err = client.list_waves("M1", "P1", "AM1").await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to reach"));
    }
}
