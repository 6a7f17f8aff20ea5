use reqwest::header;
use serde::Deserialize;
use url::Url;

use crate::error::{AssetError, AssetResult};

/// GitHub repository publishing the simulator bundle with each release.
pub const ASSET_REPO: &str = "circuitnote/circuitnote";

/// Archive name expected among the release assets.
pub const ASSET_FILENAME: &str = "circuitjs-assets.zip";

const GITHUB_API: &str = "https://api.github.com";

/// Release metadata as returned by the releases endpoint. Only the fields
/// the downloader reads are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: Url,
}

impl Release {
    /// Finds a downloadable artifact by exact filename.
    pub fn find_asset(&self, filename: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name == filename)
    }
}

/// HTTP client for the release-metadata endpoint and artifact downloads.
/// Every request carries an identifying User-Agent.
pub struct ReleaseClient {
    http: reqwest::Client,
    api_base: Url,
}

impl ReleaseClient {
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new() -> AssetResult<Self> {
        Self::with_api_base(Url::parse(GITHUB_API).expect("GitHub API base is a valid URL"))
    }

    /// The API base is a parameter so tests can point at a local server.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn with_api_base(api_base: Url) -> AssetResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!(
                "circuitnote/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;

        Ok(Self { http, api_base })
    }

    /// Fetches metadata for the latest published release of [`ASSET_REPO`].
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success HTTP status.
    pub async fn latest_release(&self) -> AssetResult<Release> {
        let url = format!(
            "{base}/repos/{ASSET_REPO}/releases/latest",
            base = self.api_base.as_str().trim_end_matches('/'),
        );

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssetError::Status {
                context: "release metadata",
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<Release>().await?)
    }

    /// Downloads an artifact's binary content in full.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success HTTP status.
    pub async fn download(&self, asset: &ReleaseAsset) -> AssetResult<Vec<u8>> {
        let response = self.http.get(asset.browser_download_url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(AssetError::Status {
                context: "asset download",
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
