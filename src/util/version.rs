use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const APP_NAME: &str = "Miles Deal Scanner";
pub const APP_REPO_URL: &str = "https://github.com/skynatbs/miles_deal_scanner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const GITHUB_OWNER: &str = "skynatbs";
const GITHUB_REPO: &str = "miles_deal_scanner";

#[derive(Clone, Debug)]
pub struct UpdateInfo {
    pub current: Version,
    pub latest: Option<(String, Version)>,
}

impl UpdateInfo {
    pub fn update_available(&self) -> bool {
        self.latest
            .as_ref()
            .map(|(_, version)| *version > self.current)
            .unwrap_or(false)
    }
}

impl fmt::Display for UpdateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.latest, self.update_available()) {
            (Some((raw, _)), true) => {
                write!(f, "New version available: {raw} (current {})", self.current)
            }
            (Some((raw, _)), false) => write!(f, "Up to date on {raw}"),
            (None, _) => write!(f, "No release information found"),
        }
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to build HTTP client: {0}")]
    BuildClient(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

#[derive(Deserialize)]
struct GitTag {
    name: String,
}

pub async fn check_for_update() -> Result<UpdateInfo, UpdateError> {
    let user_agent = format!("{}/{} (+{})", APP_NAME, version_label(), APP_REPO_URL);
    let client = Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|err| UpdateError::BuildClient(err.to_string()))?;

    let url = format!(
        "https://api.github.com/repos/{GITHUB_OWNER}/{GITHUB_REPO}/tags?per_page=100"
    );
    let tags = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .json::<Vec<GitTag>>()
        .await
        .map_err(|err| UpdateError::Request(err.to_string()))?;

    let current = current_version()?;
    let latest = tags
        .into_iter()
        .filter_map(|tag| {
            parse_version_str(&tag.name)
                .ok()
                .map(|version| (tag.name, version))
        })
        .max_by(|(_, a), (_, b)| a.cmp(b));

    Ok(UpdateInfo { current, latest })
}

fn parse_version_str(input: &str) -> Result<Version, UpdateError> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| UpdateError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, UpdateError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }
    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}
