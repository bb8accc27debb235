use reqwest::Client;
use std::{env, fs, path::PathBuf, time::Duration};

use crate::utils::error::AppError;

const DEFAULT_API_URL: &str = "https://api.api-ninjas.com/v1/country";

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub api_url: String,
    pub api_key: String,
    pub min_population: u64,
    pub limit: u32,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_url: String,
    pub min_population: u64,
    pub limit: u32,
    pub output_path: PathBuf,
    pub external_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        // An empty key is treated the same as a missing one.
        let api_key = env::var("API_NINJAS_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::Config("API_NINJAS_KEY environment variable not set".into())
            })?;

        // Tests / env can override the external endpoint and the output target
        let api_url = env::var("COUNTRY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let output_path =
            PathBuf::from(env::var("OUTPUT_PATH").unwrap_or_else(|_| "countries_data.json".into()));

        // min_population is expressed in thousands, matching the upstream API
        let min_population: u64 = env::var("MIN_POPULATION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(50_000);
        let limit: u32 = env::var("COUNTRY_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let external_timeout_ms: u64 = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12_000);

        Ok(Self { api_key, api_url, min_population, limit, output_path, external_timeout_ms })
    }

    pub fn build_state(&self) -> Result<AppState, AppError> {
        // ensure the output dir exists when the override points somewhere new
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).ok();
            }
        }

        // http client
        let http = Client::builder()
            .timeout(Duration::from_millis(self.external_timeout_ms))
            .build()
            .map_err(|e| AppError::Config(format!("could not build HTTP client: {}", e)))?;

        Ok(AppState {
            http,
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            min_population: self.min_population,
            limit: self.limit,
            output_path: self.output_path.clone(),
        })
    }
}
