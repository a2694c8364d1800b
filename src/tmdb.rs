use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{MovieCandidate, MovieDetail},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        image_base_url: String,
    ) -> Self {
        Self { client, api_key, base_url, image_base_url }
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<MovieCandidate>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await
            .map_err(transport_error)?;

        let resp = check_status(resp)?;
        let body: SearchResponse = resp.json().await.map_err(transport_error)?;

        debug!(query = %query, results = body.results.len(), "searched provider");
        Ok(body.results)
    }

    pub async fn movie_detail(&self, provider_id: &str) -> AppResult<MovieDetail> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), provider_id);

        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await
            .map_err(transport_error)?;

        let resp = check_status(resp)?;
        let detail: MovieDetail = resp.json().await.map_err(transport_error)?;

        debug!(provider_id = %provider_id, title = %detail.title, "fetched provider detail");
        Ok(detail)
    }

    /// Joins a provider-relative poster path onto the configured image host.
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        match poster_path {
            Some(path) => format!("{}{}", self.image_base_url.trim_end_matches('/'), path),
            None => String::new(),
        }
    }
}

/// Year is the portion of the provider's release date before the first `-`.
pub fn release_year(release_date: Option<&str>) -> Option<i32> {
    release_date?.split('-').next()?.trim().parse().ok()
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::UpstreamUnavailable(err.to_string())
}

fn check_status(resp: reqwest::Response) -> AppResult<reqwest::Response> {
    match resp.status() {
        StatusCode::UNAUTHORIZED => Err(AppError::UpstreamAuth),
        status if !status.is_success() => {
            Err(AppError::UpstreamUnavailable(format!("provider returned {status}")))
        }
        _ => Ok(resp),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<MovieCandidate>,
}
