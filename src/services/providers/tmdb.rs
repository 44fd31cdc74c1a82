/// TMDB metadata provider
///
/// Resolves poster URLs from TMDB's movie details endpoint:
/// `GET /movie/{id}?api_key=...&language=en-US`, then joins the returned
/// relative `poster_path` onto a fixed image base URL.
use crate::{
    error::{AppError, AppResult},
    models::MovieDetails,
    services::providers::PosterProvider,
};
use reqwest::Client as HttpClient;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, image_base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_base_url,
        }
    }

    /// Joins the image base with a relative poster path, normalizing the
    /// slash so neither a double slash nor a missing one slips through.
    fn image_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn poster_url(&self, movie_id: u64) -> AppResult<String> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", LANGUAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let details: MovieDetails = response.json().await?;

        let poster_path = details.poster_path.ok_or_else(|| {
            AppError::ExternalApi(format!("No poster path for movie {}", movie_id))
        })?;

        tracing::debug!(
            movie_id = movie_id,
            poster_path = %poster_path,
            provider = "tmdb",
            "Poster resolved"
        );

        Ok(self.image_url(&poster_path))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TmdbProvider {
        TmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/3".to_string(),
            "https://image.tmdb.org/t/p/w500".to_string(),
        )
    }

    #[test]
    fn test_image_url_with_leading_slash() {
        let provider = create_test_provider();
        assert_eq!(
            provider.image_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_image_url_without_leading_slash() {
        let provider = create_test_provider();
        assert_eq!(
            provider.image_url("abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_image_url_with_trailing_slash_base() {
        let provider = TmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/3".to_string(),
            "https://image.tmdb.org/t/p/w500/".to_string(),
        );
        assert_eq!(
            provider.image_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_details_deserialization() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path.as_deref(),
            Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg")
        );
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(create_test_provider().name(), "tmdb");
    }
}
