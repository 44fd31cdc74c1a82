use crate::error::AppResult;

pub mod tmdb;

/// Poster metadata provider abstraction
///
/// Poster lookups go through a trait so the recommender's correctness tests
/// can substitute a stub returning fixed URLs instead of hitting the live
/// metadata API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Resolve the full poster image URL for a movie ID.
    ///
    /// Fails if the API call errors, the response cannot be parsed, or the
    /// title has no poster path. There is no fallback image and no retry.
    async fn poster_url(&self, movie_id: u64) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
