use std::cmp::Ordering;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{Movie, Recommendation},
    services::{
        providers::PosterProvider, similarity::SimilarityMatrix, vectorizer::CountVectorizer,
    },
};

/// Fixed number of recommendations per request
pub const RECOMMENDATION_COUNT: usize = 10;

/// Immutable recommendation context: the catalog plus its similarity matrix
///
/// Built once at startup and shared read-only across requests. Any catalog
/// change requires a full rebuild.
pub struct RecommendationModel {
    catalog: Catalog,
    similarity: SimilarityMatrix,
}

impl RecommendationModel {
    /// Vectorizes every movie's tag text and computes the pairwise cosine
    /// similarity matrix.
    pub fn build(catalog: Catalog, max_features: usize) -> Self {
        let documents: Vec<&str> = catalog.movies().iter().map(|m| m.tags.as_str()).collect();

        let features = CountVectorizer::new(max_features).fit_transform(&documents);
        let similarity = SimilarityMatrix::from_features(&features);

        tracing::info!(
            movies = catalog.len(),
            vocabulary = features.vocabulary().len(),
            "Recommendation model built"
        );

        Self {
            catalog,
            similarity,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranks every other movie by similarity to `title` and returns the top
    /// ten, most similar first.
    ///
    /// The selected movie itself is excluded. Ties are broken by original
    /// catalog row order (the sort is stable).
    pub fn similar_movies(&self, title: &str) -> AppResult<Vec<&Movie>> {
        let index = self
            .catalog
            .index_of_title(title)
            .ok_or_else(|| AppError::UnknownTitle(title.to_string()))?;

        let scores = self.similarity.row(index);

        let mut ranked: Vec<usize> = (0..scores.len()).filter(|&i| i != index).collect();
        ranked.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
        ranked.truncate(RECOMMENDATION_COUNT);

        Ok(ranked
            .into_iter()
            .map(|i| &self.catalog.movies()[i])
            .collect())
    }
}

/// Service entry point shared by both presentation shells: rank similar
/// movies and resolve a poster URL for each.
///
/// Poster lookups run sequentially and the first failure aborts the whole
/// request; there are no partial results.
pub async fn recommend(
    model: &RecommendationModel,
    posters: &dyn PosterProvider,
    title: &str,
) -> AppResult<Vec<Recommendation>> {
    let similar = model.similar_movies(title)?;

    let mut recommendations = Vec::with_capacity(similar.len());
    for movie in similar {
        let poster = posters.poster_url(movie.movie_id).await?;
        recommendations.push(Recommendation {
            title: movie.title.clone(),
            poster,
        });
    }

    tracing::info!(
        title = %title,
        results = recommendations.len(),
        "Recommendations generated"
    );

    Ok(recommendations)
}
