use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
    services::recommender,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    pub movie: String,
}

/// Handler for the recommendation endpoint
///
/// Accepts the selected title as a urlencoded form field and returns the top
/// ten similar movies with their poster URLs.
pub async fn recommend(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> AppResult<Json<Vec<Recommendation>>> {
    if form.movie.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Form field 'movie' cannot be empty".to_string(),
        ));
    }

    let recommendations =
        recommender::recommend(&state.model, state.posters.as_ref(), &form.movie).await?;
    Ok(Json(recommendations))
}
