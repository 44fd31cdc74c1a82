use axum::{extract::State, Json};

use crate::state::AppState;

/// Handler for the title list endpoint
///
/// Returns every catalog title in row order, feeding the selector in the
/// console shell or any front end.
pub async fn list(State(state): State<AppState>) -> Json<Vec<String>> {
    let titles = state
        .model
        .catalog()
        .titles()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(titles)
}
