use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Movie;

/// Ordered, immutable movie catalog
///
/// Row order comes straight from the artifact and defines the similarity
/// matrix row indices, so it must never be re-sorted after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Loads the catalog from a JSON artifact (array of movie rows).
    ///
    /// Missing or malformed artifacts are fatal: the error propagates to the
    /// caller and there is no recovery path.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;

        let movies: Vec<Movie> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Catalog(format!("Failed to parse catalog {}: {}", path.display(), e))
        })?;

        tracing::info!(
            movies = movies.len(),
            path = %path.display(),
            "Catalog loaded"
        );

        Ok(Self { movies })
    }

    /// Builds a catalog from rows already in memory. Used by tests and by
    /// callers that fetch the artifact some other way.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Row index of the first movie whose title matches exactly.
    ///
    /// Title uniqueness is assumed, not enforced: with duplicates, the
    /// earliest row wins.
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    /// All titles in catalog order, for selector UIs.
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_movies() -> Vec<Movie> {
        vec![
            Movie {
                movie_id: 1,
                title: "Avatar".to_string(),
                tags: "action adventure fantasy".to_string(),
            },
            Movie {
                movie_id: 2,
                title: "Aliens".to_string(),
                tags: "action horror space".to_string(),
            },
            Movie {
                movie_id: 3,
                title: "Avatar".to_string(),
                tags: "duplicate row".to_string(),
            },
        ]
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_movies()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().title, "Avatar");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/catalog.json");
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ]").unwrap();

        let result = Catalog::load(file.path());
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_index_of_title_first_match_wins() {
        let catalog = Catalog::from_movies(sample_movies());
        // Two rows are titled "Avatar"; lookup must return the earliest.
        assert_eq!(catalog.index_of_title("Avatar"), Some(0));
        assert_eq!(catalog.index_of_title("Aliens"), Some(1));
    }

    #[test]
    fn test_index_of_title_exact_match_only() {
        let catalog = Catalog::from_movies(sample_movies());
        assert_eq!(catalog.index_of_title("avatar"), None);
        assert_eq!(catalog.index_of_title("Avat"), None);
    }

    #[test]
    fn test_titles_preserve_order() {
        let catalog = Catalog::from_movies(sample_movies());
        assert_eq!(catalog.titles(), vec!["Avatar", "Aliens", "Avatar"]);
    }
}
