use serde::{Deserialize, Serialize};

/// A single catalog entry: a movie with its free-text tag blob
///
/// `tags` is the concatenated genre/keyword/overview text the similarity
/// model is built from. Rows are immutable after load and their position in
/// the catalog defines the matrix row index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub movie_id: u64,
    pub title: String,
    pub tags: String,
}

/// One recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster: String,
}

/// TMDB movie details response, reduced to the field we extract
///
/// TMDB returns `poster_path` as either a relative path ("/abc.jpg") or
/// JSON null for titles without artwork.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "movie_id": 19995,
            "title": "Avatar",
            "tags": "action adventure fantasy cultureclash future spacewar"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.movie_id, 19995);
        assert_eq!(movie.title, "Avatar");
        assert!(movie.tags.contains("spacewar"));
    }

    #[test]
    fn test_movie_details_with_poster() {
        let json = r#"{"id": 19995, "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path.as_deref(),
            Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg")
        );
    }

    #[test]
    fn test_movie_details_null_poster() {
        let json = r#"{"id": 42, "poster_path": null}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[test]
    fn test_movie_details_missing_poster_field() {
        let json = r#"{"id": 42}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[test]
    fn test_recommendation_serialization() {
        let rec = Recommendation {
            title: "Aliens".to_string(),
            poster: "https://image.tmdb.org/t/p/w500/abc.jpg".to_string(),
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["title"], "Aliens");
        assert_eq!(json["poster"], "https://image.tmdb.org/t/p/w500/abc.jpg");
    }
}
