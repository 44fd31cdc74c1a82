pub mod providers;
pub mod recommender;
pub mod similarity;
pub mod vectorizer;
