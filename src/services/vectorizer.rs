use std::collections::{HashMap, HashSet};

/// English stopwords excluded from the vocabulary.
///
/// Trimmed from the classic Glasgow IR list to the words that actually occur
/// in movie tag blobs.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Bag-of-words vectorizer with a bounded vocabulary
///
/// Tokens are lowercased runs of two or more word characters; stopwords are
/// dropped; the vocabulary keeps the `max_features` most frequent tokens
/// across the whole corpus, with frequency ties broken lexicographically so
/// the model is deterministic.
pub struct CountVectorizer {
    max_features: usize,
    stopwords: HashSet<&'static str>,
}

/// One count vector per document over a shared vocabulary
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    vocabulary: Vec<String>,
    vectors: Vec<Vec<u32>>,
}

impl CountVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Builds the vocabulary from the corpus and counts token occurrences
    /// per document.
    pub fn fit_transform(&self, documents: &[&str]) -> FeatureMatrix {
        let mut corpus_counts: HashMap<String, u64> = HashMap::new();
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| {
                let tokens = self.tokenize(doc);
                for token in &tokens {
                    *corpus_counts.entry(token.clone()).or_insert(0) += 1;
                }
                tokens
            })
            .collect();

        let vocabulary = self.select_vocabulary(corpus_counts);
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let vectors = tokenized
            .into_iter()
            .map(|tokens| {
                let mut vector = vec![0u32; vocabulary.len()];
                for token in tokens {
                    if let Some(&col) = index.get(token.as_str()) {
                        vector[col] += 1;
                    }
                }
                vector
            })
            .collect();

        tracing::debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Feature matrix built"
        );

        FeatureMatrix {
            vocabulary,
            vectors,
        }
    }

    /// Lowercased tokens of two or more word characters, stopwords removed.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|token| token.chars().count() >= 2)
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Top `max_features` tokens by corpus frequency, ties broken by token
    /// order; final column indices are assigned alphabetically.
    fn select_vocabulary(&self, corpus_counts: HashMap<String, u64>) -> Vec<String> {
        let mut ranked: Vec<(String, u64)> = corpus_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort();
        vocabulary
    }
}

impl FeatureMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn vectors(&self) -> &[Vec<u32>] {
        &self.vectors
    }

    pub fn num_documents(&self) -> usize {
        self.vectors.len()
    }
}
