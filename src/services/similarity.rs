use crate::services::vectorizer::FeatureMatrix;

/// Dense pairwise cosine similarity over the feature matrix
///
/// Symmetric with a diagonal of exactly 1.0. Stored flat, row-major; for a
/// few thousand movies the full n x n matrix is small enough to keep dense.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Computes cosine similarity for every movie pair.
    ///
    /// Zero-norm rows (documents whose tokens were all filtered out) score
    /// 0.0 against every other row.
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let vectors = features.vectors();
        let n = vectors.len();

        let norms: Vec<f64> = vectors.iter().map(|v| norm(v)).collect();

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let sim = if norms[i] > 0.0 && norms[j] > 0.0 {
                    dot(&vectors[i], &vectors[j]) / (norms[i] * norms[j])
                } else {
                    0.0
                };
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Self { n, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Similarities of row `i` against every row, including itself.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

fn dot(a: &[u32], b: &[u32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x as f64 * y as f64)
        .sum()
}

fn norm(v: &[u32]) -> f64 {
    v.iter().map(|&x| (x as f64).powi(2)).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::vectorizer::CountVectorizer;

    const EPSILON: f64 = 1e-10;

    fn build(docs: &[&str]) -> SimilarityMatrix {
        let features = CountVectorizer::new(100).fit_transform(docs);
        SimilarityMatrix::from_features(&features)
    }

    #[test]
    fn test_diagonal_is_one() {
        let sim = build(&["space war", "horror space", "romance drama"]);
        for i in 0..sim.len() {
            assert!((sim.get(i, i) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_symmetric() {
        let sim = build(&["space war alien", "horror space", "romance drama war"]);
        for i in 0..sim.len() {
            for j in 0..sim.len() {
                assert!((sim.get(i, j) - sim.get(j, i)).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_identical_documents_score_one() {
        let sim = build(&["space war", "space war"]);
        assert!((sim.get(0, 1) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let sim = build(&["space war", "romance drama"]);
        assert!(sim.get(0, 1).abs() < EPSILON);
    }

    #[test]
    fn test_partial_overlap() {
        // Vectors (1,1,0,0) and (0,1,1,1): dot = 1, norms = sqrt(2), sqrt(3).
        let sim = build(&["space war", "war romance drama"]);
        let expected = 1.0 / (2.0f64.sqrt() * 3.0f64.sqrt());
        assert!((sim.get(0, 1) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_zero_norm_row_scores_zero_off_diagonal() {
        // Second document is pure stopwords, so its vector is all zeros.
        let sim = build(&["space war", "the of a"]);
        assert!(sim.get(0, 1).abs() < EPSILON);
        assert!((sim.get(1, 1) - 1.0).abs() < EPSILON);
    }
}
