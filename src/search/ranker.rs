//! Ranking of doctors and articles against a query

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use super::scoring::{classify, score_article, score_doctor};
use super::synonyms::expand_query;
use crate::types::{Article, Doctor, MatchType, ResultDetail, ScoredResult};

/// Upper bound (exclusive) of the jitter added to published scores
pub const MAX_JITTER: f64 = 0.1;

/// Source of the small perturbation added to each published score
pub trait Jitter {
    /// Next jitter value in `[0, MAX_JITTER)`
    fn sample(&mut self) -> f64;
}

/// Uniform jitter drawn from a random number generator
#[derive(Debug, Clone)]
pub struct UniformJitter<R = ThreadRng> {
    rng: R,
}

impl UniformJitter<ThreadRng> {
    /// Jitter backed by the thread-local RNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for UniformJitter<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UniformJitter<R> {
    /// Jitter backed by a caller-supplied RNG, e.g. a seeded `StdRng`
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Jitter for UniformJitter<R> {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_JITTER)
    }
}

/// Jitter that never perturbs scores
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// Rank every doctor and article against `query`
///
/// Returns results scoring above the minimum threshold, sorted by published
/// score (highest first). Equal scores keep doctors before articles and each
/// dataset's original order.
pub fn search<J>(
    query: &str,
    doctors: &[Doctor],
    articles: &[Article],
    jitter: &mut J,
) -> Vec<ScoredResult>
where
    J: Jitter + ?Sized,
{
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let query = trimmed.to_lowercase();
    let terms = expand_query(&query);
    debug!(query = %trimmed, terms = ?terms.iter().collect::<Vec<_>>(), "expanded search terms");

    let mut results = Vec::new();

    for doctor in doctors {
        let raw = score_doctor(doctor, &query, &terms);
        if let Some(match_type) = classify(raw) {
            results.push(ScoredResult {
                title: doctor.name.clone(),
                detail: ResultDetail::Doctor {
                    department: doctor.department.clone(),
                    specialization: doctor.specialization.clone(),
                },
                score: publish(raw, jitter),
                match_type,
                raw_score: raw,
            });
        }
    }

    for article in articles {
        let raw = score_article(article, &terms);
        if let Some(match_type) = classify(raw) {
            results.push(ScoredResult {
                title: article.title.clone(),
                detail: ResultDetail::Article {
                    excerpt: article.excerpt(),
                    content: article.content.clone(),
                    tags: article.tags.clone(),
                },
                score: publish(raw, jitter),
                match_type,
                raw_score: raw,
            });
        }
    }

    // sort_by is stable
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    let strong = results
        .iter()
        .filter(|r| r.match_type == MatchType::Strong)
        .count();
    info!(
        query = %trimmed,
        results = results.len(),
        top_score = results.first().map(|r| r.score),
        strong,
        "search completed"
    );

    results
}

fn publish<J: Jitter + ?Sized>(raw: f64, jitter: &mut J) -> f64 {
    (raw + jitter.sample()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn doctors() -> Vec<Doctor> {
        vec![
            Doctor::new("Dr. Minh", "Cardiology", "Heart Failure"),
            Doctor::new("Dr. Lan", "Pediatrics", "Newborn Care"),
            Doctor::new("Dr. Tuan", "Dermatology", "Acne and Rash"),
        ]
    }

    fn articles() -> Vec<Article> {
        vec![
            Article::with_tags(
                "Living with heart disease",
                "Small daily changes protect a cardiac patient.",
                vec!["heart".to_string(), "lifestyle".to_string()],
            ),
            Article::new("Caring for baby skin", "Gentle products for infant rash."),
        ]
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        assert!(search("", &doctors(), &articles(), &mut NoJitter).is_empty());
        assert!(search("   ", &doctors(), &articles(), &mut NoJitter).is_empty());
    }

    #[test]
    fn test_heart_query_ranks_cardiology() {
        let results = search("Heart", &doctors(), &articles(), &mut NoJitter);
        assert!(!results.is_empty());
        assert!(results.iter().any(|r| r.title == "Dr. Minh"));
        assert!(results.iter().any(|r| r.title == "Living with heart disease"));
        assert!(results.iter().all(|r| r.title != "Dr. Lan"));
        assert_eq!(results[0].match_type, MatchType::Strong);
    }

    #[test]
    fn test_results_sorted_and_stable() {
        let doctors = vec![
            Doctor::new("A", "Oncology", "Tumor Board"),
            Doctor::new("B", "Oncology", "Tumor Board"),
            Doctor::new("C", "Oncology", "Tumor Board"),
        ];
        let results = search("oncology", &doctors, &[], &mut NoJitter);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_doctors_precede_articles_on_ties() {
        let doctors = vec![Doctor::new("zzqx", "", "")];
        let articles = vec![Article::new("x", "zzqx")];
        // Both score 0.9: exact query, substring, fuzzy
        let results = search("zzqx", &doctors, &articles, &mut NoJitter);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_doctor());
        assert!(results[1].is_article());
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_score_equals_raw_without_jitter() {
        for result in search("rash", &doctors(), &articles(), &mut NoJitter) {
            assert_eq!(result.score, result.raw_score);
        }
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let mut jitter = UniformJitter::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let value = jitter.sample();
            assert!((0.0..MAX_JITTER).contains(&value));
        }

        let mut jitter = UniformJitter::with_rng(StdRng::seed_from_u64(11));
        for result in search("heart", &doctors(), &articles(), &mut jitter) {
            assert!((0.0..=1.0).contains(&result.score));
            assert!(result.score >= result.raw_score);
            assert!(result.score < result.raw_score + MAX_JITTER);
        }
    }

    #[test]
    fn test_jitter_does_not_change_match_type() {
        let mut jitter = UniformJitter::with_rng(StdRng::seed_from_u64(3));
        for result in search("skin rash", &doctors(), &articles(), &mut jitter) {
            let expected = if result.raw_score > 0.5 {
                MatchType::Strong
            } else {
                MatchType::Partial
            };
            assert_eq!(result.match_type, expected);
        }
    }

    #[test]
    fn test_article_excerpt_in_result() {
        let results = search("baby", &[], &articles(), &mut NoJitter);
        assert_eq!(results.len(), 1);
        match &results[0].detail {
            ResultDetail::Article { excerpt, .. } => {
                assert_eq!(excerpt, "Gentle products for infant rash....");
            }
            other => panic!("expected article, got {other:?}"),
        }
    }
}
