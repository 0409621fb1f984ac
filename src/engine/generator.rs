//! Random puzzle generation
//!
//! Picks a common START word of a random playable length, samples a pool of
//! same-length words, and draws a TARGET that is neither one letter away
//! from START nor a direct synonym of it.
//!
//! Difficulty is entirely provider-driven. Every stage has a fallback so a
//! puzzle is always produced:
//! 1. filtered pool (no one-letter neighbors, no synonyms)
//! 2. structural pool (synonym rule relaxed)
//! 3. one extra sample that forms a valid `Puzzle` with START
//! 4. hardcoded fallback targets

use crate::config::GeneratorConfig;
use crate::core::{FALLBACK_TARGETS, Puzzle, Word, is_alphabetic, normalize};
use crate::lexicon::{Lexicon, RankedWord};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Same-length words split by usage frequency
#[derive(Debug, Default)]
struct WordBuckets {
    common: Vec<Word>,
    backup: Vec<Word>,
}

impl WordBuckets {
    fn partition(ranked: Vec<RankedWord>, length: usize, common_zipf: f64) -> Self {
        let mut buckets = Self::default();
        for entry in ranked {
            let text = normalize(&entry.word);
            if text.len() != length || !is_alphabetic(&text) {
                continue;
            }
            let Ok(word) = Word::new(text) else {
                continue;
            };
            if entry.zipf >= common_zipf {
                buckets.common.push(word);
            } else {
                buckets.backup.push(word);
            }
        }
        buckets
    }
}

/// Generates START/TARGET pairs from a frequency-ranked word provider
pub struct PuzzleGenerator {
    lexicon: Arc<Lexicon>,
    config: GeneratorConfig,
    rng: Mutex<StdRng>,
    /// Ranked word lists per length, fetched once per session
    buckets: Mutex<FxHashMap<usize, Arc<WordBuckets>>>,
}

impl PuzzleGenerator {
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>, config: GeneratorConfig) -> Self {
        Self::with_rng(lexicon, config, StdRng::from_os_rng())
    }

    /// Deterministic generator for tests and reproducible runs
    #[must_use]
    pub fn with_seed(lexicon: Arc<Lexicon>, config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(lexicon, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(lexicon: Arc<Lexicon>, config: GeneratorConfig, rng: StdRng) -> Self {
        Self {
            lexicon,
            config,
            rng: Mutex::new(rng),
            buckets: Mutex::new(FxHashMap::default()),
        }
    }

    /// Produce a new puzzle; never fails
    pub async fn generate(&self) -> Puzzle {
        let length = {
            let (lo, hi) = (
                self.config.min_length.min(self.config.max_length),
                self.config.min_length.max(self.config.max_length),
            );
            self.rng.lock().random_range(lo..=hi)
        };

        let start = if let Some(word) = self.sample_word(length).await {
            word
        } else {
            warn!(length, "no start word available, using fallback");
            Puzzle::fallback().start().clone()
        };

        let pool = self.candidate_pool(length, &start).await;
        let structural: Vec<Word> = pool
            .into_iter()
            .filter(|w| *w != start && !w.is_one_letter_from(&start))
            .collect();
        let filtered = self.without_synonyms(&start, &structural).await;
        debug!(
            %start,
            structural = structural.len(),
            filtered = filtered.len(),
            "target candidates"
        );

        let target = match self.pick(&filtered).or_else(|| self.pick(&structural)) {
            Some(target) => target,
            None => return self.last_resort(length, start).await,
        };

        match Puzzle::new(start.clone(), target) {
            Ok(puzzle) => {
                info!(%puzzle, "generated puzzle");
                puzzle
            }
            Err(e) => {
                warn!(error = %e, "candidate filtering let a degenerate pair through");
                Self::fallback_for(start)
            }
        }
    }

    /// Uniform pick from the common bucket, else the backup bucket
    async fn sample_word(&self, length: usize) -> Option<Word> {
        let buckets = self.buckets(length).await?;
        let mut rng = self.rng.lock();
        buckets
            .common
            .choose(&mut *rng)
            .or_else(|| buckets.backup.choose(&mut *rng))
            .cloned()
    }

    async fn buckets(&self, length: usize) -> Option<Arc<WordBuckets>> {
        let cached = self.buckets.lock().get(&length).cloned();
        if cached.is_some() {
            return cached;
        }

        match self.lexicon.words_of_length(length).await {
            Ok(ranked) => {
                let buckets = WordBuckets::partition(ranked, length, self.config.common_zipf);
                debug!(
                    length,
                    common = buckets.common.len(),
                    backup = buckets.backup.len(),
                    "ranked words fetched"
                );
                Some(
                    self.buckets
                        .lock()
                        .entry(length)
                        .or_insert_with(|| Arc::new(buckets))
                        .clone(),
                )
            }
            Err(e) => {
                warn!(length, error = %e, "ranked word lookup failed");
                None
            }
        }
    }

    /// Distinct same-length samples other than `start`
    async fn candidate_pool(&self, length: usize, start: &Word) -> Vec<Word> {
        let mut seen = FxHashSet::default();
        let mut pool = Vec::new();

        for _ in 0..self.config.pool_attempts {
            if let Some(word) = self.sample_word(length).await {
                if word != *start && seen.insert(word.clone()) {
                    pool.push(word);
                }
            }
            if pool.len() >= self.config.pool_target {
                break;
            }
        }
        pool
    }

    /// Drop candidates in a direct synonym relation with `start`, either way
    async fn without_synonyms(&self, start: &Word, candidates: &[Word]) -> Vec<Word> {
        let start_synonyms = self.lexicon.synonyms(start.text()).await;
        let mut kept = Vec::new();

        for candidate in candidates {
            if start_synonyms.contains(candidate.text()) {
                continue;
            }
            if self
                .lexicon
                .synonyms(candidate.text())
                .await
                .contains(start.text())
            {
                continue;
            }
            kept.push(candidate.clone());
            if kept.len() >= self.config.filtered_limit {
                break;
            }
        }
        kept
    }

    fn pick(&self, words: &[Word]) -> Option<Word> {
        words.choose(&mut *self.rng.lock()).cloned()
    }

    /// One more sample, then the hardcoded targets
    async fn last_resort(&self, length: usize, start: Word) -> Puzzle {
        if let Some(extra) = self.sample_word(length).await {
            if let Ok(puzzle) = Puzzle::new(start.clone(), extra) {
                info!(%puzzle, "generated puzzle from last-resort sample");
                return puzzle;
            }
        }
        warn!(%start, "no usable target sampled, using fallback target");
        Self::fallback_for(start)
    }

    fn fallback_for(start: Word) -> Puzzle {
        FALLBACK_TARGETS
            .iter()
            .filter_map(|&target| Word::new(target).ok())
            .find_map(|target| Puzzle::new(start.clone(), target).ok())
            .unwrap_or_else(Puzzle::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;
    use pretty_assertions::assert_eq;

    fn four_letter_config() -> GeneratorConfig {
        GeneratorConfig {
            min_length: 4,
            max_length: 4,
            ..GeneratorConfig::default()
        }
    }

    fn generator(source: MemoryLexicon, seed: u64) -> (Arc<MemoryLexicon>, PuzzleGenerator) {
        let source = Arc::new(source);
        let lexicon = Arc::new(Lexicon::new(source.clone()));
        (
            source,
            PuzzleGenerator::with_seed(lexicon, four_letter_config(), seed),
        )
    }

    fn texts(puzzle: &Puzzle) -> (&str, &str) {
        (puzzle.start().text(), puzzle.target().text())
    }

    #[tokio::test]
    async fn never_same_word_or_one_letter_apart() {
        for seed in 0..30 {
            let (_, generator) = generator(
                MemoryLexicon::new()
                    .with_ranked("cold", 5.0)
                    .with_ranked("gold", 5.0)
                    .with_ranked("bold", 5.0)
                    .with_ranked("cord", 5.0)
                    .with_ranked("warm", 5.0)
                    .with_ranked("time", 5.0),
                seed,
            );
            let puzzle = generator.generate().await;
            assert_ne!(puzzle.start(), puzzle.target());
            assert!(!puzzle.start().is_one_letter_from(puzzle.target()));
        }
    }

    #[tokio::test]
    async fn direct_synonyms_excluded_both_directions() {
        let related = [("cold", "cool"), ("warm", "cool")];
        for seed in 0..30 {
            let (_, generator) = generator(
                MemoryLexicon::new()
                    .with_ranked("cold", 5.0)
                    .with_ranked("cool", 5.0)
                    .with_ranked("warm", 5.0)
                    .with_ranked("gold", 5.0)
                    .with_synonyms("cold", &["cool"])
                    .with_synonyms("warm", &["cool"]),
                seed,
            );
            let puzzle = generator.generate().await;
            let (start, target) = texts(&puzzle);
            for (a, b) in related {
                assert!(
                    !((start == a && target == b) || (start == b && target == a)),
                    "synonym pair {start}/{target} generated"
                );
            }
        }
    }

    #[tokio::test]
    async fn provider_outage_yields_fallback_pair() {
        let (_, generator) = generator(MemoryLexicon::new().failing(), 7);
        let puzzle = generator.generate().await;
        assert_eq!(texts(&puzzle), ("love", "time"));
    }

    #[tokio::test]
    async fn sparse_provider_uses_fallback_target() {
        let (_, generator) = generator(MemoryLexicon::new().with_ranked("cold", 5.0), 1);
        let puzzle = generator.generate().await;
        assert_eq!(texts(&puzzle), ("cold", "love"));
    }

    #[tokio::test]
    async fn neighbors_only_falls_through_to_fallback() {
        for seed in 0..10 {
            let (_, generator) = generator(
                MemoryLexicon::new()
                    .with_ranked("cold", 5.0)
                    .with_ranked("gold", 5.0)
                    .with_ranked("bold", 5.0),
                seed,
            );
            let puzzle = generator.generate().await;
            assert_eq!(puzzle.target().text(), "love");
        }
    }

    #[tokio::test]
    async fn synonym_rule_relaxed_before_giving_up() {
        let (_, generator) = generator(
            MemoryLexicon::new()
                .with_ranked("cold", 5.0)
                .with_ranked("cool", 5.0)
                .with_synonyms("cold", &["cool"])
                .with_synonyms("cool", &["cold"]),
            3,
        );
        let puzzle = generator.generate().await;
        let mut pair = [puzzle.start().text(), puzzle.target().text()];
        pair.sort_unstable();
        assert_eq!(pair, ["cold", "cool"]);
    }

    #[tokio::test]
    async fn common_words_preferred_for_start() {
        for seed in 0..10 {
            let (_, generator) = generator(
                MemoryLexicon::new()
                    .with_ranked("cold", 5.0)
                    .with_ranked("warm", 3.0)
                    .with_ranked("time", 4.4),
                seed,
            );
            let puzzle = generator.generate().await;
            assert_eq!(puzzle.start().text(), "cold");
        }
    }

    #[tokio::test]
    async fn backup_bucket_used_without_common_words() {
        let (_, generator) = generator(
            MemoryLexicon::new()
                .with_ranked("cold", 2.0)
                .with_ranked("warm", 1.0),
            11,
        );
        let puzzle = generator.generate().await;
        let mut pair = [puzzle.start().text(), puzzle.target().text()];
        pair.sort_unstable();
        assert_eq!(pair, ["cold", "warm"]);
    }

    #[tokio::test]
    async fn ranked_list_fetched_once_per_length() {
        let (source, generator) = generator(
            MemoryLexicon::new()
                .with_ranked("cold", 5.0)
                .with_ranked("warm", 5.0),
            5,
        );
        generator.generate().await;
        generator.generate().await;
        assert_eq!(source.ranked_calls(), 1);
    }

    #[tokio::test]
    async fn same_seed_same_puzzle() {
        let data = || {
            MemoryLexicon::new()
                .with_ranked("cold", 5.0)
                .with_ranked("warm", 5.0)
                .with_ranked("time", 5.0)
                .with_ranked("fish", 5.0)
        };
        let (_, first) = generator(data(), 42);
        let (_, second) = generator(data(), 42);
        assert_eq!(first.generate().await, second.generate().await);
    }

    #[test]
    fn partition_filters_and_splits() {
        let ranked = vec![
            RankedWord::new("Cold", 5.2),
            RankedWord::new("warm", 4.5),
            RankedWord::new("vane", 2.0),
            RankedWord::new("a-ok", 6.0),
            RankedWord::new("colder", 6.0),
        ];
        let buckets = WordBuckets::partition(ranked, 4, 4.5);
        let common: Vec<&str> = buckets.common.iter().map(Word::text).collect();
        let backup: Vec<&str> = buckets.backup.iter().map(Word::text).collect();
        assert_eq!(common, vec!["cold", "warm"]);
        assert_eq!(backup, vec!["vane"]);
    }
}
