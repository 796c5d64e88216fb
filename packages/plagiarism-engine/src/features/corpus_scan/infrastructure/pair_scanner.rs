//! Pair Scanner
//!
//! Compares every unordered document pair `(i, j), i < j` once.
//!
//! # Policy per pair
//!
//! 1. Same author: excluded, counted
//! 2. Either document empty or unreadable: skipped, counted
//! 3. Threshold above the exact-match gate: merged segments → exact result (1.0)
//! 4. Otherwise token-set similarity above the threshold → scored result,
//!    with segments only above the segment floor
//!
//! # Concurrency
//!
//! Pairs are split into batches of `progress_interval` and distributed over a
//! rayon pool. Documents are shared read-only. Each batch checks the
//! cancellation token before starting and emits one progress event when done.

use super::cancellation::CancellationToken;
use crate::config::{ConfigError, ScanConfig};
use crate::features::clone_detection::{score, SegmentMatcher};
use crate::features::corpus_scan::domain::{ComparisonResult, ProgressEvent, ScanEvent, ScanStage};
use crate::features::corpus_scan::ports::{NoClassifier, PlagiarismClassifier, ProgressSink};
use crate::shared::models::Document;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one pair
#[derive(Debug)]
enum PairOutcome {
    AuthorExcluded,
    Skipped,
    NoMatch,
    Match(Box<ComparisonResult>),
}

/// Raw scan output, results in scan order
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub results: Vec<ComparisonResult>,
    pub comparisons_done: usize,
    pub comparisons_total: usize,
    pub author_excluded: usize,
    pub skipped: usize,
    pub cancelled: bool,
}

/// All-pairs scanner
pub struct PairScanner {
    config: ScanConfig,
    matcher: SegmentMatcher,
    classifier: Arc<dyn PlagiarismClassifier>,
    cancel: CancellationToken,
}

impl PairScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            matcher: SegmentMatcher::with_min_lines(config.min_match_lines),
            config,
            classifier: Arc::new(NoClassifier),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn PlagiarismClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Number of unordered pairs over `n` documents
    pub fn pair_count(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }

    /// Scan all pairs on the configured pool
    pub fn scan(&self, documents: &[Document], sink: &dyn ProgressSink) -> ScanOutcome {
        match self.config.workers {
            Some(workers) => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(|| self.scan_pairs(documents, sink)),
                Err(e) => {
                    let error = ConfigError::WorkerPool(format!("{} threads: {}", workers, e));
                    warn!("{}, using global pool", error);
                    self.scan_pairs(documents, sink)
                }
            },
            None => self.scan_pairs(documents, sink),
        }
    }

    fn scan_pairs(&self, documents: &[Document], sink: &dyn ProgressSink) -> ScanOutcome {
        let n = documents.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();
        let total = pairs.len();
        let interval = self.config.progress_interval.max(1);

        let done = AtomicUsize::new(0);
        let author_excluded = AtomicUsize::new(0);
        let skipped = AtomicUsize::new(0);
        let results: Mutex<Vec<ComparisonResult>> = Mutex::new(Vec::new());
        let progress_lock = Mutex::new(());

        pairs
            .par_chunks(interval)
            .enumerate()
            .for_each(|(batch, chunk)| {
                if self.cancel.is_cancelled() {
                    return;
                }

                let mut found = Vec::new();
                for (offset, &(i, j)) in chunk.iter().enumerate() {
                    let pair_index = batch * interval + offset;
                    match self.compare_pair(&documents[i], &documents[j], pair_index) {
                        PairOutcome::AuthorExcluded => {
                            author_excluded.fetch_add(1, Ordering::Relaxed);
                        }
                        PairOutcome::Skipped => {
                            skipped.fetch_add(1, Ordering::Relaxed);
                        }
                        PairOutcome::NoMatch => {}
                        PairOutcome::Match(result) => found.push(*result),
                    }
                }
                if !found.is_empty() {
                    results.lock().extend(found);
                }

                // Serialized so counts reach the sink in increasing order
                let _guard = progress_lock.lock();
                let processed = done.fetch_add(chunk.len(), Ordering::AcqRel) + chunk.len();
                let current_pair = chunk
                    .last()
                    .map(|&(i, j)| format!("{} vs {}", documents[i].descriptor(), documents[j].descriptor()));
                sink.emit(ScanEvent::Progress(ProgressEvent {
                    stage: ScanStage::Comparing,
                    comparisons_done: processed,
                    comparisons_total: total,
                    current_pair,
                }));
            });

        let mut results = results.into_inner();
        results.sort_by_key(|r| r.pair_index);

        let comparisons_done = done.into_inner();
        let cancelled = comparisons_done < total && self.cancel.is_cancelled();
        debug!(
            "Pair scan finished: {}/{} pairs, {} results{}",
            comparisons_done,
            total,
            results.len(),
            if cancelled { " (cancelled)" } else { "" }
        );

        ScanOutcome {
            results,
            comparisons_done,
            comparisons_total: total,
            author_excluded: author_excluded.into_inner(),
            skipped: skipped.into_inner(),
            cancelled,
        }
    }

    fn compare_pair(&self, a: &Document, b: &Document, pair_index: usize) -> PairOutcome {
        if a.author == b.author {
            return PairOutcome::AuthorExcluded;
        }
        if a.is_empty() || b.is_empty() {
            return PairOutcome::Skipped;
        }

        let exact_checked = self.config.runs_exact_match_first();
        if exact_checked {
            let segments = self.matcher.find_segments(a, b);
            if !segments.is_empty() {
                let result = ComparisonResult::exact(a, b, segments, pair_index);
                return PairOutcome::Match(Box::new(self.enrich(result, a, b)));
            }
        }

        let similarity = score(&a.normalized_text, &b.normalized_text);
        if similarity <= self.config.threshold {
            return PairOutcome::NoMatch;
        }

        // An exact check that found nothing already answers the segment question
        let segments = if similarity > self.config.segment_floor && !exact_checked {
            self.matcher.find_segments(a, b)
        } else {
            Vec::new()
        };

        let result = ComparisonResult::scored(a, b, similarity, segments, pair_index);
        PairOutcome::Match(Box::new(self.enrich(result, a, b)))
    }

    /// Classifier opinion, only for recorded results
    fn enrich(&self, result: ComparisonResult, a: &Document, b: &Document) -> ComparisonResult {
        if !self.classifier.has_model() {
            return result;
        }
        result.with_prediction(self.classifier.predict(&a.raw_text, &b.raw_text))
    }
}
