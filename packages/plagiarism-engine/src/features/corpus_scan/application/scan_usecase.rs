//! Corpus Scan UseCase Implementation
//!
//! Drives one scan through its lifecycle:
//! Organizing (corpus → documents), Comparing (pair scanner), Ranking
//! (ranker + result budget), Complete. A corpus failure ends in Failed with
//! one error event.

use crate::config::ScanConfig;
use crate::errors::{EngineError, Result};
use crate::features::corpus_scan::domain::{
    ProgressEvent, ScanEvent, ScanReport, ScanStage, ScanSummary,
};
use crate::features::corpus_scan::infrastructure::{
    organize_documents, rank_results, CancellationToken, PairScanner,
};
use crate::features::corpus_scan::ports::{
    CorpusSource, NoClassifier, PlagiarismClassifier, ProgressSink,
};
use crate::features::normalization::Template;
use crate::shared::models::Document;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Corpus Scan UseCase Trait
pub trait ScanUseCase: Send + Sync {
    /// Pull submissions from the corpus and scan them
    fn run(&self, corpus: &dyn CorpusSource, sink: &dyn ProgressSink) -> Result<ScanReport>;

    /// Scan documents that are already normalized
    fn scan_documents(&self, documents: Vec<Document>, sink: &dyn ProgressSink)
        -> Result<ScanReport>;
}

/// Corpus Scan UseCase Implementation
pub struct ScanUseCaseImpl {
    config: ScanConfig,
    classifier: Arc<dyn PlagiarismClassifier>,
    cancel: CancellationToken,
}

impl ScanUseCaseImpl {
    pub fn new(config: ScanConfig) -> Self {
        Self {
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

    /// Token that stops a running scan between batches
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn enter(
        &self,
        stage: &mut ScanStage,
        next: ScanStage,
        sink: &dyn ProgressSink,
        done: usize,
        total: usize,
    ) -> Result<()> {
        *stage = stage.transition(next)?;
        info!("Scan stage: {}", next);
        sink.emit(ScanEvent::Progress(ProgressEvent::stage(next, done, total)));
        Ok(())
    }

    fn fail(
        &self,
        stage: &mut ScanStage,
        error: EngineError,
        sink: &dyn ProgressSink,
    ) -> EngineError {
        if let Ok(failed) = stage.transition(ScanStage::Failed) {
            *stage = failed;
        }
        warn!("Scan failed: {}", error);
        sink.emit(ScanEvent::Error {
            message: error.to_string(),
        });
        error
    }

    fn compare_and_rank(
        &self,
        stage: &mut ScanStage,
        documents: Vec<Document>,
        sink: &dyn ProgressSink,
        started: Instant,
    ) -> Result<ScanReport> {
        let total_authors = documents
            .iter()
            .map(|d| d.author.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let comparisons_total = PairScanner::pair_count(documents.len());

        self.enter(stage, ScanStage::Comparing, sink, 0, comparisons_total)?;
        let outcome = PairScanner::new(self.config.clone())
            .with_classifier(Arc::clone(&self.classifier))
            .with_cancellation(self.cancel.clone())
            .scan(&documents, sink);

        self.enter(
            stage,
            ScanStage::Ranking,
            sink,
            outcome.comparisons_done,
            comparisons_total,
        )?;
        let qualifying_results = outcome.results.len();
        let results = rank_results(outcome.results, self.config.effective_result_budget());

        let summary = ScanSummary {
            total_authors,
            total_documents: documents.len(),
            total_comparisons: outcome.comparisons_done,
            qualifying_results,
            threshold_used: self.config.threshold,
            author_excluded_pairs: outcome.author_excluded,
            skipped_pairs: outcome.skipped,
            cancelled: outcome.cancelled,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        *stage = stage.transition(ScanStage::Complete)?;
        info!(
            "Scan complete: {} documents, {} comparisons, {} results kept of {} ({} ms)",
            summary.total_documents,
            summary.total_comparisons,
            results.len(),
            qualifying_results,
            summary.elapsed_ms
        );

        sink.emit(ScanEvent::Complete {
            results: results.clone(),
            summary: summary.clone(),
        });
        Ok(ScanReport::new(results, summary))
    }
}

impl ScanUseCase for ScanUseCaseImpl {
    fn run(&self, corpus: &dyn CorpusSource, sink: &dyn ProgressSink) -> Result<ScanReport> {
        let started = Instant::now();
        let mut stage = ScanStage::Idle;

        if let Err(e) = self.config.validate() {
            return Err(self.fail(&mut stage, e.into(), sink));
        }

        info!(
            "Scan started: threshold {}, {} workers",
            self.config.threshold,
            self.config.worker_count()
        );
        self.enter(&mut stage, ScanStage::Organizing, sink, 0, 0)?;
        let submissions = match corpus.submissions() {
            Ok(submissions) => submissions,
            Err(e) => {
                let error = match e {
                    EngineError::Corpus(_) => e,
                    other => EngineError::corpus(other.to_string()),
                };
                return Err(self.fail(&mut stage, error, sink));
            }
        };

        let template = self.config.template.as_deref().map(Template::from_source);
        let documents = organize_documents(&submissions, template.as_ref());
        info!(
            "Organized {} documents from {} authors",
            documents.len(),
            submissions.len()
        );

        self.compare_and_rank(&mut stage, documents, sink, started)
    }

    fn scan_documents(
        &self,
        documents: Vec<Document>,
        sink: &dyn ProgressSink,
    ) -> Result<ScanReport> {
        let started = Instant::now();
        let mut stage = ScanStage::Idle;

        if let Err(e) = self.config.validate() {
            return Err(self.fail(&mut stage, e.into(), sink));
        }

        self.enter(&mut stage, ScanStage::Organizing, sink, 0, 0)?;
        self.compare_and_rank(&mut stage, documents, sink, started)
    }
}
