//! End-to-end corpus scans through the public API

use plagiarism_engine::config::ScanConfig;
use plagiarism_engine::features::corpus_scan::ports::{
    CollectingSink, InMemoryCorpus, NoopSink, SubmissionFile,
};
use plagiarism_engine::features::corpus_scan::{
    compare_documents, CancellationToken, ScanEvent, ScanStage, ScanUseCase, ScanUseCaseImpl,
};
use plagiarism_engine::{Document, EngineError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::mpsc;
use std::thread;

const ORIGINAL: &str = "int x=1;\nint y=2;\nint z=3;\nint w=4;";
const RENAMED: &str = "int a=1;\nint b=2;\nint c=3;\nint d=4;";

/// Distinct program per (author, file), sharing no exact block
fn unique_program(author: usize, file: usize) -> String {
    (0..50)
        .map(|line| {
            let value = author * 1000 + file * 100 + line;
            format!("int v{}_{}_{} = {};", author, file, line, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn ten_authors_two_files() -> InMemoryCorpus {
    let mut corpus = InMemoryCorpus::new();
    for author in 0..10 {
        for file in 0..2 {
            corpus.add(
                format!("student{:02}", author),
                SubmissionFile::text(format!("hw{}.c", file), unique_program(author, file)),
            );
        }
    }
    corpus
}

// ═══════════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_renamed_copy_reported_as_exact() {
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "main.c", ORIGINAL)
        .with_file("bob", "main.c", RENAMED);

    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&corpus, &NoopSink)
        .unwrap();

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];
    assert_eq!((result.user1.as_str(), result.user2.as_str()), ("alice", "bob"));
    assert!(result.is_exact_match);
    assert_eq!(result.similarity, 1.0);
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].line_count, 4);
    assert!(result.segments[0].has_identifier_changes);
    assert_eq!(result.similar_segments, vec![ORIGINAL.to_string()]);
    assert_eq!(result.original_code2.as_deref(), Some(RENAMED));
}

#[test]
fn test_disjoint_vocabulary_not_reported() {
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "a.py", "for item in items:\n    print(item)\n")
        .with_file("bob", "b.py", "while running:\n    tick += 1\n");

    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&corpus, &NoopSink)
        .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.summary.total_comparisons, 1);
    assert_eq!(report.summary.qualifying_results, 0);
}

#[test]
fn test_ten_authors_two_files_counts_every_pair() {
    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&ten_authors_two_files(), &NoopSink)
        .unwrap();

    assert_eq!(report.summary.total_authors, 10);
    assert_eq!(report.summary.total_documents, 20);
    assert_eq!(report.summary.total_comparisons, 190);
    assert_eq!(report.summary.author_excluded_pairs, 10);
    assert!(!report.summary.cancelled);
    assert!(report.results.iter().all(|r| r.user1 != r.user2));
}

#[test]
fn test_same_author_copies_never_reported() {
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "v1.c", ORIGINAL)
        .with_file("alice", "v2.c", ORIGINAL)
        .with_file("bob", "other.c", "float f(float q) { return q / 2.0f; }");

    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&corpus, &NoopSink)
        .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.summary.author_excluded_pairs, 1);
    assert_eq!(report.summary.total_comparisons, 3);
}

#[test]
fn test_unreadable_file_skipped_not_fatal() {
    let mut corpus = InMemoryCorpus::new()
        .with_file("alice", "main.c", ORIGINAL)
        .with_file("bob", "main.c", RENAMED);
    corpus.add("carol", SubmissionFile::from_bytes("main.c", vec![0xc3, 0x28]));

    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&corpus, &NoopSink)
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.summary.total_documents, 3);
    assert_eq!(report.summary.total_comparisons, 3);
    assert_eq!(report.summary.skipped_pairs, 2);
}

#[test]
fn test_ranking_exact_first_and_budget() {
    let shared_tokens = "int total = 0;\ntotal = total + 1;\nreturn total;";
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "a.c", ORIGINAL)
        .with_file("bob", "b.c", RENAMED)
        .with_file("carol", "c.c", shared_tokens)
        .with_file("dave", "d.c", shared_tokens);

    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&corpus, &NoopSink)
        .unwrap();

    assert!(report.results.len() >= 2);
    assert!(report.results[0].is_exact_match);
    assert_eq!(report.results[0].user1, "alice");
    assert_eq!(report.results[0].user2, "bob");
    assert!(!report.results[1].is_exact_match);
    assert_eq!(report.results[1].similarity, 1.0);

    let budgeted = ScanUseCaseImpl::new(ScanConfig::default().with_result_budget(1))
        .run(&corpus, &NoopSink)
        .unwrap();
    assert_eq!(budgeted.results.len(), 1);
    assert!(budgeted.summary.qualifying_results >= 2);
}

#[test]
fn test_template_lines_do_not_count_as_copying() {
    let template = "#include <stdio.h>\nint main(void) {\n    setup();\n    prepare();\n    run();\n    \
                    return 0;\n}";
    let alice = format!("{}\n/* alice */ int q = 5;", template);
    let bob = format!("{}\nfloat k = 2.0f;", template);
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "main.c", alice)
        .with_file("bob", "main.c", bob);

    let without = ScanUseCaseImpl::new(ScanConfig::default().with_threshold(0.5))
        .run(&corpus, &NoopSink)
        .unwrap();
    assert!(without.results.iter().any(|r| r.is_exact_match));

    let config = ScanConfig::default().with_threshold(0.5).with_template(template);
    let with = ScanUseCaseImpl::new(config)
        .run(&corpus, &NoopSink)
        .unwrap();
    assert!(with.results.iter().all(|r| !r.is_exact_match));
}

// ═══════════════════════════════════════════════════════════════════════════
// Progress, cancellation and failure
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_progress_every_interval_over_channel() {
    let (tx, rx) = mpsc::channel();
    let consumer = thread::spawn(move || rx.iter().collect::<Vec<ScanEvent>>());

    let report = ScanUseCaseImpl::new(ScanConfig::default().with_workers(1))
        .run(&ten_authors_two_files(), &tx)
        .unwrap();
    drop(tx);
    let events = consumer.join().unwrap();

    let comparing: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            ScanEvent::Progress(p) if p.current_pair.is_some() => Some(p.comparisons_done),
            _ => None,
        })
        .collect();
    assert_eq!(comparing, vec![100, 190]);

    match events.last() {
        Some(ScanEvent::Complete { results, summary }) => {
            assert_eq!(results.len(), report.results.len());
            assert_eq!(summary.total_comparisons, 190);
        }
        other => panic!("expected completion event, got {:?}", other),
    }
}

#[test]
fn test_progress_counts_monotonic_on_parallel_pool() {
    let sink = CollectingSink::new();
    ScanUseCaseImpl::new(ScanConfig::default().with_progress_interval(7).with_workers(4))
        .run(&ten_authors_two_files(), &sink)
        .unwrap();

    let done: Vec<usize> = sink
        .progress()
        .iter()
        .filter(|p| p.stage == ScanStage::Comparing && p.current_pair.is_some())
        .map(|p| p.comparisons_done)
        .collect();
    assert_eq!(done.len(), 28);
    assert!(done.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(done.last(), Some(&190));
}

#[test]
fn test_cancelled_scan_still_reports() {
    let token = CancellationToken::new();
    token.cancel();
    let usecase = ScanUseCaseImpl::new(ScanConfig::default()).with_cancellation(token);

    let report = usecase.run(&ten_authors_two_files(), &NoopSink).unwrap();
    assert!(report.summary.cancelled);
    assert_eq!(report.summary.total_comparisons, 0);
    assert!(report.results.is_empty());
}

#[test]
fn test_corpus_failure_is_single_error_event() {
    struct Unavailable;
    impl plagiarism_engine::CorpusSource for Unavailable {
        fn submissions(&self) -> plagiarism_engine::Result<Vec<plagiarism_engine::Submission>> {
            Err(EngineError::corpus("storage offline"))
        }
    }

    let sink = CollectingSink::new();
    let err = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&Unavailable, &sink)
        .unwrap_err();

    assert!(matches!(err, EngineError::Corpus(_)));
    let errors = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, ScanEvent::Error { .. }))
        .count();
    assert_eq!(errors, 1);
    assert!(!sink.events().iter().any(|e| matches!(e, ScanEvent::Complete { .. })));
}

// ═══════════════════════════════════════════════════════════════════════════
// Report and drill-down
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_report_json_contract() {
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "main.c", ORIGINAL)
        .with_file("bob", "main.c", RENAMED);
    let report = ScanUseCaseImpl::new(ScanConfig::default())
        .run(&corpus, &NoopSink)
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert!(json["timestamp"].is_string());
    assert_eq!(json["summary"]["total_comparisons"], 1);
    assert_eq!(json["results"][0]["is_exact_match"], true);
    assert_eq!(json["results"][0]["similarity"], 1.0);
    assert_eq!(json["results"][0]["segments"][0]["line_count"], 4);
}

#[test]
fn test_compare_documents_drill_down() {
    let a = Document::new("alice", "main.c", ORIGINAL);
    let b = Document::new("bob", "main.c", RENAMED);
    let details = compare_documents(&a, &b, &ScanConfig::default());

    assert_eq!(details.normalized_code1, details.normalized_code2);
    assert_eq!(details.token_similarity, 1.0);
    assert_eq!(details.line_matches, 4);
    assert_eq!(details.segments.len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_same_author_pairs_never_reported(
        authors in prop::collection::vec(0usize..4, 2..8),
    ) {
        let mut corpus = InMemoryCorpus::new();
        for (i, author) in authors.iter().enumerate() {
            let file = SubmissionFile::text(format!("f{}.c", i), ORIGINAL);
            corpus.add(format!("user{}", author), file);
        }

        let report = ScanUseCaseImpl::new(ScanConfig::default())
            .run(&corpus, &NoopSink)
            .unwrap();

        let n = authors.len();
        prop_assert_eq!(report.summary.total_comparisons, n * (n - 1) / 2);
        for result in &report.results {
            prop_assert_ne!(&result.user1, &result.user2);
        }
    }
}
