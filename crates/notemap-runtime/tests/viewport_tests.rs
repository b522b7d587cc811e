use std::sync::Arc;

use notemap_runtime::{
    Error, GENERATION_FAILED_MESSAGE, GenerationStatus, TreeGenerator, Viewport,
};
use notemap_testing::fixtures::{geography_sources, geography_tree, sample_tree, two_sources};
use notemap_testing::generators::{
    FailingGenerator, GatedGenerator, ScriptedGenerator, StaticGenerator,
};
use notemap_types::Source;

#[tokio::test]
async fn test_geography_scenario_reaches_ready() {
    let generator = StaticGenerator::new(geography_tree());
    let mut viewport = Viewport::new();
    viewport.select_source("a");

    assert!(viewport.generate(&geography_sources(), &generator).await);

    assert_eq!(generator.calls(), 1);
    assert_eq!(generator.inputs(), vec!["Paris is the capital of France.".to_string()]);
    let tree = viewport.tree().expect("status should be Ready");
    assert_eq!(tree.label, "Geography");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].label, "France");
    assert!(tree.has_children());
    assert!(!tree.children[0].has_children());
    assert!(viewport.generated_at().is_some());
}

#[tokio::test]
async fn test_all_sources_are_joined_in_order() {
    let generator = StaticGenerator::new(sample_tree());
    let mut viewport = Viewport::new().with_source("all");

    viewport.generate(&two_sources(), &generator).await;

    assert_eq!(generator.inputs(), vec!["X\n\nY".to_string()]);
}

#[tokio::test]
async fn test_unset_source_is_noop() {
    let generator = StaticGenerator::new(sample_tree());
    let mut viewport = Viewport::new();
    viewport.select_source("");

    assert!(!viewport.generate(&geography_sources(), &generator).await);
    assert_eq!(viewport.status(), &GenerationStatus::Idle);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_blank_content_is_noop() {
    let generator = StaticGenerator::new(sample_tree());
    let sources = vec![Source::new("blank", "blank.txt", " \n\n ")];
    let mut viewport = Viewport::new().with_source("blank");
    viewport.set_zoom(0.4);

    assert!(!viewport.generate(&sources, &generator).await);
    assert_eq!(viewport.status(), &GenerationStatus::Idle);
    assert!((viewport.zoom() - 1.4).abs() < 1e-9);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_failure_then_success() {
    let generator = ScriptedGenerator::new([
        Err(Error::Generator("upstream timeout".to_string())),
        Ok(geography_tree()),
    ]);
    let mut viewport = Viewport::new().with_source("a");

    assert!(viewport.generate(&geography_sources(), &generator).await);
    assert_eq!(
        viewport.status(),
        &GenerationStatus::Failed(GENERATION_FAILED_MESSAGE.to_string())
    );

    viewport.zoom_in();
    assert!(viewport.generate(&geography_sources(), &generator).await);
    assert!(matches!(viewport.status(), GenerationStatus::Ready(_)));
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_every_failure_collapses_to_one_message() {
    let generator = FailingGenerator::new("malformed JSON at line 3");
    let mut viewport = Viewport::new().with_source("a");

    viewport.generate(&geography_sources(), &generator).await;

    assert_eq!(generator.calls(), 1);
    match viewport.status() {
        GenerationStatus::Failed(message) => {
            assert_eq!(message, GENERATION_FAILED_MESSAGE);
            assert!(!message.contains("malformed"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_regenerate_clears_previous_tree() {
    let generator = GatedGenerator::new();
    let mut viewport = Viewport::new().with_source("a");

    let first = viewport.begin_generate(&geography_sources()).unwrap();
    viewport.complete(first.seq, Ok(sample_tree()));
    assert!(viewport.tree().is_some());

    let second = viewport.begin_generate(&geography_sources()).unwrap();
    assert!(viewport.tree().is_none());
    assert!(viewport.is_loading());

    let pending = generator.generate(second.text.clone());
    assert!(generator.release(Ok(geography_tree())));
    let result = pending.await;
    assert!(viewport.complete(second.seq, result));
    assert_eq!(viewport.tree().map(|t| t.label.as_str()), Some("Geography"));
}

#[tokio::test]
async fn test_result_after_teardown_is_discarded() {
    let generator = GatedGenerator::new();
    let mut viewport = Viewport::new().with_source("a");

    let request = viewport.begin_generate(&geography_sources()).unwrap();
    let pending = generator.generate(request.text);
    assert_eq!(generator.pending(), 1);

    viewport.teardown();
    assert!(viewport.begin_generate(&geography_sources()).is_none());

    generator.release(Ok(geography_tree()));
    let result = pending.await;
    assert!(!viewport.complete(request.seq, result));
    assert!(viewport.tree().is_none());
}

#[tokio::test]
async fn test_only_latest_sequence_applies() {
    let mut viewport = Viewport::new().with_source("a");

    let first = viewport.begin_generate(&geography_sources()).unwrap();
    viewport.complete(first.seq, Err(Error::Generator("boom".to_string())));
    let second = viewport.begin_generate(&geography_sources()).unwrap();
    assert!(second.seq > first.seq);

    // A late duplicate answer for the first request must not land
    assert!(!viewport.complete(first.seq, Ok(sample_tree())));
    assert!(viewport.is_loading());

    assert!(viewport.complete(second.seq, Ok(geography_tree())));
    assert_eq!(
        viewport.tree().map(Arc::as_ref).map(|t| t.label.as_str()),
        Some("Geography")
    );
}
