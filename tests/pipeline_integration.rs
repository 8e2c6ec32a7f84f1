//! End-to-end detection against bundles staged on the real file system.
//! External tools are replaced by canned listers/extractors.

mod support;

use appdetective::fs::RealFileSystem;
use appdetective::tools::{MockLister, MockStringExtractor};
use appdetective::{
    Category, DetectionContext, Outcome, PipelineConfig, PipelineOrchestrator, TechStack,
    Technology,
};
use futures_util::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use support::BundleFixture;
use tempfile::TempDir;

fn orchestrator(lister: MockLister, extractor: MockStringExtractor) -> PipelineOrchestrator {
    orchestrator_with(lister, extractor, PipelineConfig::default())
}

fn orchestrator_with(
    lister: MockLister,
    extractor: MockStringExtractor,
    config: PipelineConfig,
) -> PipelineOrchestrator {
    let context = DetectionContext::with_collaborators(
        Arc::new(RealFileSystem),
        Arc::new(lister),
        Arc::new(extractor),
        config.with_strings_timeout(Duration::from_millis(100)),
    );
    PipelineOrchestrator::new(Arc::new(context))
}

fn names(outcome: &Outcome) -> Vec<&'static str> {
    outcome.stack().unwrap().canonical_names()
}

#[tokio::test]
async fn test_electron_shell_bundle() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Chat")
        .with_info_plist("Chat", Some("public.app-category.social-networking"))
        .with_executable("Chat")
        .with_framework("Electron Framework.framework")
        .with_framework("Squirrel.framework")
        .with_resource("app.asar");

    let detection = orchestrator(
        MockLister::returning("@rpath/Electron Framework.framework/Electron Framework"),
        MockStringExtractor::returning(""),
    )
    .detect(bundle.path())
    .await;

    assert_eq!(names(&detection.outcome), vec!["electron"]);
    assert_eq!(detection.category, Category::SocialNetworking);
    let exe = detection.executable.unwrap();
    assert_eq!(exe.name, "Chat");
    assert!(!exe.from_fallback);
}

#[tokio::test]
async fn test_react_native_from_nested_jsbundle() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Notes")
        .with_executable("Notes")
        .with_resource("bundles/app/ui.jsbundle");

    let detection = orchestrator(MockLister::failing(), MockStringExtractor::failing())
        .detect(bundle.path())
        .await;

    assert_eq!(names(&detection.outcome), vec!["react-native"]);
    assert!(detection.executable.unwrap().from_fallback);
    assert_eq!(detection.category, Category::Uncategorized);
}

#[tokio::test]
async fn test_storyboard_with_swiftui_linkage() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Weather")
        .with_info_plist("Weather", Some("public.app-category.weather"))
        .with_executable("Weather")
        .with_resource_dir("Main.storyboardc");

    let detection = orchestrator(
        MockLister::returning(
            "/System/Library/Frameworks/SwiftUI.framework/Versions/A/SwiftUI (compatibility version 1.0.0)",
        ),
        MockStringExtractor::returning(""),
    )
    .detect(bundle.path())
    .await;

    assert_eq!(names(&detection.outcome), vec!["swiftui", "appkit"]);
    assert!(detection.evidence.compiled_interface);
    assert_eq!(detection.category, Category::Weather);
}

#[tokio::test]
async fn test_pure_fallback_on_real_layout() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Plain")
        .with_info_plist("Plain", None)
        .with_executable("Plain");

    let outcome = orchestrator(MockLister::failing(), MockStringExtractor::hanging())
        .classify(bundle.path())
        .await;

    assert_eq!(outcome, Outcome::Classified(TechStack::single(Technology::AppKit)));
}

#[tokio::test]
async fn test_declared_executable_missing_and_no_fallback() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Ghost")
        .with_info_plist("Ghost", None)
        .with_framework("Electron Framework.framework");

    let outcome = orchestrator(MockLister::returning(""), MockStringExtractor::returning(""))
        .classify(bundle.path())
        .await;

    assert_eq!(outcome, Outcome::Undetermined);
}

#[cfg(unix)]
#[tokio::test]
async fn test_wrapped_bundle_resolves_through_intermediate_link() {
    let dir = TempDir::new().unwrap();
    let outer = support::wrapped_bundle(
        dir.path(),
        "Puzzles",
        &["hermes.framework"],
        &["Apps", "Games", "Puzzle"],
    );

    let detection = orchestrator(MockLister::returning(""), MockStringExtractor::returning(""))
        .detect(&outer)
        .await;

    let expected: PathBuf = std::fs::canonicalize(outer.join("Wrapper/Puzzles.app")).unwrap();
    assert!(detection.bundle.is_wrapped);
    assert_eq!(detection.bundle.resolved_path, expected);
    assert_eq!(detection.bundle.requested_path, outer);
    assert_eq!(names(&detection.outcome), vec!["react-native"]);
    assert_eq!(detection.category, Category::Games);
}

#[cfg(unix)]
#[tokio::test]
async fn test_dangling_wrapper_marker_is_not_wrapped() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Odd").with_executable("Odd");
    std::os::unix::fs::symlink("Wrapper/Missing.app", bundle.path().join("WrappedBundle"))
        .unwrap();

    let detection = orchestrator(MockLister::returning(""), MockStringExtractor::returning(""))
        .detect(bundle.path())
        .await;

    assert!(!detection.bundle.is_wrapped);
    assert_eq!(names(&detection.outcome), vec!["appkit"]);
}

#[tokio::test]
async fn test_concurrent_detections_agree() {
    let dir = TempDir::new().unwrap();
    let bundle = BundleFixture::standard(dir.path(), "Studio")
        .with_executable("Studio")
        .with_framework("QtCore.framework")
        .with_framework("Python.framework");

    let orchestrator = orchestrator(
        MockLister::returning("@rpath/QtWidgets.framework/Versions/5/QtWidgets"),
        MockStringExtractor::returning(""),
    );

    let outcomes = join_all((0..8).map(|_| orchestrator.classify(bundle.path()))).await;

    let first = &outcomes[0];
    assert_eq!(names(first), vec!["python", "qt"]);
    assert!(outcomes.iter().all(|o| o == first));
}

#[tokio::test]
async fn test_evidence_log_records_each_stage() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("evidence.jsonl");
    let bundle = BundleFixture::standard(dir.path(), "Zed").with_executable("zed");

    let orchestrator = orchestrator_with(
        MockLister::returning("/usr/lib/libSystem.B.dylib"),
        MockStringExtractor::returning("gpui::platform::mac\n"),
        PipelineConfig::new().with_evidence_log(Some(log_path.clone())),
    );
    let outcome = orchestrator.classify(bundle.path()).await;
    assert_eq!(names(&outcome), vec!["gpui"]);

    let log = std::fs::read_to_string(&log_path).unwrap();
    let stages: Vec<String> = log
        .lines()
        .map(|line| {
            let entry: serde_json::Value = serde_json::from_str(line).unwrap();
            entry["stage"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(stages.len(), 5);
    assert_eq!(stages[0], "frameworks");
    assert!(stages.contains(&"resources".to_string()));
    assert!(stages.contains(&"dependencies".to_string()));
    assert_eq!(stages[3], "strings");
    assert_eq!(stages[4], "conflicts");
}
