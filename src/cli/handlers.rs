//! Subcommand handlers. Each returns the process exit code.

use anyhow::{Context, Result};
use futures_util::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

use super::commands::{ConfigArgs, DetectArgs, ScanArgs};
use super::output::OutputFormatter;
use crate::config::DetectiveConfig;
use crate::fs::{FileSystem, FileType, RealFileSystem};
use crate::output::DetectionReport;
use crate::pipeline::{DetectionContext, PipelineConfig, PipelineOrchestrator};
use crate::progress::{BarHandler, LoggingHandler, ProgressEvent, ProgressHandler};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_UNDETERMINED: i32 = 2;

const BUNDLE_EXTENSION: &str = "app";

fn load_config() -> Option<DetectiveConfig> {
    let config = DetectiveConfig::default();
    match config.validate() {
        Ok(()) => Some(config),
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

fn orchestrator_for(config: PipelineConfig) -> PipelineOrchestrator {
    PipelineOrchestrator::new(Arc::new(DetectionContext::from_config(config)))
}

pub async fn handle_detect(args: &DetectArgs) -> i32 {
    let Some(config) = load_config() else {
        return EXIT_FAILURE;
    };

    let mut pipeline_config = PipelineConfig::from(&config);
    if let Some(secs) = args.strings_timeout {
        pipeline_config = pipeline_config.with_strings_timeout(Duration::from_secs(secs.max(1)));
    }

    if let Some(path) = first_missing(&RealFileSystem, &args.paths) {
        error!("Path does not exist: {}", path.display());
        return EXIT_FAILURE;
    }

    let orchestrator = orchestrator_for(pipeline_config);
    let mut reports = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        let detection = orchestrator.detect(path).await;
        reports.push(DetectionReport::from(&detection));
    }

    let formatter = OutputFormatter::new(args.format.into());
    if let Err(e) = emit(&formatter, &reports, args.output.as_deref()) {
        error!("{:#}", e);
        return EXIT_FAILURE;
    }

    match reports.as_slice() {
        [single] if !single.is_classified() => EXIT_UNDETERMINED,
        _ => EXIT_SUCCESS,
    }
}

pub async fn handle_scan(args: &ScanArgs, quiet: bool) -> i32 {
    let Some(config) = load_config() else {
        return EXIT_FAILURE;
    };

    let mut pipeline_config = PipelineConfig::from(&config);
    if let Some(concurrency) = args.concurrency {
        pipeline_config = pipeline_config.with_max_concurrency(concurrency);
    }
    let concurrency = pipeline_config.max_concurrency;

    let bundles = match discover_bundles(&RealFileSystem, &args.directory) {
        Ok(bundles) => bundles,
        Err(e) => {
            error!("{:#}", e);
            return EXIT_FAILURE;
        }
    };
    info!(
        "Found {} bundle(s) in {}",
        bundles.len(),
        args.directory.display()
    );

    let handler: Box<dyn ProgressHandler> = if !quiet && atty::is(atty::Stream::Stderr) {
        Box::new(BarHandler::new())
    } else {
        Box::new(LoggingHandler)
    };

    let orchestrator = Arc::new(orchestrator_for(pipeline_config));
    let reports = scan_bundles(
        orchestrator,
        &args.directory,
        bundles,
        concurrency,
        handler.as_ref(),
    )
    .await;

    let formatter = OutputFormatter::new(args.format.into());
    if let Err(e) = emit(&formatter, &reports, args.output.as_deref()) {
        error!("{:#}", e);
        return EXIT_FAILURE;
    }

    EXIT_SUCCESS
}

pub fn handle_config(args: &ConfigArgs) -> i32 {
    let config = DetectiveConfig::default();
    let formatter = OutputFormatter::new(args.format.into());

    match formatter.format_config(&config) {
        Ok(output) => {
            println!("{}", output.trim_end());
            match config.validate() {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    error!("{}", e);
                    EXIT_FAILURE
                }
            }
        }
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

/// The first requested path that is not on disk
pub fn first_missing<'a>(fs: &dyn FileSystem, paths: &'a [PathBuf]) -> Option<&'a PathBuf> {
    paths.iter().find(|path| !fs.exists(path))
}

/// Every `*.app` directly inside `dir`, sorted by path
pub fn discover_bundles(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs
        .read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut bundles: Vec<PathBuf> = entries
        .into_iter()
        .filter(|entry| entry.extension() == Some(BUNDLE_EXTENSION))
        .filter(|entry| match entry.file_type() {
            FileType::Directory => true,
            FileType::Symlink => fs.is_dir(entry.path()),
            FileType::File => false,
        })
        .map(|entry| entry.path)
        .collect();
    bundles.sort();

    Ok(bundles)
}

/// Detect many bundles with at most `concurrency` in flight; reports come back sorted by path
pub async fn scan_bundles(
    orchestrator: Arc<PipelineOrchestrator>,
    root: &Path,
    bundles: Vec<PathBuf>,
    concurrency: usize,
    handler: &dyn ProgressHandler,
) -> Vec<DetectionReport> {
    let start = Instant::now();
    let total = bundles.len();
    handler.on_progress(&ProgressEvent::Started {
        root: root.to_path_buf(),
        total,
    });

    let mut completed = 0;
    let mut reports = Vec::with_capacity(total);
    let mut in_flight = stream::iter(bundles)
        .map(|path| {
            let orchestrator = orchestrator.clone();
            async move {
                let detection = orchestrator.detect(&path).await;
                (path, detection)
            }
        })
        .buffer_unordered(concurrency.max(1));

    while let Some((path, detection)) = in_flight.next().await {
        completed += 1;
        handler.on_progress(&ProgressEvent::BundleComplete {
            bundle: path,
            index: completed,
            total,
            classified: detection.outcome.is_classified(),
            duration: detection.duration,
        });
        reports.push(DetectionReport::from(&detection));
    }

    reports.sort_by(|a, b| a.bundle_path.cmp(&b.bundle_path));

    let undetermined = reports.iter().filter(|r| !r.is_classified()).count();
    handler.on_progress(&ProgressEvent::Completed {
        total,
        undetermined,
        total_time: start.elapsed(),
    });

    reports
}

fn emit(
    formatter: &OutputFormatter,
    reports: &[DetectionReport],
    output: Option<&Path>,
) -> Result<()> {
    let rendered = formatter.format_reports(reports)?;
    match output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            println!("{}", rendered.trim_end());
            Ok(())
        }
    }
}
