//! Detection context holding the injected collaborators

use std::sync::Arc;

use crate::bundle::{FsPlistReader, PlistReader};
use crate::fs::{FileSystem, RealFileSystem};
use crate::heuristics::EvidenceLogger;
use crate::tools::{LinkedLibraryLister, OtoolLister, StringExtractor, StringsExtractor};

use super::config::PipelineConfig;

/// Everything a detection needs from the outside world.
///
/// Shared read-only across concurrent detections; nothing here carries
/// per-bundle state.
pub struct DetectionContext {
    /// File system abstraction
    pub file_system: Arc<dyn FileSystem>,

    /// Info.plist and iTunesMetadata.plist access
    pub plist_reader: Arc<dyn PlistReader>,

    /// Linked-library listing for executables
    pub library_lister: Arc<dyn LinkedLibraryLister>,

    /// Printable string extraction for executables
    pub string_extractor: Arc<dyn StringExtractor>,

    /// Per-stage evidence log
    pub evidence_logger: Arc<EvidenceLogger>,

    /// Pipeline configuration
    pub config: PipelineConfig,
}

impl DetectionContext {
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        plist_reader: Arc<dyn PlistReader>,
        library_lister: Arc<dyn LinkedLibraryLister>,
        string_extractor: Arc<dyn StringExtractor>,
        evidence_logger: Arc<EvidenceLogger>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            file_system,
            plist_reader,
            library_lister,
            string_extractor,
            evidence_logger,
            config,
        }
    }

    /// Context over the given file system and tools, reading plists through that file system
    pub fn with_collaborators(
        file_system: Arc<dyn FileSystem>,
        library_lister: Arc<dyn LinkedLibraryLister>,
        string_extractor: Arc<dyn StringExtractor>,
        config: PipelineConfig,
    ) -> Self {
        let plist_reader = Arc::new(FsPlistReader::new(file_system.clone()));
        let evidence_logger = Arc::new(EvidenceLogger::new(config.evidence_log.clone()));
        Self::new(
            file_system,
            plist_reader,
            library_lister,
            string_extractor,
            evidence_logger,
            config,
        )
    }

    /// Context backed by the real file system and the `otool`/`strings` binaries
    pub fn from_config(config: PipelineConfig) -> Self {
        let library_lister = Arc::new(OtoolLister::new(
            config.otool_path.clone(),
            config.otool_timeout,
        ));
        let string_extractor = Arc::new(StringsExtractor::new(config.strings_path.clone()));
        Self::with_collaborators(
            Arc::new(RealFileSystem),
            library_lister,
            string_extractor,
            config,
        )
    }
}
