mod logger;

pub use logger::EvidenceLogger;
