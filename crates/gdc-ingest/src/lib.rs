//! Clinical XML ingestion.
//!
//! This crate finds TCGA clinical XML documents, scans their leaf elements
//! and flattens each document into one [`gdc_model::ClinicalRecord`].
//!
//! # Example
//!
//! ```ignore
//! use gdc_ingest::{ExtractConfig, extract_batch};
//!
//! let config = ExtractConfig::new("downloads/clinical");
//! let outcome = extract_batch(&config)?;
//! println!("{} records, {} failures", outcome.table.len(), outcome.failures.len());
//! ```

mod batch;
mod discovery;
mod error;
mod extract;
mod xml;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{is_xml_file, list_xml_files};

// === XML Scanning ===
pub use xml::{XmlScanError, read_raw_tags, scan_leaf_tags};

// === Extraction ===
pub use extract::{Extraction, extract_file, extract_record};

// === Batch Driver ===
pub use batch::{
    BatchOutcome, ExtractConfig, FileFailure, FileReport, extract_batch, extract_files,
};
