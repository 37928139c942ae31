//! In-memory zip assembly for the downloadable site.
//!
//! The archive is finished before the response starts, so a failure here is still
//! an ordinary error response. Entries are stamped with the zip epoch (1980-01-01)
//! so identical inputs give identical bytes.

use std::io::{Cursor, Write};

use bytes::Bytes;
use thiserror::Error;
use zip::{result::ZipError, write::SimpleFileOptions, CompressionMethod, DateTime, ZipWriter};

pub const INDEX_FILE: &str = "index.html";
pub const RESUME_FILE: &str = "resume.pdf";
pub const README_FILE: &str = "README.md";

const COMPRESSION_LEVEL: i64 = 9;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("zip error: {0}")]
    Zip(#[from] ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The files that make up one downloaded site.
#[derive(Debug, Clone)]
pub struct SiteBundle {
    pub index_html: String,
    pub resume: Option<Bytes>,
    pub readme: String,
}

pub fn build_site_archive(bundle: &SiteBundle) -> Result<Vec<u8>, ArchiveError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file(INDEX_FILE, options)?;
    zip.write_all(bundle.index_html.as_bytes())?;

    if let Some(resume) = &bundle.resume {
        zip.start_file(RESUME_FILE, options)?;
        zip.write_all(resume)?;
    }

    zip.start_file(README_FILE, options)?;
    zip.write_all(bundle.readme.as_bytes())?;

    Ok(zip.finish()?.into_inner())
}
