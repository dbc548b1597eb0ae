//! Filtered line reader for VCF-like variant files.
//!
//! Yields only the lines that participate in comparison: metadata
//! (`##`) lines, zeroed-out sentinel lines, and lines at excluded
//! loci never surface.

use crate::exclude::ExcludeSet;
use memchr::memchr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Prefix of metadata lines, skipped entirely.
pub const META_PREFIX: &str = "##";

/// Prefix of the column header line.
pub const HEADER_PREFIX: &str = "#";

/// Sentinel token marking a zeroed-out assay; such lines never
/// reach comparison.
pub const ZEROED_OUT_SENTINEL: &str = "ZEROED_OUT_ASSAY";

/// Errors that can occur during comparison.
#[derive(Error, Debug)]
pub enum VcfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("headers are different: only in first: {only_a:?}, only in second: {only_b:?}")]
    HeaderMismatch {
        only_a: Vec<String>,
        only_b: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, VcfError>;

/// Extract the `chrom:pos` locus key from the first two tab fields.
///
/// Returns None if the line has fewer than two fields.
#[inline]
pub fn locus_of(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let tab1 = memchr(b'\t', bytes)?;
    let rest = &bytes[tab1 + 1..];
    let pos_len = memchr(b'\t', rest).unwrap_or(rest.len());

    let chrom = &line[..tab1];
    let pos = &line[tab1 + 1..tab1 + 1 + pos_len];
    Some(format!("{}:{}", chrom, pos))
}

/// A streaming reader that yields only comparable lines.
pub struct FilteredLineReader<R: Read> {
    reader: BufReader<R>,
    exclude: ExcludeSet,
    line_number: usize,
    buffer: String,
}

impl FilteredLineReader<File> {
    /// Open a variant file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P, exclude: ExcludeSet) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file, exclude))
    }
}

impl<R: Read> FilteredLineReader<R> {
    /// Create a reader from any readable source.
    ///
    /// The exclusion set is fixed at construction.
    pub fn new(reader: R, exclude: ExcludeSet) -> Self {
        Self {
            reader: BufReader::new(reader),
            exclude,
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Current line number in the underlying stream (1-based).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next comparable line.
    ///
    /// Skips metadata lines, sentinel-marked lines, and lines at
    /// excluded loci. Returns `Ok(None)` once the stream is exhausted;
    /// a tail of nothing but skipped lines looks identical to EOF.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.buffer.trim_end();
            if line.is_empty() || line.starts_with(META_PREFIX) {
                continue;
            }
            if line.contains(ZEROED_OUT_SENTINEL) {
                continue;
            }

            if let Some(locus) = locus_of(line) {
                if self.exclude.contains(&locus) {
                    continue;
                }
            }

            return Ok(Some(line.to_string()));
        }
    }
}
