//! Exclusion list of loci to skip during comparison.
//!
//! Parses exclusion files (one `chrom:pos` locus per line).

use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::vcf::VcfError;

/// Set of loci excluded from comparison.
///
/// Loaded once at startup and passed into each line reader at
/// construction; immutable for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    loci: FxHashSet<String>,
}

impl ExcludeSet {
    /// Create an empty exclusion set.
    pub fn new() -> Self {
        Self {
            loci: FxHashSet::default(),
        }
    }

    /// Load an exclusion set from a file.
    /// Format: one `chrom:pos` locus per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VcfError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut loci = FxHashSet::default();

        for line_result in reader.lines() {
            let line = line_result?;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            loci.insert(line.to_string());
        }

        Ok(Self { loci })
    }

    /// Check if a locus is excluded.
    #[inline]
    pub fn contains(&self, locus: &str) -> bool {
        self.loci.contains(locus)
    }

    /// Add a locus to the set.
    pub fn insert(&mut self, locus: String) {
        self.loci.insert(locus);
    }

    /// Get number of excluded loci.
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}
