//! Structured variant records parsed from data lines.
//!
//! A record is built fresh for every data-line pair, compared, and
//! dropped; nothing persists across lines. REF/ALT alleles are
//! normalized at parse time so that differently padded encodings of
//! the same variant converge to one representation.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::vcf::{Result, VcfError};

/// Spanning deletion placeholder allele, exempt from trimming.
pub const SPANNING_DELETION: &str = "*";

/// Minimum number of tab-delimited fields in a data line
/// (fixed columns 0-8; samples follow).
const MIN_FIELDS: usize = 9;

/// One parsed data line.
#[derive(Debug, Clone)]
pub struct VariantRecord {
    pub chrom: String,
    pub pos: String,
    pub id: String,
    /// ALT column exactly as it appeared, before normalization.
    pub orig_alt: String,
    /// Normalized reference allele.
    pub ref_allele: String,
    /// Normalized alternate alleles, declaration order preserved.
    pub alts: Vec<String>,
    pub filter: String,
    /// Per-sample FORMAT maps, in header column order.
    pub samples: Vec<(String, FxHashMap<String, String>)>,
}

impl VariantRecord {
    /// Parse a data line against its file's header line.
    ///
    /// Columns are strictly positional: 0 chrom, 1 pos, 2 id, 3 ref,
    /// 4 alt, 5 qual (unused), 6 filter, 7 info (unused), 8 format,
    /// 9+ one column per sample named by header columns 9+.
    pub fn parse(line: &str, header: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim_end().split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(VcfError::InvalidFormat(format!(
                "Expected at least {} fields, got {}: '{}'",
                MIN_FIELDS,
                fields.len(),
                line
            )));
        }

        let alts: Vec<String> = fields[4].split(',').map(|s| s.to_string()).collect();
        let (ref_allele, alts) = normalize_alleles(fields[3].to_string(), alts);

        let format_keys: Vec<&str> = fields[8].split(':').collect();
        let sample_names = header.trim_end().split('\t').skip(MIN_FIELDS);

        // Keys beyond a sample's value count are dropped by the zip,
        // matching positional FORMAT semantics.
        let samples = sample_names
            .zip(&fields[MIN_FIELDS..])
            .map(|(name, column)| {
                let data: FxHashMap<String, String> = format_keys
                    .iter()
                    .zip(column.split(':'))
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (name.to_string(), data)
            })
            .collect();

        Ok(Self {
            chrom: fields[0].to_string(),
            pos: fields[1].to_string(),
            id: fields[2].to_string(),
            orig_alt: fields[4].to_string(),
            ref_allele,
            alts,
            filter: fields[6].to_string(),
            samples,
        })
    }

    /// The `chrom:pos` locus key.
    pub fn locus(&self) -> String {
        format!("{}:{}", self.chrom, self.pos)
    }

    /// Normalized alternate alleles as a comma-joined string.
    pub fn alt_joined(&self) -> String {
        self.alts.join(",")
    }

    /// Whether any alternate allele is the `*` spanning deletion.
    pub fn has_spanning_deletion(&self) -> bool {
        self.alts.iter().any(|a| a == SPANNING_DELETION)
    }

    /// Look up a sample's FORMAT map by name.
    pub fn sample(&self, name: &str) -> Option<&FxHashMap<String, String>> {
        self.samples
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data)
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.pos,
            self.id,
            self.ref_allele,
            self.alt_joined(),
            self.filter
        )?;
        for (name, data) in &self.samples {
            write!(f, "\t{}={{{}}}", name, format_sample_data(data))?;
        }
        Ok(())
    }
}

/// Render a sample's FORMAT map with keys sorted for stable output.
pub fn format_sample_data(data: &FxHashMap<String, String>) -> String {
    let mut pairs: Vec<_> = data.iter().collect();
    pairs.sort_by_key(|(k, _)| k.as_str());
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(":")
}

/// Trim shared trailing characters from REF and every non-`*` ALT.
///
/// While the reference is longer than one character and every non-`*`
/// alternate ends in the reference's trailing character, that character
/// is stripped from the reference and from every non-`*` alternate.
/// The `*` allele never changes. Idempotent.
pub fn normalize_alleles(mut reference: String, mut alts: Vec<String>) -> (String, Vec<String>) {
    while reference.len() > 1 {
        let last = reference.as_bytes()[reference.len() - 1];
        let all_share = alts
            .iter()
            .filter(|a| a.as_str() != SPANNING_DELETION)
            .all(|a| a.as_bytes().last() == Some(&last));
        if !all_share {
            break;
        }
        reference.pop();
        for alt in alts.iter_mut() {
            if alt != SPANNING_DELETION {
                alt.pop();
            }
        }
    }
    (reference, alts)
}

/// Resolve a genotype string to the pair of alleles it denotes.
///
/// Splits on `|` if present, otherwise `/`, and maps each of the first
/// two indices into `[ref] + alts`; `.` stays `.`. Returns None when
/// the genotype has fewer than two fields or an index is not a valid
/// position in the allele list.
pub fn resolve_genotype(gt: &str, reference: &str, alts: &[String]) -> Option<(String, String)> {
    let delim = if gt.contains('|') { '|' } else { '/' };
    let mut parts = gt.split(delim);
    let first = parts.next()?;
    let second = parts.next()?;

    let lookup = |token: &str| -> Option<String> {
        if token == "." {
            return Some(".".to_string());
        }
        let index: usize = token.parse().ok()?;
        if index == 0 {
            Some(reference.to_string())
        } else {
            alts.get(index - 1).cloned()
        }
    };

    Some((lookup(first)?, lookup(second)?))
}
