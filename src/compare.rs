//! Lockstep semantic comparison of two sorted variant files.
//!
//! Drives the two filtered line streams in parallel: header lines go
//! through the fatal header-set check, data lines through the
//! normalizer and the field / alt-set / per-sample equivalence checks.
//! Every mismatch except a header mismatch is reported and the run
//! continues; exhaustive reporting is the point of a tie-out.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::exclude::ExcludeSet;
use crate::record::{format_sample_data, resolve_genotype, VariantRecord};
use crate::vcf::{FilteredLineReader, Result, VcfError, HEADER_PREFIX};

/// Genotype-quality FORMAT key compared with numeric tolerance.
const GQ_KEY: &str = "GQ";

/// Genotype FORMAT key.
const GT_KEY: &str = "GT";

/// How a tolerant numeric comparison failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericMismatch {
    /// At least one value carried a decimal point; such values are
    /// never parsed, only string-compared.
    ExactString,
    /// Both parsed; absolute difference exceeded the tolerance.
    Delta(f64),
    /// Dot-free but not parseable as a number.
    Unparseable,
}

/// Compare two numeric-ish field values under a tolerance.
///
/// Identical strings never mismatch. If either side contains a `.`
/// the values are compared only as strings (fractional formatting is
/// itself meaningful). Otherwise both are parsed and the absolute
/// difference is checked against the tolerance. Returns None when the
/// values are considered equivalent.
pub fn tolerant_numeric_diff(s1: &str, s2: &str, tolerance: f64) -> Option<NumericMismatch> {
    if s1 == s2 {
        return None;
    }
    if s1.contains('.') || s2.contains('.') {
        return Some(NumericMismatch::ExactString);
    }
    match (s1.parse::<f64>(), s2.parse::<f64>()) {
        (Ok(v1), Ok(v2)) => {
            let delta = (v2 - v1).abs();
            if delta > tolerance {
                Some(NumericMismatch::Delta(delta))
            } else {
                None
            }
        }
        _ => Some(NumericMismatch::Unparseable),
    }
}

/// Statistics for a comparison run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareStats {
    /// Data-line pairs fully compared.
    pub records_compared: u64,
    /// Mismatch blocks written to the report.
    pub diffs_reported: u64,
    /// Record pairs skipped because of a `*` spanning-deletion allele.
    pub spanning_deletion_skips: u64,
}

impl fmt::Display for CompareStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records compared, {} diffs reported, {} spanning-deletion records skipped",
            self.records_compared, self.diffs_reported, self.spanning_deletion_skips
        )
    }
}

/// Compare command configuration.
#[derive(Debug, Clone)]
pub struct CompareCommand {
    /// Absolute tolerance for integer-formatted GQ values.
    pub gq_tolerance: f64,
}

impl Default for CompareCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareCommand {
    pub fn new() -> Self {
        Self { gq_tolerance: 0.0 }
    }

    pub fn with_gq_tolerance(mut self, tolerance: f64) -> Self {
        self.gq_tolerance = tolerance;
        self
    }

    /// Run the comparison between two files.
    ///
    /// Reports go to `output`; the returned stats summarize the run.
    /// The only error after both files open successfully is a header
    /// mismatch (fatal by design) or stream I/O failure.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        path_a: P,
        path_b: P,
        exclude: &ExcludeSet,
        output: &mut W,
    ) -> Result<CompareStats> {
        let reader_a = FilteredLineReader::new(File::open(path_a.as_ref())?, exclude.clone());
        let reader_b = FilteredLineReader::new(File::open(path_b.as_ref())?, exclude.clone());
        self.compare_streams(reader_a, reader_b, output)
    }

    /// Lockstep driver over two already-open filtered streams.
    pub fn compare_streams<R1: Read, R2: Read, W: Write>(
        &self,
        mut reader_a: FilteredLineReader<R1>,
        mut reader_b: FilteredLineReader<R2>,
        output: &mut W,
    ) -> Result<CompareStats> {
        let mut stats = CompareStats::default();

        // Most-recent header line of each stream, owned by the driver
        // and handed to every parse.
        let mut header_a: Option<String> = None;
        let mut header_b: Option<String> = None;

        loop {
            let line_a = reader_a.next_line()?;
            let line_b = reader_b.next_line()?;

            let (line_a, line_b) = match (line_a, line_b) {
                (None, None) => break,
                (Some(line), None) => {
                    writeln!(
                        output,
                        "DIFF: first file has lines beyond end of second, starting with:"
                    )?;
                    writeln!(output, "{}", line)?;
                    stats.diffs_reported += 1;
                    break;
                }
                (None, Some(line)) => {
                    writeln!(
                        output,
                        "DIFF: second file has lines beyond end of first, starting with:"
                    )?;
                    writeln!(output, "{}", line)?;
                    stats.diffs_reported += 1;
                    break;
                }
                (Some(a), Some(b)) => (a, b),
            };

            // Header lines update driver state and run the one fatal check.
            if line_a.starts_with(HEADER_PREFIX) {
                compare_headers(&line_a, &line_b, output)?;
                header_a = Some(line_a);
                header_b = Some(line_b);
                continue;
            }

            let (header_a, header_b) = match (&header_a, &header_b) {
                (Some(a), Some(b)) => (a.as_str(), b.as_str()),
                _ => {
                    return Err(VcfError::Parse {
                        line: reader_a.line_number(),
                        message: "data line encountered before header line".to_string(),
                    })
                }
            };

            let rec_a = VariantRecord::parse(&line_a, header_a)?;
            let rec_b = VariantRecord::parse(&line_b, header_b)?;

            self.compare_exact_fields(&rec_a, &rec_b, output, &mut stats)?;

            // Spanning deletions are excluded from alt and sample
            // comparison until a policy for them exists.
            if rec_a.has_spanning_deletion() {
                stats.spanning_deletion_skips += 1;
                continue;
            }

            self.compare_alt_sets(&rec_a, &rec_b, output, &mut stats)?;
            self.compare_sample_data(&rec_a, &rec_b, output, &mut stats)?;

            stats.records_compared += 1;
        }

        writeln!(output, "Compared {} lines...", stats.records_compared)?;

        Ok(stats)
    }

    /// Straight string comparison of chrom, pos, id, and ref.
    fn compare_exact_fields<W: Write>(
        &self,
        a: &VariantRecord,
        b: &VariantRecord,
        output: &mut W,
        stats: &mut CompareStats,
    ) -> Result<()> {
        let fields = [
            ("chrom", &a.chrom, &b.chrom),
            ("pos", &a.pos, &b.pos),
            ("id", &a.id, &b.id),
            ("ref", &a.ref_allele, &b.ref_allele),
        ];
        for (name, va, vb) in fields {
            if va != vb {
                writeln!(output, "DIFF on {}", name)?;
                writeln!(output, "{}", a)?;
                writeln!(output, "{}", b)?;
                stats.diffs_reported += 1;
            }
        }
        Ok(())
    }

    /// Order-insensitive comparison of the normalized alt allele sets.
    fn compare_alt_sets<W: Write>(
        &self,
        a: &VariantRecord,
        b: &VariantRecord,
        output: &mut W,
        stats: &mut CompareStats,
    ) -> Result<()> {
        let s1 = sorted_alts(a);
        let s2 = sorted_alts(b);
        if s1 != s2 {
            writeln!(output, "DIFF on ALTS")?;
            writeln!(output, "{}", s1)?;
            writeln!(output, "{}", s2)?;
            stats.diffs_reported += 1;
        }
        Ok(())
    }

    /// Per-sample GQ and genotype equivalence.
    ///
    /// Iterates the first record's samples in header order; genotypes
    /// are resolved against each record's own allele list so differing
    /// alt orderings that denote the same allele pair compare equal.
    fn compare_sample_data<W: Write>(
        &self,
        a: &VariantRecord,
        b: &VariantRecord,
        output: &mut W,
        stats: &mut CompareStats,
    ) -> Result<()> {
        if a.samples.len() != b.samples.len() {
            writeln!(
                output,
                "DIFF on length of sample data {} and {}",
                a.samples.len(),
                b.samples.len()
            )?;
            writeln!(output, "{}", a)?;
            writeln!(output, "{}", b)?;
            stats.diffs_reported += 1;
        }

        for (name, sd1) in &a.samples {
            let Some(sd2) = b.sample(name) else {
                writeln!(
                    output,
                    "DIFF on sample {} at {}: missing from second record",
                    name,
                    a.locus()
                )?;
                stats.diffs_reported += 1;
                continue;
            };

            self.compare_gq(name, a, sd1, sd2, output, stats)?;
            self.compare_genotype(name, a, b, sd1, sd2, output, stats)?;
        }

        Ok(())
    }

    fn compare_gq<W: Write>(
        &self,
        name: &str,
        a: &VariantRecord,
        sd1: &FxHashMap<String, String>,
        sd2: &FxHashMap<String, String>,
        output: &mut W,
        stats: &mut CompareStats,
    ) -> Result<()> {
        match (sd1.get(GQ_KEY), sd2.get(GQ_KEY)) {
            (Some(g1), Some(g2)) => {
                if let Some(mismatch) = tolerant_numeric_diff(g1, g2, self.gq_tolerance) {
                    match mismatch {
                        NumericMismatch::Delta(delta) => {
                            writeln!(
                                output,
                                "DIFF on GQ for {} at {} of {}",
                                name,
                                a.locus(),
                                delta
                            )?;
                        }
                        NumericMismatch::ExactString | NumericMismatch::Unparseable => {
                            writeln!(
                                output,
                                "DIFF on GQ for {} at {} with values of {} and {}",
                                name,
                                a.locus(),
                                g1,
                                g2
                            )?;
                        }
                    }
                    stats.diffs_reported += 1;
                }
            }
            (None, None) => {}
            (g1, g2) => {
                writeln!(
                    output,
                    "DIFF on GQ for {} at {}: present in only one record ({} vs {})",
                    name,
                    a.locus(),
                    g1.map(String::as_str).unwrap_or("<absent>"),
                    g2.map(String::as_str).unwrap_or("<absent>")
                )?;
                stats.diffs_reported += 1;
            }
        }
        Ok(())
    }

    fn compare_genotype<W: Write>(
        &self,
        name: &str,
        a: &VariantRecord,
        b: &VariantRecord,
        sd1: &FxHashMap<String, String>,
        sd2: &FxHashMap<String, String>,
        output: &mut W,
        stats: &mut CompareStats,
    ) -> Result<()> {
        let gt1 = sd1.get(GT_KEY).map(String::as_str).unwrap_or(".");
        let gt2 = sd2.get(GT_KEY).map(String::as_str).unwrap_or(".");

        let resolved1 = resolve_genotype(gt1, &a.ref_allele, &a.alts);
        let resolved2 = resolve_genotype(gt2, &b.ref_allele, &b.alts);

        let equivalent = match (&resolved1, &resolved2) {
            (Some(p1), Some(p2)) => unordered(p1.clone()) == unordered(p2.clone()),
            _ => false,
        };

        if !equivalent {
            writeln!(
                output,
                "DIFF on Genotypes for {} at {} with {} and {}",
                name,
                a.locus(),
                a.alt_joined(),
                b.alt_joined()
            )?;
            match (resolved1, resolved2) {
                (Some(p1), Some(p2)) => {
                    writeln!(output, "{}/{} vs {}/{}", p1.0, p1.1, p2.0, p2.1)?;
                }
                _ => {
                    writeln!(output, "unresolvable genotype: '{}' vs '{}'", gt1, gt2)?;
                }
            }
            writeln!(output, "{}", format_sample_data(sd1))?;
            writeln!(output, "{}", format_sample_data(sd2))?;
            writeln!(output, "--------------")?;
            stats.diffs_reported += 1;
        }

        Ok(())
    }
}

/// Compare two header lines as sets of column names.
///
/// Sample order may differ between the files; only set membership
/// matters. A non-empty symmetric difference is the one fatal
/// condition: the report is written and the error returned so the
/// process exits non-zero with no data lines compared.
pub fn compare_headers<W: Write>(header_a: &str, header_b: &str, output: &mut W) -> Result<()> {
    let set_a: BTreeSet<&str> = header_a.split('\t').collect();
    let set_b: BTreeSet<&str> = header_b.split('\t').collect();

    let only_a: Vec<String> = set_a.difference(&set_b).map(|s| s.to_string()).collect();
    let only_b: Vec<String> = set_b.difference(&set_a).map(|s| s.to_string()).collect();

    if only_a.is_empty() && only_b.is_empty() {
        writeln!(output, "Headers match, including all samples...")?;
        Ok(())
    } else {
        writeln!(
            output,
            "DIFF: headers are different! only in first: {:?} vs only in second: {:?}",
            only_a, only_b
        )?;
        Err(VcfError::HeaderMismatch { only_a, only_b })
    }
}

/// Normalized non-`*` alts, sorted and comma-joined.
fn sorted_alts(record: &VariantRecord) -> String {
    let mut alts: Vec<&str> = record
        .alts
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "*")
        .collect();
    alts.sort_unstable();
    alts.join(",")
}

/// Canonical ordering for a resolved allele pair; phasing is ignored.
fn unordered(pair: (String, String)) -> (String, String) {
    if pair.0 <= pair.1 {
        pair
    } else {
        (pair.1, pair.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclude::ExcludeSet;

    const HEADER: &str =
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2";

    fn run_compare(content_a: &str, content_b: &str, exclude: ExcludeSet) -> (String, CompareStats) {
        run_compare_with(CompareCommand::new(), content_a, content_b, exclude)
    }

    fn run_compare_with(
        cmd: CompareCommand,
        content_a: &str,
        content_b: &str,
        exclude: ExcludeSet,
    ) -> (String, CompareStats) {
        let reader_a = FilteredLineReader::new(content_a.as_bytes(), exclude.clone());
        let reader_b = FilteredLineReader::new(content_b.as_bytes(), exclude);
        let mut output = Vec::new();
        let stats = cmd
            .compare_streams(reader_a, reader_b, &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    fn with_header(data: &str) -> String {
        format!("{}\n{}", HEADER, data)
    }

    #[test]
    fn test_tolerant_numeric_equal_strings() {
        assert_eq!(tolerant_numeric_diff("30", "30", 0.0), None);
        assert_eq!(tolerant_numeric_diff(".", ".", 0.0), None);
        // Identical fractional strings are fine too
        assert_eq!(tolerant_numeric_diff("30.4", "30.4", 0.0), None);
    }

    #[test]
    fn test_tolerant_numeric_decimal_point_forces_string_compare() {
        // "30" vs "30.4" would be within any reasonable tolerance
        // numerically, but the decimal point forbids parsing.
        assert_eq!(
            tolerant_numeric_diff("30", "30.4", 10.0),
            Some(NumericMismatch::ExactString)
        );
    }

    #[test]
    fn test_tolerant_numeric_within_tolerance() {
        assert_eq!(tolerant_numeric_diff("30", "31", 2.0), None);
    }

    #[test]
    fn test_tolerant_numeric_exceeds_tolerance() {
        match tolerant_numeric_diff("30", "31", 0.5) {
            Some(NumericMismatch::Delta(d)) => assert!((d - 1.0).abs() < 1e-9),
            other => panic!("expected Delta, got {:?}", other),
        }
    }

    #[test]
    fn test_tolerant_numeric_unparseable() {
        assert_eq!(
            tolerant_numeric_diff("30", "abc", 2.0),
            Some(NumericMismatch::Unparseable)
        );
    }

    #[test]
    fn test_identical_records_no_diff() {
        let data = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT:GQ\t0/1:30\t1/1:40\n");
        let (out, stats) = run_compare(&data, &data, ExcludeSet::new());

        assert_eq!(stats.records_compared, 1);
        assert_eq!(stats.diffs_reported, 0);
        assert!(out.contains("Headers match, including all samples..."));
        assert!(out.contains("Compared 1 lines..."));
        assert!(!out.contains("DIFF"));
    }

    #[test]
    fn test_exact_field_mismatch_reported() {
        let a = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t1/1\n");
        let b = with_header("chr1\t100\trs2\tA\tG\t50\tPASS\t.\tGT\t0/1\t1/1\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert!(out.contains("DIFF on id"));
        assert_eq!(stats.diffs_reported, 1);
        // Non-fatal: the record still counts as compared
        assert_eq!(stats.records_compared, 1);
    }

    #[test]
    fn test_alt_order_insensitive() {
        let a = with_header("chr1\t100\trs1\tA\tG,T\t50\tPASS\t.\tGT\t1/2\t0/0\n");
        let b = with_header("chr1\t100\trs1\tA\tT,G\t50\tPASS\t.\tGT\t2/1\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert_eq!(stats.diffs_reported, 0, "unexpected diffs: {}", out);
        assert_eq!(stats.records_compared, 1);
    }

    #[test]
    fn test_equivalent_padded_encodings() {
        // ATT->AGT and AT->AG denote the same variant after trimming.
        let a = with_header("chr1\t100\trs1\tATT\tAGT\t50\tPASS\t.\tGT\t0/1\t0/0\n");
        let b = with_header("chr1\t100\trs1\tAT\tAG\t50\tPASS\t.\tGT\t0/1\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert_eq!(stats.diffs_reported, 0, "unexpected diffs: {}", out);
    }

    #[test]
    fn test_genotype_mismatch_reported() {
        let a = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\n");
        let b = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t1/1\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert!(out.contains("DIFF on Genotypes for S1 at chr1:100"));
        assert_eq!(stats.diffs_reported, 1);
    }

    #[test]
    fn test_phasing_ignored() {
        let a = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0|1\t0/0\n");
        let b = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t1/0\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert_eq!(stats.diffs_reported, 0, "unexpected diffs: {}", out);
    }

    #[test]
    fn test_gq_within_tolerance() {
        let a = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT:GQ\t0/1:30\t0/0:99\n");
        let b = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT:GQ\t0/1:31\t0/0:99\n");

        let cmd = CompareCommand::new().with_gq_tolerance(2.0);
        let (out, stats) = run_compare_with(cmd, &a, &b, ExcludeSet::new());
        assert_eq!(stats.diffs_reported, 0, "unexpected diffs: {}", out);

        let cmd = CompareCommand::new().with_gq_tolerance(0.5);
        let (out, stats) = run_compare_with(cmd, &a, &b, ExcludeSet::new());
        assert!(out.contains("DIFF on GQ for S1 at chr1:100 of 1"));
        assert_eq!(stats.diffs_reported, 1);
    }

    #[test]
    fn test_spanning_deletion_skipped() {
        // Genotypes differ, but the * allele excludes the pair from
        // alt and sample comparison.
        let a = with_header("chr1\t100\trs1\tA\tG,*\t50\tPASS\t.\tGT\t0/1\t0/0\n");
        let b = with_header("chr1\t100\trs1\tA\tG,*\t50\tPASS\t.\tGT\t1/1\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert_eq!(stats.diffs_reported, 0, "unexpected diffs: {}", out);
        assert_eq!(stats.records_compared, 0);
        assert_eq!(stats.spanning_deletion_skips, 1);
    }

    #[test]
    fn test_header_mismatch_is_fatal() {
        let a = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n\
                 chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\n";
        let b = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS3\n\
                 chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\n";

        let reader_a = FilteredLineReader::new(a.as_bytes(), ExcludeSet::new());
        let reader_b = FilteredLineReader::new(b.as_bytes(), ExcludeSet::new());
        let mut output = Vec::new();
        let result = CompareCommand::new().compare_streams(reader_a, reader_b, &mut output);

        match result {
            Err(VcfError::HeaderMismatch { only_a, only_b }) => {
                assert_eq!(only_a, vec!["S2".to_string()]);
                assert_eq!(only_b, vec!["S3".to_string()]);
            }
            other => panic!("expected HeaderMismatch, got {:?}", other.map(|s| s.records_compared)),
        }

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("DIFF: headers are different!"));
        // Zero data lines compared after the mismatch
        assert!(!out.contains("Compared"));
    }

    #[test]
    fn test_header_sample_order_insensitive() {
        let a = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n";
        let b = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS2\tS1\n";
        let mut output = Vec::new();
        assert!(compare_headers(a.trim_end(), b.trim_end(), &mut output).is_ok());
    }

    #[test]
    fn test_excluded_locus_never_reported() {
        let mut exclude = ExcludeSet::new();
        exclude.insert("chr1:100".to_string());

        // The excluded lines differ arbitrarily; neither surfaces.
        let a = with_header(
            "chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\nchr1\t200\trs2\tA\tT\t50\tPASS\t.\tGT\t0/1\t0/0\n",
        );
        let b = with_header(
            "chr1\t100\tTOTALLY\tC\tDIFFERENT\t1\tq\t.\tGT\t1/1\t1/1\nchr1\t200\trs2\tA\tT\t50\tPASS\t.\tGT\t0/1\t0/0\n",
        );
        let (out, stats) = run_compare(&a, &b, exclude);

        assert_eq!(stats.diffs_reported, 0, "unexpected diffs: {}", out);
        assert_eq!(stats.records_compared, 1);
    }

    #[test]
    fn test_sample_count_mismatch_reported_but_continues() {
        let header_a = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2";
        let header_b = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS2\tS1";
        // Second record drops the S2 column entirely.
        let a = format!(
            "{}\nchr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\n",
            header_a
        );
        let b = format!("{}\nchr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/0\n", header_b);
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert!(out.contains("DIFF on length of sample data 2 and 1"));
        // S1 genotype still compared against the S1 column of the
        // second file (header order S2,S1 puts 0/0 under S2).
        assert!(out.contains("DIFF on sample S1 at chr1:100: missing from second record"));
        assert!(stats.diffs_reported >= 2);
    }

    #[test]
    fn test_trailing_lines_reported() {
        let a = with_header(
            "chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\nchr1\t200\trs2\tA\tT\t50\tPASS\t.\tGT\t0/1\t0/0\n",
        );
        let b = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert!(out.contains("DIFF: first file has lines beyond end of second"));
        assert_eq!(stats.records_compared, 1);
    }

    #[test]
    fn test_unresolvable_genotype_reported() {
        // Index 5 has no allele to point at.
        let a = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/5\t0/0\n");
        let b = with_header("chr1\t100\trs1\tA\tG\t50\tPASS\t.\tGT\t0/1\t0/0\n");
        let (out, stats) = run_compare(&a, &b, ExcludeSet::new());

        assert!(out.contains("unresolvable genotype: '0/5' vs '0/1'"));
        assert_eq!(stats.diffs_reported, 1);
    }
}
