//! vcfdiff: semantic tie-out comparison of sorted variant files.
//!
//! Validates that two versions of a variant-calling pipeline produce
//! equivalent output. Textual equality is not enough: the same variant
//! can carry differently padded REF/ALT encodings, differently ordered
//! ALT alleles, or genotype indices that denote the same allele pair.
//!
//! # Features
//!
//! - **Allele normalization**: shared trailing characters are trimmed
//!   from REF and ALT so equivalent encodings converge
//! - **Genotype equivalence**: genotypes are resolved to allele pairs
//!   against each record's own allele list before comparing
//! - **Exhaustive reporting**: every mismatch is reported and the run
//!   continues; only a header mismatch is fatal
//!
//! # Example
//!
//! ```rust,no_run
//! use vcfdiff::{compare::CompareCommand, exclude::ExcludeSet};
//!
//! let cmd = CompareCommand::new().with_gq_tolerance(2.0);
//! let mut out = std::io::stdout();
//! let stats = cmd.run("old.vcf", "new.vcf", &ExcludeSet::new(), &mut out).unwrap();
//! eprintln!("{}", stats);
//! ```

pub mod compare;
pub mod exclude;
pub mod record;
pub mod vcf;

// Re-export commonly used types
pub use compare::{CompareCommand, CompareStats};
pub use exclude::ExcludeSet;
pub use record::VariantRecord;
pub use vcf::{FilteredLineReader, VcfError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compare::{CompareCommand, CompareStats};
    pub use crate::exclude::ExcludeSet;
    pub use crate::record::VariantRecord;
    pub use crate::vcf::{FilteredLineReader, VcfError};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::compare::CompareCommand;
        use crate::exclude::ExcludeSet;
        use crate::vcf::FilteredLineReader;

        let content = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\n\
                       chr1\t100\trs1\tA\tG,T\t50\tPASS\t.\tGT\t1/2\n";
        let other = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\n\
                     chr1\t100\trs1\tA\tT,G\t50\tPASS\t.\tGT\t2/1\n";

        let reader_a = FilteredLineReader::new(content.as_bytes(), ExcludeSet::new());
        let reader_b = FilteredLineReader::new(other.as_bytes(), ExcludeSet::new());

        let mut out = Vec::new();
        let stats = CompareCommand::new()
            .compare_streams(reader_a, reader_b, &mut out)
            .unwrap();

        assert_eq!(stats.records_compared, 1);
        assert_eq!(stats.diffs_reported, 0);
    }
}
