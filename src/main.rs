//! vcfdiff: semantic tie-out comparison of sorted variant files.
//!
//! Usage: vcfdiff <FILE_A> <FILE_B> [OPTIONS]

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use vcfdiff::compare::CompareCommand;
use vcfdiff::exclude::ExcludeSet;
use vcfdiff::vcf::VcfError;

#[derive(Parser)]
#[command(name = "vcfdiff")]
#[command(version)]
#[command(
    about = "Semantic comparison of two sorted VCF-like variant files",
    long_about = "Compares two line-sorted, tab-delimited variant files record by record, \
                  treating equivalently encoded variants as equal: REF/ALT padding is \
                  normalized away, ALT ordering is ignored, and genotypes are compared by \
                  the alleles they denote rather than by index. All mismatches are reported \
                  to stdout; only a header mismatch fails the run. Both inputs must be \
                  pre-sorted into matching record order (e.g. with unix sort)."
)]
struct Cli {
    /// First variant file
    file_a: PathBuf,

    /// Second variant file
    file_b: PathBuf,

    /// File of excluded loci, one chrom:pos per line
    #[arg(short, long)]
    exclude: Option<PathBuf>,

    /// Absolute tolerance for integer-formatted GQ values
    #[arg(long, default_value_t = 0.0)]
    gq_tolerance: f64,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_compare(
        cli.file_a,
        cli.file_b,
        cli.exclude,
        cli.gq_tolerance,
        cli.stats,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_compare(
    file_a: PathBuf,
    file_b: PathBuf,
    exclude_path: Option<PathBuf>,
    gq_tolerance: f64,
    stats: bool,
) -> Result<(), VcfError> {
    let exclude = exclude_path
        .map(ExcludeSet::from_file)
        .transpose()?
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let cmd = CompareCommand::new().with_gq_tolerance(gq_tolerance);
    let result = cmd.run(&file_a, &file_b, &exclude, &mut handle)?;

    if stats {
        eprintln!("Compare stats: {}", result);
    }

    Ok(())
}
