//! CLI argument definitions for `gdc-tools`.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gdc_api::DEFAULT_NUM_RESULTS;

#[derive(Parser)]
#[command(
    name = "gdc-tools",
    version,
    about = "Query the GDC API and summarize TCGA clinical XML",
    long_about = "Look up cases and files in the Genomic Data Commons API, download\n\
                  manifests and clinical XML, and flatten TCGA clinical XML files\n\
                  into a single tab-separated table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// GDC API base URL (default: $GDC_API_URL or https://gdc-api.nci.nih.gov).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Seconds to wait for each GDC API request (default: 120).
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flatten a directory of TCGA clinical XML files into one TSV table.
    ParseClinical(ParseClinicalArgs),

    /// Find the case UUID for file UUIDs or BAM file names.
    File2case(File2caseArgs),

    /// Find the clinical XML file ID for case UUIDs.
    Case2clinical(Case2clinicalArgs),

    /// Search files and download a GDC manifest for them.
    Manifest(ManifestArgs),

    /// Download clinical XML files by file ID.
    Clinical2xml(Clinical2xmlArgs),

    /// List the supported manifest search values.
    Choices,
}

#[derive(Args)]
pub struct ParseClinicalArgs {
    /// Directory searched recursively for clinical XML files.
    #[arg(short = 'i', long = "input-dir", value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Output TSV. Missing directories are created; an existing file is replaced.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        default_value = "tcga_clinical_data.tsv"
    )]
    pub output_file: PathBuf,

    /// Stop at the first file that cannot be extracted and write nothing.
    #[arg(long = "halt-on-error")]
    pub halt_on_error: bool,

    /// Keep dead patients without days_to_death, with a null survival.
    ///
    /// By default such records are rejected.
    #[arg(long = "null-survival-when-dead-without-days")]
    pub null_survival_when_dead_without_days: bool,
}

/// Identifier input shared by the lookup and download commands.
#[derive(Args)]
#[command(group(ArgGroup::new("ids").required(true).args(["input", "from_file"])))]
pub struct IdInputArgs {
    /// A single identifier or a comma-separated list.
    #[arg(short = 'i', long = "input", value_name = "IDS")]
    pub input: Option<String>,

    /// A file with one identifier per line.
    #[arg(short = 'f', long = "from-file", value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct File2caseArgs {
    /// File UUIDs, or BAM file names (when the first one ends in .bam).
    #[command(flatten)]
    pub ids: IdInputArgs,

    /// Output TSV. Missing directories are created.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        default_value = "results.tsv"
    )]
    pub output_file: PathBuf,
}

#[derive(Args)]
pub struct Case2clinicalArgs {
    /// Case UUIDs.
    #[command(flatten)]
    pub ids: IdInputArgs,

    /// Output TSV. Missing directories are created.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        default_value = "case2clinical_results.tsv"
    )]
    pub output_file: PathBuf,
}

#[derive(Args)]
pub struct ManifestArgs {
    /// Data format, e.g. BAM. See `gdc-tools choices`.
    #[arg(long = "data-format", value_name = "FORMAT")]
    pub data_format: String,

    /// Experimental strategy, e.g. RNA-Seq. See `gdc-tools choices`.
    #[arg(long = "experimental-strategy", value_name = "STRATEGY")]
    pub experimental_strategy: String,

    /// Primary site, e.g. Colorectal. See `gdc-tools choices`.
    #[arg(long = "primary-site", value_name = "SITE")]
    pub primary_site: String,

    /// Minimum file size in bytes, e.g. 5000000000 for 5GB.
    #[arg(long = "min-filesize", value_name = "BYTES", default_value_t = 0)]
    pub min_filesize: u64,

    /// File names to leave out: a comma-separated list or a .txt file with one name per line.
    #[arg(long = "exclude-files", value_name = "NAMES|PATH")]
    pub exclude_files: Option<String>,

    /// Maximum number of files.
    #[arg(long = "num-results", value_name = "N", default_value_t = DEFAULT_NUM_RESULTS)]
    pub num_results: usize,

    /// Manifest file. Missing directories are created; an existing file is replaced.
    #[arg(long = "output-file", value_name = "PATH", default_value = "manifest.tsv")]
    pub output_file: PathBuf,

    /// Only patients with this vital status.
    #[arg(long = "vital-status", value_enum)]
    pub vital_status: Option<VitalStatusArg>,

    /// Minimum days from diagnosis to death.
    #[arg(long = "days-to-death-min", value_name = "DAYS", allow_hyphen_values = true)]
    pub days_to_death_min: Option<i64>,

    /// Maximum days from diagnosis to death.
    #[arg(long = "days-to-death-max", value_name = "DAYS", allow_hyphen_values = true)]
    pub days_to_death_max: Option<i64>,
}

#[derive(Args)]
pub struct Clinical2xmlArgs {
    /// Clinical XML file IDs.
    #[command(flatten)]
    pub ids: IdInputArgs,

    /// Output directory. Missing directories are created.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Unpack a multi-file download into the output directory.
    #[arg(long = "extract")]
    pub extract: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VitalStatusArg {
    Dead,
    Alive,
}

impl VitalStatusArg {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dead => "dead",
            Self::Alive => "alive",
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
