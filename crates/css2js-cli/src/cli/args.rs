use clap::Args;
use css2js::DEFAULT_CHUNK_SIZE;
use std::path::PathBuf;

use crate::cli::validation::{parse_chunk_size, parse_jobs};

/// Input name that reads the stylesheet from stdin and writes to stdout.
pub const STDIN_INPUT: &str = "-";

/// Arguments for converting stylesheets
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Stylesheets to convert
    ///
    /// Each input is converted independently. Use `-` to read from stdin and
    /// write the result to stdout. Directories are skipped.
    ///
    /// Examples:
    ///   css2js src/styles.css
    ///   css2js src/base.css src/theme.css
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output directory for generated files
    ///
    /// By default each `.js` file is written next to its stylesheet.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Read inputs as streams of chunks instead of whole buffers
    #[arg(long)]
    pub stream: bool,

    /// Chunk size for streamed inputs (accepts k/m suffixes)
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Encoding label of the inputs (utf-8, windows-1252, shift_jis, ...)
    ///
    /// Unknown labels fall back to UTF-8.
    #[arg(short = 'e', long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Path to a css2js.config.json file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the output in a single string literal instead of one per line
    #[arg(long)]
    pub no_split_on_newline: bool,

    /// Keep spaces and tabs that precede a newline
    #[arg(long)]
    pub no_trim_spaces_before_newline: bool,

    /// Keep newlines at the end of the stylesheet
    #[arg(long)]
    pub keep_trailing_newline: bool,

    /// Text to emit before the escaped CSS (replaces the <style> injector)
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text to emit after the escaped CSS (replaces the <style> injector)
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Maximum number of files converted concurrently
    ///
    /// Defaults to the number of available CPUs.
    #[arg(short = 'j', long, value_name = "N", value_parser = parse_jobs)]
    pub jobs: Option<usize>,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            out_dir: None,
            stream: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            encoding: None,
            config: None,
            no_split_on_newline: false,
            no_trim_spaces_before_newline: false,
            keep_trailing_newline: false,
            prefix: None,
            suffix: None,
            jobs: None,
        }
    }
}
