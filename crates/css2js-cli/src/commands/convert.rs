//! Convert command implementation.
//!
//! Every input is an independent job with its own transcoder state. Jobs run
//! concurrently (bounded by `--jobs`), and a failing job is reported without
//! affecting the others.

use crate::cli::{ConvertArgs, STDIN_INPUT};
use crate::config::load_options;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use css2js::{
    ByteStream, Contents, Css2JsOptions, Encoding, ReadMode, SourceFile, read_chunks,
    replace_extension, resolve_encoding,
};
use futures::{StreamExt, TryStreamExt, stream};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::Instrument;

/// Settings shared by every job of one run.
#[derive(Debug)]
struct JobSettings<'a> {
    options: &'a Css2JsOptions,
    encoding: &'static Encoding,
    mode: ReadMode,
    chunk_size: usize,
    out_dir: Option<&'a Path>,
}

/// Where a job's output went.
#[derive(Debug)]
enum Output {
    File { path: PathBuf, bytes: u64 },
    Stdout { bytes: u64 },
    /// Null contents (directories) produce no output
    Skipped,
}

/// Execute the convert command.
///
/// # Process
///
/// 1. Load options (CLI > Env > File > Defaults)
/// 2. Resolve the input encoding
/// 3. Convert every input, buffered or streamed
/// 4. Report each job and a summary
///
/// # Errors
///
/// Returns an error for invalid configuration or arguments, and
/// [`CliError::JobsFailed`] if any job failed.
pub async fn execute(args: ConvertArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    validate_inputs(&args.inputs)?;

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let options = load_options(&args, &cwd)?;
    let encoding = resolve_encoding(args.encoding.as_deref());
    let mode = if args.stream {
        ReadMode::Stream {
            chunk_size: args.chunk_size,
        }
    } else {
        ReadMode::Buffer
    };

    if let Some(out_dir) = &args.out_dir {
        tokio::fs::create_dir_all(out_dir)
            .await
            .with_path(out_dir)
            .with_hint("Check output directory permissions")?;
    }

    check_output_collisions(&args.inputs, args.out_dir.as_deref()).await?;

    let settings = JobSettings {
        options: &options,
        encoding,
        mode,
        chunk_size: args.chunk_size,
        out_dir: args.out_dir.as_deref(),
    };
    let jobs = args.jobs.unwrap_or_else(default_jobs);
    tracing::debug!(jobs, encoding = encoding.name(), ?mode, "starting conversion");

    let settings = &settings;
    let results: Vec<(&PathBuf, Result<Output>)> = stream::iter(&args.inputs)
        .map(move |input| async move {
            let span = tracing::debug_span!("job", input = %input.display());
            let result = run_job(input, settings).instrument(span).await;
            (input, result)
        })
        .buffered(jobs)
        .collect()
        .await;

    let total = results.len();
    let mut failed = 0;
    for (input, result) in results {
        match result {
            Ok(output) if !quiet => report(input, &output),
            Ok(_) => {}
            Err(err) => {
                failed += 1;
                ui::error(&format!("{}: {}", input.display(), err));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::JobsFailed { failed, total });
    }

    if !quiet {
        ui::success(&format!(
            "Converted {} file(s) in {}",
            total,
            ui::format_duration(start_time.elapsed())
        ));
    }

    Ok(())
}

fn validate_inputs(inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        return Err(CliError::InvalidArgument(
            "At least one input is required".to_string(),
        ));
    }

    let stdin_count = inputs
        .iter()
        .filter(|input| input.as_path() == Path::new(STDIN_INPUT))
        .count();
    if stdin_count > 1 {
        return Err(CliError::InvalidArgument(
            "stdin (-) can only be given once".to_string(),
        ));
    }

    Ok(())
}

async fn run_job(input: &Path, settings: &JobSettings<'_>) -> Result<Output> {
    let source = load_source(input, settings).await?;
    tracing::debug!(contents = ?source.contents, "loaded source");
    write_converted(input, source, settings).await
}

async fn load_source(input: &Path, settings: &JobSettings<'_>) -> Result<SourceFile> {
    if input == Path::new(STDIN_INPUT) {
        let chunks = read_chunks(tokio::io::stdin(), settings.chunk_size);
        return Ok(SourceFile::new(input, Contents::Stream(Box::pin(chunks))));
    }
    Ok(SourceFile::load(input, settings.mode).await?)
}

/// Convert `source` and write the result, to stdout for stdin input.
async fn write_converted(
    input: &Path,
    source: SourceFile,
    settings: &JobSettings<'_>,
) -> Result<Output> {
    let from_stdin = input == Path::new(STDIN_INPUT);
    let converted = css2js::convert(source, settings.options, settings.encoding);

    match converted.contents {
        Contents::Null => Ok(Output::Skipped),
        Contents::Buffer(bytes) => {
            let path = target_path(input, &converted.path, settings.out_dir)?;
            ensure_not_input(input, &path)?;
            tokio::fs::write(&path, &bytes).await.with_path(&path)?;
            Ok(Output::File {
                path,
                bytes: bytes.len() as u64,
            })
        }
        Contents::Stream(mut chunks) if from_stdin => {
            let mut stdout = tokio::io::stdout();
            let bytes = copy_stream(&mut chunks, &mut stdout).await?;
            Ok(Output::Stdout { bytes })
        }
        Contents::Stream(mut chunks) => {
            let path = target_path(input, &converted.path, settings.out_dir)?;
            ensure_not_input(input, &path)?;
            let mut file = tokio::fs::File::create(&path).await.with_path(&path)?;

            match copy_stream(&mut chunks, &mut file).await {
                Ok(bytes) => Ok(Output::File { path, bytes }),
                Err(err) => {
                    drop(file);
                    // a truncated script must not look like a finished one
                    if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                        tracing::warn!(
                            path = %path.display(),
                            error = %remove_err,
                            "failed to remove partial output"
                        );
                    }
                    Err(err.into())
                }
            }
        }
    }
}

/// Pick the output path for a converted file.
fn target_path(input: &Path, converted: &Path, out_dir: Option<&Path>) -> Result<PathBuf> {
    match out_dir {
        Some(dir) => {
            let name = converted.file_name().ok_or_else(|| {
                CliError::InvalidArgument(format!("Input has no file name: {}", input.display()))
            })?;
            Ok(dir.join(name))
        }
        None => Ok(converted.to_path_buf()),
    }
}

/// Fail if `target` is the same file as `input`, however either is spelled.
fn ensure_not_input(input: &Path, target: &Path) -> Result<()> {
    let Ok(source) = input.canonicalize() else {
        // nothing on disk to protect
        return Ok(());
    };
    let target_identity = resolve_identity(target).with_path(target)?;

    if source == target_identity || is_same_inode(input, target) {
        return Err(CliError::InvalidArgument(format!(
            "Output would overwrite input: {}",
            input.display()
        )));
    }
    Ok(())
}

/// Hard links share an inode but not a canonical path.
#[cfg(unix)]
fn is_same_inode(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_inode(_a: &Path, _b: &Path) -> bool {
    false
}

/// Resolve `path` to an absolute path without symlinks, whether or not the
/// file exists yet. Its parent directory must exist.
fn resolve_identity(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        return path.canonicalize();
    }

    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(parent.canonicalize()?.join(file_name))
}

/// Reject runs where two inputs would write the same output file.
async fn check_output_collisions(inputs: &[PathBuf], out_dir: Option<&Path>) -> Result<()> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    for input in inputs {
        if input.as_path() == Path::new(STDIN_INPUT) {
            continue;
        }
        // directories produce no output
        if tokio::fs::metadata(input).await.is_ok_and(|m| m.is_dir()) {
            continue;
        }

        let target = target_path(input, &replace_extension(input, "js"), out_dir)?;
        // a missing parent fails the job itself when it loads
        let Ok(identity) = resolve_identity(&target) else {
            continue;
        };

        if let Some(previous) = claimed.insert(identity, input) {
            return Err(CliError::InvalidArgument(format!(
                "{} and {} would both write {}",
                previous.display(),
                input.display(),
                target.display()
            )));
        }
    }

    Ok(())
}

/// Write every chunk of `chunks` to `writer`, returning the byte count.
async fn copy_stream<W>(chunks: &mut ByteStream, writer: &mut W) -> std::io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while let Some(chunk) = chunks.try_next().await? {
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    writer.flush().await?;
    Ok(written)
}

fn report(input: &Path, output: &Output) {
    match output {
        Output::File { path, bytes } => ui::info(&format!(
            "{} → {} ({})",
            input.display(),
            path.display(),
            ui::format_size(*bytes)
        )),
        Output::Stdout { bytes } => tracing::debug!(bytes, "wrote converted stdin to stdout"),
        Output::Skipped => ui::warning(&format!("Skipped {} (not a file)", input.display())),
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use tempfile::TempDir;

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs(&[]).is_err());
        assert!(validate_inputs(&[PathBuf::from("a.css"), PathBuf::from("-")]).is_ok());
        assert!(validate_inputs(&[PathBuf::from("-"), PathBuf::from("-")]).is_err());
    }

    fn settings<'a>(options: &'a Css2JsOptions, out_dir: Option<&'a Path>) -> JobSettings<'a> {
        JobSettings {
            options,
            encoding: resolve_encoding(None),
            mode: ReadMode::Buffer,
            chunk_size: 4,
            out_dir,
        }
    }

    #[test]
    fn test_target_path_next_to_input() {
        let path = target_path(
            Path::new("styles/main.css"),
            Path::new("styles/main.js"),
            None,
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("styles/main.js"));
    }

    #[test]
    fn test_target_path_in_out_dir() {
        let path = target_path(
            Path::new("styles/main.css"),
            Path::new("styles/main.js"),
            Some(Path::new("dist")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("dist/main.js"));
    }

    #[test]
    fn test_refuses_to_overwrite_input_spelled_differently() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("bundle.js");
        std::fs::write(&input, "ORIGINAL\n").unwrap();

        let dotted = temp.path().join(".").join("bundle.js");
        let err = ensure_not_input(&input, &dotted).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));

        let via_subdir = temp.path().join("sub").join("..").join("bundle.js");
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        assert!(ensure_not_input(&input, &via_subdir).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_refuses_to_overwrite_input_through_links() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("main.css");
        std::fs::write(&input, "a{}").unwrap();

        let symlink = temp.path().join("main.js");
        std::os::unix::fs::symlink(&input, &symlink).unwrap();
        assert!(ensure_not_input(&input, &symlink).is_err());

        let hard_link = temp.path().join("other.js");
        std::fs::hard_link(&input, &hard_link).unwrap();
        assert!(ensure_not_input(&input, &hard_link).is_err());
    }

    #[test]
    fn test_allows_distinct_output() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("main.css");
        std::fs::write(&input, "a{}").unwrap();

        assert!(ensure_not_input(&input, &temp.path().join("main.js")).is_ok());
    }

    #[tokio::test]
    async fn test_output_collisions_rejected() {
        let temp = TempDir::new().unwrap();
        let css = temp.path().join("a.css");
        let scss = temp.path().join("a.scss");
        std::fs::write(&css, "a{}").unwrap();
        std::fs::write(&scss, "a{}").unwrap();

        let err = check_output_collisions(&[css.clone(), scss], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("would both write"));

        let other = temp.path().join("b.css");
        assert!(check_output_collisions(&[css, other], None).await.is_ok());
    }

    #[tokio::test]
    async fn test_output_collisions_through_out_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("x")).unwrap();
        std::fs::create_dir_all(temp.path().join("y")).unwrap();
        let dist = temp.path().join("dist");
        std::fs::create_dir(&dist).unwrap();

        let inputs = [
            temp.path().join("x/main.css"),
            temp.path().join("y/main.css"),
        ];
        assert!(check_output_collisions(&inputs, Some(&dist)).await.is_err());
        assert!(check_output_collisions(&inputs, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_stream_removes_partial_output() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("main.css");
        std::fs::write(&input, "a {}\n").unwrap();
        let source = SourceFile::new(
            &input,
            Contents::Stream(Box::pin(stream::iter(vec![
                Ok(b"a {}\n".to_vec()),
                Err(std::io::Error::other("connection reset")),
            ]))),
        );
        let options = Css2JsOptions::default();

        let result = write_converted(&input, source, &settings(&options, None)).await;

        assert!(matches!(result, Err(CliError::Io(_))));
        assert!(!temp.path().join("main.js").exists());
        assert!(input.exists());
    }

    #[tokio::test]
    async fn test_stream_written_in_full() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("main.css");
        let source = SourceFile::new(
            &input,
            Contents::Stream(Box::pin(stream::iter(vec![
                Ok::<_, std::io::Error>(b"a {".to_vec()),
                Ok(b"}\n".to_vec()),
            ]))),
        );
        let options = Css2JsOptions::new().with_prefix("<").with_suffix(">");

        let output = write_converted(&input, source, &settings(&options, None))
            .await
            .unwrap();

        assert!(matches!(output, Output::File { bytes: 6, .. }));
        let written = std::fs::read_to_string(temp.path().join("main.js")).unwrap();
        assert_eq!(written, "<a {}>");
    }

    #[tokio::test]
    async fn test_copy_stream_counts_bytes() {
        let mut chunks: ByteStream = Box::pin(stream::iter(vec![
            Ok(b"abc".to_vec()),
            Ok(b"de".to_vec()),
        ]));
        let mut out = Vec::new();

        let written = copy_stream(&mut chunks, &mut out).await.unwrap();
        assert_eq!(written, 5);
        assert_eq!(out, b"abcde");
    }

    #[tokio::test]
    async fn test_copy_stream_propagates_source_error() {
        let mut chunks: ByteStream = Box::pin(stream::iter(vec![
            Ok(b"abc".to_vec()),
            Err(std::io::Error::other("source failed")),
        ]));
        let mut out = Vec::new();

        assert!(copy_stream(&mut chunks, &mut out).await.is_err());
    }
}
