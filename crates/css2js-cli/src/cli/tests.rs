#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_chunk_size, parse_jobs};
    use crate::cli::Cli;
    use clap::Parser;
    use css2js::DEFAULT_CHUNK_SIZE;
    use std::path::PathBuf;

    #[test]
    fn test_parse_chunk_size_plain_and_suffixed() {
        assert_eq!(parse_chunk_size("4096"), Ok(4096));
        assert_eq!(parse_chunk_size("64k"), Ok(64 * 1024));
        assert_eq!(parse_chunk_size("2M"), Ok(2 * 1024 * 1024));
        assert_eq!(parse_chunk_size(" 1 "), Ok(1));
    }

    #[test]
    fn test_parse_chunk_size_invalid() {
        assert!(parse_chunk_size("").is_err());
        assert!(parse_chunk_size("0").is_err());
        assert!(parse_chunk_size("0k").is_err());
        assert!(parse_chunk_size("k").is_err());
        assert!(parse_chunk_size("12kb").is_err());
        assert!(parse_chunk_size("-1").is_err());
    }

    #[test]
    fn test_parse_jobs() {
        assert_eq!(parse_jobs("4"), Ok(4));
        assert!(parse_jobs("0").is_err());
        assert!(parse_jobs("many").is_err());
    }

    #[test]
    fn test_cli_minimal() {
        let cli = Cli::try_parse_from(["css2js", "main.css"]).unwrap();
        assert_eq!(cli.convert.inputs, vec![PathBuf::from("main.css")]);
        assert!(!cli.convert.stream);
        assert_eq!(cli.convert.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(cli.convert.out_dir.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["css2js"]).is_err());
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "css2js",
            "--stream",
            "--chunk-size",
            "8k",
            "-d",
            "dist",
            "-e",
            "latin1",
            "--no-split-on-newline",
            "--no-trim-spaces-before-newline",
            "--keep-trailing-newline",
            "--prefix",
            "var css = \"",
            "--suffix",
            "\";",
            "-j",
            "2",
            "a.css",
            "b.css",
        ])
        .unwrap();

        let args = cli.convert;
        assert_eq!(args.inputs.len(), 2);
        assert!(args.stream);
        assert_eq!(args.chunk_size, 8 * 1024);
        assert_eq!(args.out_dir, Some(PathBuf::from("dist")));
        assert_eq!(args.encoding.as_deref(), Some("latin1"));
        assert!(args.no_split_on_newline);
        assert!(args.no_trim_spaces_before_newline);
        assert!(args.keep_trailing_newline);
        assert_eq!(args.prefix.as_deref(), Some("var css = \""));
        assert_eq!(args.suffix.as_deref(), Some("\";"));
        assert_eq!(args.jobs, Some(2));
    }

    #[test]
    fn test_cli_stdin_input() {
        let cli = Cli::try_parse_from(["css2js", "-"]).unwrap();
        assert_eq!(cli.convert.inputs, vec![PathBuf::from("-")]);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["css2js", "-v", "-q", "a.css"]).is_err());
    }
}
