/// Parse a chunk size such as `4096`, `64k` or `1m`.
///
/// # Errors
///
/// Returns an error message for empty, zero, malformed, or overflowing sizes.
pub fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Chunk size cannot be empty".to_string());
    }

    let (digits, multiplier) = match s.chars().last() {
        Some('k' | 'K') => (&s[..s.len() - 1], 1024),
        Some('m' | 'M') => (&s[..s.len() - 1], 1024 * 1024),
        _ => (s, 1),
    };

    let value: usize = digits
        .parse()
        .map_err(|_| format!("Invalid chunk size: '{}'", s))?;

    match value.checked_mul(multiplier) {
        Some(0) => Err("Chunk size must be greater than zero".to_string()),
        Some(size) => Ok(size),
        None => Err(format!("Chunk size is too large: '{}'", s)),
    }
}

/// Parse the number of concurrent jobs.
///
/// # Errors
///
/// Returns an error message if the value is not a positive integer.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("Number of jobs must be at least 1".to_string()),
        Ok(jobs) => Ok(jobs),
        Err(_) => Err(format!("Invalid number of jobs: '{}'", s)),
    }
}
