use std::path::PathBuf;

/// File opened at startup when nothing else is given.
pub const DEFAULT_SOURCE: &str = "knzwgrm.csv";

/// Environment variable naming the startup file.
pub const SOURCE_ENV: &str = "GURUME_CSV";

/// Startup source: first positional argument, then `$GURUME_CSV`, then
/// [`DEFAULT_SOURCE`]. Blank values are skipped.
pub fn source_path(arg: Option<String>, env: Option<String>) -> PathBuf {
    arg.into_iter()
        .chain(env)
        .find(|s| !s.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_SOURCE), PathBuf::from)
}

/// [`source_path`] applied to the real process arguments and environment.
pub fn startup_source() -> PathBuf {
    source_path(std::env::args().nth(1), std::env::var(SOURCE_ENV).ok())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("a.csv"), Some("b.csv"), "a.csv")]
    #[case(None, Some("b.csv"), "b.csv")]
    #[case(Some("  "), Some("b.csv"), "b.csv")]
    #[case(None, None, DEFAULT_SOURCE)]
    #[case(None, Some(""), DEFAULT_SOURCE)]
    fn precedence(#[case] arg: Option<&str>, #[case] env: Option<&str>, #[case] expected: &str) {
        let got = source_path(arg.map(str::to_string), env.map(str::to_string));
        assert_eq!(got, PathBuf::from(expected));
    }
}
