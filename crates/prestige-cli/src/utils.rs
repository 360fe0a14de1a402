//! Logging setup and input reading helpers.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Initialize logging based on CLI verbosity settings.
pub fn initialize_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::from_default_env()
            .add_directive("prestige_cli=debug".parse().unwrap())
            .add_directive("prestige_parser=debug".parse().unwrap())
    } else {
        EnvFilter::from_default_env()
            .add_directive("prestige_cli=info".parse().unwrap())
            .add_directive("prestige_parser=info".parse().unwrap())
    };

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Read the response buffer from a file path, or stdin when the path is
/// omitted or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<think>hi</think>").unwrap();
        let content = read_input(Some(file.path())).unwrap();
        assert_eq!(content, "<think>hi</think>");
    }

    #[test]
    fn test_read_input_missing_file_fails() {
        let result = read_input(Some(Path::new("/nonexistent/response.txt")));
        assert!(result.is_err());
    }
}
