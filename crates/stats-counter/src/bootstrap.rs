use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name (`DEBUG`, `INFO`, `WARNING`, ...) to a tracing
/// filter directive. Unrecognised names are passed through lower-cased.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" | "WARN" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        other => other.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Events go to stderr so the report on stdout stays machine-readable.
/// Falls back to `"warn"` if the level string is not a valid directive.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive_maps_level_names() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("INFO"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("ERROR"), "error");
        assert_eq!(level_directive("CRITICAL"), "error");
    }

    #[test]
    fn test_level_directive_is_case_insensitive() {
        assert_eq!(level_directive("warning"), "warn");
        assert_eq!(level_directive("Trace"), "trace");
    }

    #[test]
    fn test_setup_logging_only_once() {
        // The first call installs the global subscriber; any later call fails
        // instead of silently replacing it.
        let _ = setup_logging("INFO");
        assert!(setup_logging("DEBUG").is_err());
    }
}
