use tracing_subscriber::EnvFilter;

/// Crates whose events reach the log: the binary and both libraries.
const LOG_TARGETS: [&str; 3] = ["psfmat", "psfmat_matrix", "psfmat_spectral"];

/// Maps the `-v` count to a level: none warn, `-v` info, `-vv` debug,
/// `-vvv` and beyond trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the `target=level` directive list used when `RUST_LOG` is unset.
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    LOG_TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",")
}

/// Installs a stderr subscriber so that matrices printed to stdout stay
/// clean. `RUST_LOG` takes precedence over the `-v` count.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(
            directives(0),
            "psfmat=warn,psfmat_matrix=warn,psfmat_spectral=warn"
        );
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(9), "trace");
    }
}
