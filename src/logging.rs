use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging to stderr.
///
/// `GRADES_LOG` or `RUST_LOG` take precedence over `log_level`, which is
/// either a bare level applied to this crate or a full filter directive.
pub fn init_tracing(log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or("warn");
    let filter = EnvFilter::try_from_env("GRADES_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("grades={}", level)
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
