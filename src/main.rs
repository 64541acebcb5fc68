use anyhow::{bail, Result};
use brc_gen::Config;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    let count = config.count;
    let summary = config.run()?;

    if !summary.is_clean() {
        warn!(written = summary.written, failed = summary.failed, "output is incomplete");
        bail!("{} write(s) failed while generating {count} records", summary.failed);
    }
    Ok(())
}

/// Logs go to stderr; quiet unless `RUST_LOG` asks for more.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
