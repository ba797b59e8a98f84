use clap::Parser;

use quicktag::HostConfig;

#[derive(Parser)]
#[command(name = "quicktag", about = "Inline tag search demo for text input")]
struct Cli {
    /// Write debug logs to /tmp/quicktag-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Load extra pack files (*.toml) from this directory.
    #[arg(long, value_name = "DIR")]
    packs: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/quicktag-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("quicktag debug log started; tail -f /tmp/quicktag-debug.log");
    }

    let mut host = HostConfig::load().unwrap_or_else(|_| HostConfig::defaults());
    if let Some(dir) = cli.packs {
        host.packs.dir = Some(dir);
    }

    quicktag::demo::run(host)
}
