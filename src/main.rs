use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use telemachus_dash::{AppConfig, Dashboard, TerminalScreen};
use telemachus_dash_core::{registry, BoxedDataSource};
use telemachus_dash_sources::{DatalinkQuery, DemoSource, TelemachusSource};

/// telemachus-dash - A terminal instrument panel for live flight-simulation telemetry
#[derive(Parser, Debug, Clone)]
#[command(name = "telemachus-dash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Datalink host (overrides the config file)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Datalink port (overrides the config file)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Delay between poll cycles in milliseconds
    #[arg(short = 'i', long = "interval-ms", value_name = "MS")]
    interval_ms: Option<u64>,

    /// Request timeout in milliseconds
    #[arg(short = 't', long = "timeout-ms", value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Config file to load instead of the per-user one
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show a synthetic launch instead of polling the simulator
    #[arg(long)]
    demo: bool,

    /// List the telemetry channels and exit
    #[arg(short = 'l', long = "list-fields")]
    list_fields: bool,

    /// Print the datalink request URL and exit
    #[arg(long)]
    print_url: bool,

    /// Save the effective configuration to the per-user config file and exit
    #[arg(long)]
    write_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only, so log output does not fight the panel
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting telemachus-dash v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list_fields {
        list_fields();
        return Ok(());
    }

    let mut config = match cli.config {
        Some(ref path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    apply_cli_overrides(&mut config, &cli);

    if cli.print_url {
        println!("{}", DatalinkQuery::from_registry().url(&config.endpoint));
        return Ok(());
    }

    if cli.write_config {
        let path = config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let source: BoxedDataSource = if cli.demo {
        Box::new(DemoSource::new())
    } else {
        Box::new(TelemachusSource::new(
            &config.endpoint,
            config.request_timeout(),
        )?)
    };

    let mut dashboard = Dashboard::new(source, TerminalScreen::stdout(), config.poll_interval());
    dashboard.run()
}

fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(ref host) = cli.host {
        config.endpoint.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.endpoint.port = port;
    }
    if let Some(ms) = cli.interval_ms {
        config.poll_interval_ms = ms;
    }
    if let Some(ms) = cli.timeout_ms {
        config.request_timeout_ms = ms;
    }
}

/// Print the channel registry to stdout
fn list_fields() {
    println!(
        "{:<6} {:<28} {:<30} {:<18} {}",
        "KEY", "REMOTE PATH", "CAPACITY PATH", "LABEL", "UNIT"
    );
    for field in registry::fields() {
        println!(
            "{:<6} {:<28} {:<30} {:<18} {}",
            field.key,
            field.remote_path,
            if field.has_capacity() {
                field.remote_max_path
            } else {
                "-"
            },
            field.label,
            field.unit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::parse_from([
            "telemachus-dash",
            "--host",
            "sim-box",
            "--port",
            "8085",
            "-i",
            "100",
        ]);
        let mut config = AppConfig::default();
        apply_cli_overrides(&mut config, &cli);
        assert_eq!(config.endpoint.host, "sim-box");
        assert_eq!(config.endpoint.port, 8085);
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.request_timeout_ms, 2000);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["telemachus-dash"]);
        let mut config = AppConfig::default();
        apply_cli_overrides(&mut config, &cli);
        assert_eq!(config, AppConfig::default());
        assert_eq!(cli.debug, 0);
        assert!(!cli.demo);
    }
}
