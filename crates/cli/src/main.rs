use clap::Parser;
use dnscrawler_domain::{normalize_domain_input, CliOverrides};
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dnscrawler")]
#[command(version)]
#[command(about = "dnscrawler - Nameservers, delegation path and records of a domain")]
struct Cli {
    /// Domain to inspect (a URL is accepted; scheme and path are dropped)
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Skip the delegation trace
    #[arg(long)]
    no_trace: bool,

    /// Skip Team Cymru ASN attribution
    #[arg(long)]
    no_asn: bool,

    /// Skip PTR lookups for A and AAAA records
    #[arg(long)]
    no_reverse: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        no_trace: cli.no_trace,
        no_asn: cli.no_asn,
        no_reverse: cli.no_reverse,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let domain = normalize_domain_input(&cli.domain)?;
    info!(domain = %domain, "Inspecting domain");

    let use_cases = di::UseCases::new();
    let report = use_cases.inspect_domain.execute(&domain, config.lookup).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::render_text(&report));
    }

    Ok(())
}
