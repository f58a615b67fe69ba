use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inbox_trader_bot::{PollLoop, PositionManager, POLL_INTERVAL};
use inbox_trader_core::{AlertSource, AppConfig, ConfigLoader, SignalDetector};
use inbox_trader_mailbox::ImapMailbox;
use inbox_trader_mt5::{Mt5BridgeClient, Mt5ClientConfig};

#[derive(Parser)]
#[command(name = "inbox-trader")]
#[command(about = "Email-alert signal relay for a MetaTrader 5 bridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay loop
    Run {
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: String,
    },
    /// Fetch the latest unread message once and report whether it signals
    CheckMail {
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { config } => run(&config).await,
        Commands::CheckMail { config } => check_mail(&config).await,
    }
}

async fn run(config_path: &str) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate()?;

    // Platform startup failure is fatal: the loop never starts.
    let client = connect_platform(&config).await?;

    let detector = SignalDetector::new(config.trading.signal_marker.clone());
    let mailbox = ImapMailbox::new(config.mail.clone());
    let positions = PositionManager::new(
        client,
        config.trading.symbol.clone(),
        config.trading.lot_size,
        config.trading.deviation,
    );

    tracing::info!(
        symbol = %config.trading.symbol,
        folder = %config.mail.folder,
        interval_secs = POLL_INTERVAL.as_secs(),
        "relay started, watching for alerts"
    );

    PollLoop::new(mailbox, detector, positions).run().await;
    Ok(())
}

async fn check_mail(config_path: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let detector = SignalDetector::new(config.trading.signal_marker.clone());
    let mailbox = ImapMailbox::new(config.mail.clone());

    match mailbox.fetch_latest_unread().await? {
        Some(body) => {
            println!("--- latest unread message ---");
            println!("{body}");
            println!("-----------------------------");
            if detector.matches(&body) {
                println!("signal marker {:?} found", detector.marker());
            } else {
                println!("no signal marker {:?} in message", detector.marker());
            }
        }
        None => println!("no unread mail"),
    }

    Ok(())
}

fn load_config(config_path: &str) -> Result<AppConfig> {
    ConfigLoader::load_file(config_path)
        .with_context(|| format!("failed to load configuration from {config_path}"))
}

async fn connect_platform(config: &AppConfig) -> Result<Mt5BridgeClient> {
    let client = Mt5BridgeClient::new(
        Mt5ClientConfig::default().with_base_url(config.platform.bridge_url.clone()),
    )
    .context("failed to build bridge client")?;

    let status = client
        .status()
        .await
        .context("terminal bridge unreachable")?;
    anyhow::ensure!(status.initialized, "terminal is not initialized");

    client
        .login(
            config.platform.account,
            &config.platform.password,
            &config.platform.server,
        )
        .await
        .context("platform login failed")?;

    tracing::info!(
        account = config.platform.account,
        server = %config.platform.server,
        "connected to trading platform"
    );

    Ok(client)
}
