mod commands;
mod gateway;

use clap::{Parser, Subcommand};
use fanyi_baidu::BaiduTranslator;
use fanyi_core::config;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Sender id for the console channel.
const CONSOLE_SENDER: &str = "console";

#[derive(Parser)]
#[command(
    name = "fanyi",
    version,
    about = "fanyi: chat translation bot on the Baidu translation API"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Read chat messages from stdin and print replies.
    Start,
    /// Write a config template if none exists.
    Init,
    /// Show configuration status.
    Status,
    /// Handle a single message and print the reply.
    Ask {
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.fanyi.log_level)),
        )
        .init();

    match cli.command {
        Commands::Init => {
            if config::install_template(&cli.config)? {
                println!("Wrote {}. Fill in [baidu] appid and seckey.", cli.config);
            } else {
                println!("{} already exists, left untouched.", cli.config);
            }
        }
        Commands::Status => {
            println!("fanyi status\n");
            println!("Config: {}", cli.config);
            println!(
                "  credentials: {}",
                if cfg.baidu.is_configured() {
                    "configured"
                } else {
                    "missing appid/seckey"
                }
            );
            println!("  endpoint: {}", cfg.baidu.api_base);
            println!("  timeout: {}s per call", cfg.baidu.req_timeout_secs);
            println!("  default language: {}", cfg.baidu.default_lang);
        }
        Commands::Start => {
            config::install_template(&cli.config)?;
            if !cfg.baidu.is_configured() {
                tracing::warn!("baidu credentials missing; translation commands will be refused");
            }

            let gw = gateway::Gateway::new(BaiduTranslator::new(), cfg.baidu.clone());
            println!("fanyi: reading messages from stdin (Ctrl-D to quit)");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if let Some(reply) = gw.handle_message(CONSOLE_SENDER, &line).await {
                    println!("{reply}\n");
                }
            }
        }
        Commands::Ask { message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: fanyi ask <message>");
            }

            let text = message.join(" ");
            let gw = gateway::Gateway::new(BaiduTranslator::new(), cfg.baidu.clone());
            match gw.handle_message(CONSOLE_SENDER, &text).await {
                Some(reply) => println!("{reply}"),
                None => println!("Not a translation command."),
            }
        }
    }

    Ok(())
}
