use std::path::PathBuf;

use algod_client::config::parse_header_list;
use algod_client::{AlgodClient, ClientConfig, TransactionQuery};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// algod - query an Algorand node from the command line
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Node address, e.g. http://localhost:8080
    #[arg(long, env = "ALGOD_ADDRESS", global = true)]
    address: Option<String>,

    /// API token for the X-Algo-API-Token header
    #[arg(long, env = "ALGOD_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// JSON config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra header sent with every request, as NAME=VALUE
    #[arg(short = 'H', long = "header", global = true)]
    headers: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Node status
    Status,
    /// Check that the node is running
    Health,
    /// Wait until the round after ROUND and print the status
    WaitForBlock { round: u64 },
    /// Pending transactions in the pool
    Pending {
        /// Maximum number to return; 0 returns all
        #[arg(long, default_value_t = 0)]
        max: u64,
    },
    /// Supported API versions
    Versions,
    /// Ledger supply
    Supply,
    /// Transactions sent or received by an address
    AccountTxns {
        address: String,
        #[arg(long)]
        first: Option<u64>,
        #[arg(long)]
        last: Option<u64>,
        #[arg(long)]
        max: Option<u64>,
        /// YYYY-MM-DD
        #[arg(long)]
        from_date: Option<NaiveDate>,
        /// YYYY-MM-DD
        #[arg(long)]
        to_date: Option<NaiveDate>,
    },
    /// Account information
    Account { address: String },
    /// A transaction sent by an address
    TxnInfo { address: String, txid: String },
    /// A transaction in the pool
    PendingTxn { txid: String },
    /// A transaction by ID (requires indexer)
    Txn { txid: String },
    /// Suggested fee
    Fee,
    /// Suggested transaction parameters
    Params,
    /// Submit a base64-encoded signed transaction
    SendRaw { txn: String },
    /// Block at ROUND
    Block { round: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = AlgodClient::from_config(resolve_config(&cli)?)?;
    run(&client, cli.command).await
}

/// Build the client config from the config file, flags, and environment.
///
/// Flags override file values; without address and token flags the
/// config file is required.
fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match (&cli.config, &cli.address, &cli.token) {
        (Some(path), _, _) => ClientConfig::load(path)
            .wrap_err_with(|| format!("Failed to load {}", path.display()))?,
        (None, Some(address), Some(token)) => ClientConfig::new(address, token),
        (None, _, _) => {
            let path = ClientConfig::default_path()?;
            ClientConfig::load(&path).wrap_err_with(|| {
                format!(
                    "No --address/--token given and no usable config at {}",
                    path.display()
                )
            })?
        }
    };

    if let Some(address) = &cli.address {
        config.address.clone_from(address);
    }
    if let Some(token) = &cli.token {
        config.token.clone_from(token);
    }
    config
        .headers
        .extend(parse_header_list(cli.headers.iter().map(String::as_str))?);

    Ok(config)
}

async fn run(client: &AlgodClient, command: Commands) -> Result<()> {
    match command {
        Commands::Status => print_json(&client.status().await?),
        Commands::Health => {
            client.health().await?;
            println!("ok");
            Ok(())
        }
        Commands::WaitForBlock { round } => print_json(&client.status_after_block(round).await?),
        Commands::Pending { max } => print_json(&client.pending_transactions(max).await?),
        Commands::Versions => print_json(&client.versions().await?),
        Commands::Supply => print_json(&client.ledger_supply().await?),
        Commands::AccountTxns {
            address,
            first,
            last,
            max,
            from_date,
            to_date,
        } => {
            let query = TransactionQuery {
                first_round: first,
                last_round: last,
                max,
                from_date,
                to_date,
            };
            print_json(&client.transactions_by_address(&address, &query).await?)
        }
        Commands::Account { address } => print_json(&client.account_info(&address).await?),
        Commands::TxnInfo { address, txid } => {
            print_json(&client.transaction_info(&address, &txid).await?)
        }
        Commands::PendingTxn { txid } => {
            print_json(&client.pending_transaction_info(&txid).await?)
        }
        Commands::Txn { txid } => print_json(&client.transaction_by_id(&txid).await?),
        Commands::Fee => print_json(&client.suggested_fee().await?),
        Commands::Params => print_json(&client.suggested_params().await?),
        Commands::SendRaw { txn } => {
            println!("{}", client.send_raw_transaction(&txn, None).await?);
            Ok(())
        }
        Commands::Block { round } => print_json(&client.block_info(round).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(config: Option<PathBuf>, address: Option<&str>, token: Option<&str>) -> Cli {
        Cli {
            address: address.map(str::to_string),
            token: token.map(str::to_string),
            config,
            headers: Vec::new(),
            command: Commands::Status,
        }
    }

    fn saved_config(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("config.json");
        ClientConfig::new("http://file:8080", "file-token")
            .with_header("X-File", "from-file")
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let dir = TempDir::new().unwrap();
        let config = resolve_config(&cli(Some(saved_config(&dir)), None, None)).unwrap();

        assert_eq!(config.address, "http://file:8080");
        assert_eq!(config.token, "file-token");
        assert_eq!(config.headers.get("x-file").map(String::as_str), Some("from-file"));
    }

    #[test]
    fn test_flags_override_file_values() {
        let dir = TempDir::new().unwrap();
        let args = cli(
            Some(saved_config(&dir)),
            Some("http://flag:9090"),
            Some("flag-token"),
        );

        let config = resolve_config(&args).unwrap();

        assert_eq!(config.address, "http://flag:9090");
        assert_eq!(config.token, "flag-token");
        assert_eq!(config.headers.get("x-file").map(String::as_str), Some("from-file"));
    }

    #[test]
    fn test_header_flags_extend_file_headers() {
        let dir = TempDir::new().unwrap();
        let mut args = cli(Some(saved_config(&dir)), None, None);
        args.headers = vec!["X-File=from-flag".to_string(), "X-Extra=1".to_string()];

        let config = resolve_config(&args).unwrap();

        assert_eq!(config.headers.len(), 2);
        assert_eq!(config.headers.get("x-file").map(String::as_str), Some("from-flag"));
        assert_eq!(config.headers.get("x-extra").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_address_and_token_flags_need_no_file() {
        let config = resolve_config(&cli(None, Some("http://flag:9090"), Some("t"))).unwrap();

        assert_eq!(config, ClientConfig::new("http://flag:9090", "t"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.json");

        assert!(resolve_config(&cli(Some(missing), Some("http://a"), Some("t"))).is_err());
    }
}
