// Entrypoint for the CLI application.
// - Parses the command line, sets up logging and builds the API client
//   from an explicit `Config`.
// - Returns `anyhow::Result`, so any failure is printed to stderr and the
//   process exits with status 1.

use clap::{Parser, Subcommand};
use currconv_cli::{api::ApiClient, config::Config, picker::PickerOptions, ui};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "currconv-cli", version, about = "Convert an amount between currencies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Key for the currency API
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Root URL of the currency API
    #[arg(long, env = "CURRENCY_API_URL", global = true)]
    api_url: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick currencies interactively and convert (default)
    Pick {
        /// Hide the amount field and print unit rates
        #[arg(long)]
        no_amount: bool,
    },
    /// Print every supported currency
    List,
    /// Convert without the picker
    Convert {
        #[arg(long)]
        base: String,
        /// Comma separated target codes
        #[arg(long, value_delimiter = ',', required = true)]
        to: Vec<String>,
        #[arg(long)]
        amount: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_env("RUST_LOG")
        .init();

    // Resolve the key before any request is attempted.
    let config = Config::new(cli.api_key, cli.api_url)?;
    let api = ApiClient::new(config)?;

    match cli.command.unwrap_or(Commands::Pick { no_amount: false }) {
        Commands::Pick { no_amount } => {
            let options = PickerOptions {
                amount_entry: !no_amount,
                ..Default::default()
            };
            ui::pick_and_convert(&api, options)
        }
        Commands::List => ui::list(&api),
        Commands::Convert { base, to, amount } => ui::convert_direct(&api, &base, &to, amount),
    }
}
