//! sdm-sql-schema: PostgreSQL schemas from Smart Data Models model.yaml files

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use sdm_sql_schema::cli::commands::batch::{BatchArgs, handle_batch};
use sdm_sql_schema::cli::commands::convert::{ConvertArgs, handle_convert};
use sdm_sql_schema::cli::commands::serve::{ServeArgs, handle_serve};
use sdm_sql_schema::cli::logging::init_logging;
use sdm_sql_schema::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "sdm-sql-schema", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one model.yaml (local path or URL) and print the SQL
    Convert {
        location: String,
        /// Fail on types or formats without a SQL mapping
        #[arg(long)]
        strict: bool,
        /// Report identifiers that may need quoting
        #[arg(long)]
        check_identifiers: bool,
    },
    /// Convert every data model listed in a batch configuration file
    Batch {
        #[arg(long, default_value = "datamodels_to_publish.json")]
        config_file: String,
        /// Do not check the subject against the official data model list
        #[arg(long)]
        skip_official_list: bool,
        /// Fail on types or formats without a SQL mapping
        #[arg(long)]
        strict: bool,
    },
    /// Run the HTTP endpoint
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Convert {
            location,
            strict,
            check_identifiers,
        } => {
            let args = ConvertArgs {
                location,
                strict,
                check_identifiers,
            };
            handle_convert(&args, &config).await?;
        }
        Command::Batch {
            config_file,
            skip_official_list,
            strict,
        } => {
            let args = BatchArgs {
                config_file,
                skip_official_list,
                strict,
            };
            let report = handle_batch(&args, &config).await?;
            if !report.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Serve { host, port } => {
            handle_serve(&ServeArgs { host, port }, &config).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
