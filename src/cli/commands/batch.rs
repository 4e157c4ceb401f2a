//! Batch command implementation

use crate::batch::{BatchConfig, BatchReport, BatchRunner};
use crate::cli::CliError;
use crate::cli::output::{format_batch_output, format_batch_summary};
use crate::config::AppConfig;
use crate::loader::DocumentLocation;
use crate::mapping::SchemaMapper;

/// Arguments for the `batch` command
pub struct BatchArgs {
    /// Batch configuration file (`{"subject", "dataModels"}`)
    pub config_file: String,
    /// Do not check the subject against the official data model list
    pub skip_official_list: bool,
    /// Reject unmapped types and formats
    pub strict: bool,
}

/// Handle the `batch` command. Returns the report so the caller can set the exit code.
pub async fn handle_batch(args: &BatchArgs, config: &AppConfig) -> Result<BatchReport, CliError> {
    let loader = super::default_loader(config)?;
    let batch_config =
        BatchConfig::load(loader.as_ref(), &DocumentLocation::parse(&args.config_file)).await?;

    let mapper = SchemaMapper::with_config(config.mapping.clone().with_strict(
        args.strict || config.mapping.is_strict(),
    ));
    let mut runner = BatchRunner::new(loader, mapper, config.sources.batch_template.clone());
    if !args.skip_official_list
        && let Some(list) = &config.sources.official_list
    {
        runner = runner.with_official_list(DocumentLocation::parse(list));
    }

    let report = runner.run(&batch_config).await;

    print!("{}", format_batch_output(&report));
    eprint!("{}", format_batch_summary(&report));
    Ok(report)
}
