//! Convert command implementation

use crate::cli::CliError;
use crate::cli::output::format_identifier_issues;
use crate::config::AppConfig;
use crate::convert::ConversionError;
use crate::loader::DocumentLocation;
use crate::mapping::SchemaMapper;
use crate::models::DataModelDocument;
use crate::validation::check_identifiers;

/// Arguments for the `convert` command
pub struct ConvertArgs {
    /// Local path or URL of a model.yaml document
    pub location: String,
    /// Reject unmapped types and formats
    pub strict: bool,
    /// Report identifiers that may need quoting
    pub check_identifiers: bool,
}

/// Handle the `convert` command: print the SQL for one document
pub async fn handle_convert(args: &ConvertArgs, config: &AppConfig) -> Result<(), CliError> {
    if args.location.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "location cannot be empty".to_string(),
        ));
    }

    let loader = super::default_loader(config)?;
    let mapper = SchemaMapper::with_config(config.mapping.clone().with_strict(
        args.strict || config.mapping.is_strict(),
    ));

    let location = DocumentLocation::parse(&args.location);
    let document = DataModelDocument::new(loader.load_yaml(&location).await?);
    let schema = mapper.map(&document).map_err(ConversionError::from)?;

    if args.check_identifiers {
        eprint!("{}", format_identifier_issues(&check_identifiers(&schema)));
    }

    println!("{}", schema.to_sql());
    Ok(())
}
