//! Load-and-map conversion shared by the batch runner and the HTTP endpoint

use crate::loader::{DocumentLoader, DocumentLocation, LoadError};
use crate::mapping::{MappingError, SchemaMapper};
use crate::models::DataModelDocument;

/// Failure converting one document
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Load the document at `location` and render its PostgreSQL schema
pub async fn convert_location(
    loader: &dyn DocumentLoader,
    mapper: &SchemaMapper,
    location: &DocumentLocation,
) -> Result<String, ConversionError> {
    tracing::info!("Converting {}", location);
    let document = DataModelDocument::new(loader.load_yaml(location).await?);
    Ok(mapper.map_to_sql(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemoryDocumentLoader;

    #[tokio::test]
    async fn test_convert_location() {
        let loader = MemoryDocumentLoader::new()
            .with_document("a.yaml", "A:\n  properties:\n    n:\n      type: integer\n")
            .with_document("broken.yaml", "A:\n  description: none\n");
        let mapper = SchemaMapper::new();

        let sql = convert_location(&loader, &mapper, &DocumentLocation::parse("a.yaml"))
            .await
            .unwrap();
        assert_eq!(sql, "\nCREATE TABLE A (n INTEGER);");

        let err = convert_location(&loader, &mapper, &DocumentLocation::parse("broken.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::Mapping(MappingError::InvalidDocument(_))));

        let err = convert_location(&loader, &mapper, &DocumentLocation::parse("none.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::Load(LoadError::FileNotFound(_))));
    }
}
