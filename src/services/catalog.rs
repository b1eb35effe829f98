use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::CatalogEntry;
use crate::services::movie_service::MovieService;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Catalog used when no seed file is configured.
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Movie1", &["Theater1", "Theater2"]),
        CatalogEntry::new("Movie2", &["Theater1", "Theater3"]),
    ]
}

/// Reads a JSON array of `{ "movie": ..., "theaters": [...] }` objects.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>, CatalogError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Registers every entry in order; a repeated movie keeps its last theater list.
pub fn seed_catalog(service: &mut MovieService, entries: &[CatalogEntry]) {
    for entry in entries {
        service.add_movie(&entry.movie, &entry.theaters);
    }
    info!("Catalog seeded with {} movies", service.all_movies().len());
}
