use serde::{Deserialize, Serialize};

/// One movie and the theaters screening it, as read from a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub movie: String,
    pub theaters: Vec<String>,
}

impl CatalogEntry {
    pub fn new(movie: impl Into<String>, theaters: &[&str]) -> Self {
        Self {
            movie: movie.into(),
            theaters: theaters.iter().map(|t| t.to_string()).collect(),
        }
    }
}
