pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use std::sync::Arc;
use tracing::info;

use services::{CatalogError, MovieService};

// Shared state for the whole application. The catalog is fixed once this is
// built; seat tables stay mutable behind each theater's lock.
#[derive(Debug)]
pub struct AppState {
    pub movies: MovieService,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, CatalogError> {
        let entries = match &config.catalog.seed_path {
            Some(path) => {
                info!("Loading catalog from {}", path);
                services::load_catalog(path)?
            }
            None => services::default_catalog(),
        };

        let mut movies = MovieService::new(config.booking.seat_capacity);
        services::seed_catalog(&mut movies, &entries);

        Ok(Arc::new(Self { movies, config }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_uses_builtin_catalog_and_capacity() {
        let state = AppState::new(config::Config::with_capacity(5)).unwrap();
        assert_eq!(state.movies.all_movies(), vec!["Movie1", "Movie2"]);
        assert_eq!(
            state.movies.available_seats("Movie1", "Theater2").unwrap(),
            vec![1, 2, 3, 4, 5]
        );
    }
}
