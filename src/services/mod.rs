pub mod catalog;
pub mod movie_service;
pub mod theater;

pub use catalog::{default_catalog, load_catalog, seed_catalog, CatalogError};
pub use movie_service::MovieService;
pub use theater::Theater;
