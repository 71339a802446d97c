/// Recommendation Service Library
///
/// Serves personalized course recommendations for the learning dashboard.
/// Learner identity, enrollments and progress come from the Graphy LMS;
/// the course catalog is in-process for this deployment.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers (actix-web)
/// - `models`: Catalog and recommendation data structures
/// - `services`: Profile building, rule pipeline, contextual re-ranking
/// - `catalog`: In-process course catalog
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
