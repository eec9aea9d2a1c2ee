//! # News Service
//!
//! REST backend for news articles and their two taxonomies, topics and tags.
//!
//! ## Architecture Layers
//!
//! - **Domain**: entities, value objects (status, pagination, filters), domain errors
//! - **Application**: use cases, ports, the URL-safe pagination/filter token codec
//! - **Infrastructure**: PostgreSQL repositories built on a bulk statement
//!   assembler, and response cache adapters
//! - **API**: axum handlers, router and middleware
//!
//! ## Example Usage
//!
//! ```
//! use news_service::application::token;
//! use news_service::value_objects::Pagination;
//!
//! let token = token::encode(&Pagination::new(0, 1)).unwrap();
//! assert_eq!(token, "eyJvZmZzZXQiOjAsImNvdW50IjoxfQ--");
//! let back: Pagination = token::decode(&token).unwrap();
//! assert_eq!(back, Pagination::new(0, 1));
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
