//! Collection engine - domain model, policies, and pure services for
//! normalizing and aggregating dependency metadata.

pub mod domain;
pub mod policies;
pub mod services;
