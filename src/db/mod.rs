//! Database layer: pool, schema setup, and the interaction repository

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, Interaction, InteractionRepo};
