//! Repository implementations for database access
//!
//! One table, one repository. Updates are partial: a `None` field in a
//! patch leaves the column unchanged.

pub mod interactions;

pub use interactions::{
    CallbackPatch, DbError, Interaction, InteractionPatch, InteractionRepo, NewCallbackRequest,
};
