//! Delivery backends for finished questionnaires.
//!
//! Each backend exports a submitter and a unit-struct factory to register
//! with a [`quote_core::submit::SubmitterRegistry`].

mod form_post;
mod logger;

pub use form_post::{FormPostSubmitter, FormPostSubmitterFactory};
pub use logger::{LogSubmitter, LogSubmitterFactory};

use quote_core::submit::SubmitterRegistry;

/// Registry with every backend this crate provides.
pub fn default_registry() -> SubmitterRegistry {
    let mut registry = SubmitterRegistry::new();
    registry.register(Box::new(LogSubmitterFactory));
    registry.register(Box::new(FormPostSubmitterFactory));
    registry
}
