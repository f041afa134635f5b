//! Delivery of a finished questionnaire to the studio.

pub mod factory;
pub mod submission;

pub use factory::{SubmitConfig, SubmitterFactory, SubmitterRegistry};
pub use submission::{Submission, SubmissionError, Submitter};
