pub mod calculations;
pub mod flow;
pub mod models;
pub mod submit;
pub mod validation;
pub mod wizard;

pub use calculations::PricingCalculator;
pub use flow::{FlowVariant, Step};
pub use models::*;
pub use submit::{Submission, SubmissionError, Submitter};
pub use validation::{FieldErrors, Validate};
pub use wizard::{StepInput, TerminalView, Wizard, WizardError};
