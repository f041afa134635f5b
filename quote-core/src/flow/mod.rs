//! Questionnaire steps and the transitions between them.

pub mod sequencer;
pub mod step;

pub use sequencer::{RouteFacts, Sequencer, Transition, TransitionEffect};
pub use step::{FlowVariant, STAGE_COUNT, Step};
