//! Step transitions for both questionnaire variants.
//!
//! The sequencer is a pure function of `(step, RouteFacts)`. It never sees
//! the full answer set, only the four answers that steer the branching flow.
//!
//! # Branching flow
//!
//! ```text
//! Intro → Contact → Property ─┬─ arch ∧ house ∧ construction ─→ Rooms ──────→ Schedule → Result
//!                             ├─ arch, otherwise ─────────────→ FloorArea ──→ Schedule
//!                             └─ engineering → HasProject ─┬─ yes → SubProjects → Rooms → FloorArea
//!                                                          └─ no  → Property (forced to arch)
//! ```
//!
//! Every backward rule re-tests the predicate of the forward rule it undoes,
//! so "back" always lands on the step the user actually came from.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::step::{FlowVariant, Step};
use crate::models::{AnswerSet, BudgetType, PropertyType, WorkType};

/// The answers the sequencer is allowed to look at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFacts {
    pub budget_type: Option<BudgetType>,
    pub property_type: Option<PropertyType>,
    pub work_type: Option<WorkType>,
    pub has_architectural_project: Option<bool>,
}

impl RouteFacts {
    pub fn is_architectural(&self) -> bool {
        self.budget_type == Some(BudgetType::ArchitecturalProject)
    }

    /// House construction on the architectural track.
    pub fn is_house_construction(&self) -> bool {
        self.is_architectural()
            && self.property_type == Some(PropertyType::House)
            && self.work_type == Some(WorkType::Construction)
    }
}

impl From<&AnswerSet> for RouteFacts {
    fn from(answers: &AnswerSet) -> Self {
        let classification = answers.classification;
        Self {
            budget_type: classification.map(|c| c.budget_type),
            property_type: classification.map(|c| c.property_type),
            work_type: classification.map(|c| c.work_type),
            has_architectural_project: answers.has_architectural_project,
        }
    }
}

/// Answer rewrite the controller must apply alongside a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Clear the has-project answer and switch the budget type to
    /// architectural project. Engineering is never quoted without an
    /// architectural project on file.
    RedirectToArchitectural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: Step,
    pub effect: Option<TransitionEffect>,
}

impl Transition {
    fn to(step: Step) -> Self {
        Self {
            to: step,
            effect: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    variant: FlowVariant,
}

impl Sequencer {
    pub fn new(variant: FlowVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> FlowVariant {
        self.variant
    }

    pub fn initial(&self) -> Step {
        Step::Intro
    }

    /// Step reached by successfully submitting `from`.
    ///
    /// Returns `None` for `Result`, which has no successor.
    pub fn next(
        &self,
        from: Step,
        facts: &RouteFacts,
    ) -> Option<Transition> {
        debug_assert!(
            self.variant.contains(from),
            "{from} is not part of the {} flow",
            self.variant.as_str()
        );

        let transition = match self.variant {
            FlowVariant::Branching => Self::branching_next(from, facts),
            FlowVariant::Linear => Self::linear_next(from),
        };
        trace!(%from, to = ?transition.map(|t| t.to), "forward");
        transition
    }

    /// Step shown when the user presses "back" on `from`.
    ///
    /// Returns `None` for `Intro` and `Result`.
    pub fn previous(
        &self,
        from: Step,
        facts: &RouteFacts,
    ) -> Option<Step> {
        debug_assert!(
            self.variant.contains(from),
            "{from} is not part of the {} flow",
            self.variant.as_str()
        );

        let previous = match self.variant {
            FlowVariant::Branching => Self::branching_previous(from, facts),
            FlowVariant::Linear => Self::linear_previous(from),
        };
        trace!(%from, to = ?previous, "back");
        previous
    }

    fn branching_next(
        from: Step,
        facts: &RouteFacts,
    ) -> Option<Transition> {
        let transition = match from {
            Step::Intro => Transition::to(Step::Contact),
            Step::Contact => Transition::to(Step::Property),
            Step::Property if facts.is_house_construction() => Transition::to(Step::Rooms),
            Step::Property if facts.is_architectural() => Transition::to(Step::FloorArea),
            Step::Property => Transition::to(Step::HasProject),
            Step::HasProject if facts.has_architectural_project == Some(true) => {
                Transition::to(Step::SubProjects)
            }
            Step::HasProject => Transition {
                to: Step::Property,
                effect: Some(TransitionEffect::RedirectToArchitectural),
            },
            Step::SubProjects => Transition::to(Step::Rooms),
            Step::Rooms if facts.is_architectural() => Transition::to(Step::Schedule),
            Step::Rooms => Transition::to(Step::FloorArea),
            Step::FloorArea => Transition::to(Step::Schedule),
            Step::Schedule => Transition::to(Step::Result),
            Step::Result => return None,
        };
        Some(transition)
    }

    fn branching_previous(
        from: Step,
        facts: &RouteFacts,
    ) -> Option<Step> {
        let previous = match from {
            Step::Intro | Step::Result => return None,
            Step::Contact => Step::Intro,
            Step::Property => Step::Contact,
            Step::HasProject => Step::Property,
            Step::SubProjects => Step::HasProject,
            Step::Rooms if facts.is_architectural() => Step::Property,
            Step::Rooms => Step::SubProjects,
            Step::FloorArea if facts.is_house_construction() => Step::Rooms,
            Step::FloorArea if facts.is_architectural() => Step::Property,
            Step::FloorArea => Step::Rooms,
            Step::Schedule if facts.is_house_construction() => Step::Rooms,
            Step::Schedule => Step::FloorArea,
        };
        Some(previous)
    }

    fn linear_next(from: Step) -> Option<Transition> {
        let to = match from {
            Step::Intro => Step::Contact,
            Step::Contact => Step::Property,
            Step::Property => Step::Rooms,
            Step::Rooms => Step::Schedule,
            Step::Schedule => Step::Result,
            Step::Result | Step::HasProject | Step::SubProjects | Step::FloorArea => return None,
        };
        Some(Transition::to(to))
    }

    fn linear_previous(from: Step) -> Option<Step> {
        let previous = match from {
            Step::Contact => Step::Intro,
            Step::Property => Step::Contact,
            Step::Rooms => Step::Property,
            Step::Schedule => Step::Rooms,
            Step::Intro
            | Step::Result
            | Step::HasProject
            | Step::SubProjects
            | Step::FloorArea => return None,
        };
        Some(previous)
    }
}
