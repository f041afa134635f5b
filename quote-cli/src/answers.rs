//! Answers file for non-interactive runs.
//!
//! ```toml
//! start_window = "within_30_days"
//! has_project = "Sim"
//! sub_projects = ["Elétrico", "Hidraulico"]
//! floor_area = 250
//!
//! [contact]
//! name = "Ana"
//! email = "ana@example.com"
//! whatsapp = "61982104088"
//! accept_terms = true
//!
//! [property]
//! property_type = "commercial"
//! work_type = "renovation"
//! budget_type = "essential_engineering"
//!
//! [rooms]
//! bedroom = 2
//! ```
//!
//! Only the answers the chosen path asks for need to be present.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use quote_core::flow::Step;
use quote_core::validation::{
    ClassificationForm, ContactForm, FieldErrors, FloorAreaForm, HasProjectForm, ScheduleForm,
    SubProjectsForm,
};
use quote_core::{AnswerSet, RoomCounters, StepInput, Submitter, TerminalView, Wizard, WizardError};

/// More forward moves than any path needs, counting one redirect.
const MAX_ADVANCES: usize = 16;

#[derive(Debug, Error)]
pub enum AnswersError {
    #[error("failed to read answers file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("step {step} needs '{field}', which the answers file does not provide")]
    Missing { step: Step, field: &'static str },

    #[error("step {step} rejected the answers: {errors}")]
    Rejected { step: Step, errors: FieldErrors },

    #[error(transparent)]
    Wizard(WizardError),

    #[error("the questionnaire did not reach the schedule step")]
    NoProgress,
}

impl AnswersError {
    fn from_wizard(
        step: Step,
        error: WizardError,
    ) -> Self {
        match error {
            WizardError::Validation(errors) => Self::Rejected { step, errors },
            other => Self::Wizard(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnswersFile {
    pub contact: ContactForm,
    pub property: ClassificationForm,
    pub has_project: Option<String>,
    pub sub_projects: Vec<String>,
    pub rooms: RoomCounters,
    pub floor_area: Option<u32>,
    pub start_window: String,
}

impl AnswersFile {
    pub fn load(path: &Path) -> Result<Self, AnswersError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnswersError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| AnswersError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Answer for `step`, or `None` once the schedule step is reached.
    fn input_for(
        &self,
        step: Step,
        given: &AnswerSet,
    ) -> Result<Option<StepInput>, AnswersError> {
        let input = match step {
            Step::Intro => StepInput::Start,
            Step::Contact => StepInput::Contact(self.contact.clone()),
            // A stored classification here means the no-project redirect
            // already rewrote it; keep the rewritten one.
            Step::Property => StepInput::Classification(match &given.classification {
                Some(stored) => ClassificationForm::from_answers(stored),
                None => self.property.clone(),
            }),
            Step::HasProject => {
                let answer = self.has_project.clone().ok_or(AnswersError::Missing {
                    step,
                    field: "has_project",
                })?;
                StepInput::HasProject(HasProjectForm { answer })
            }
            Step::SubProjects => StepInput::SubProjects(SubProjectsForm {
                selected: self.sub_projects.clone(),
            }),
            Step::Rooms => StepInput::Rooms(self.rooms.clone()),
            Step::FloorArea => {
                let area = self.floor_area.ok_or(AnswersError::Missing {
                    step,
                    field: "floor_area",
                })?;
                StepInput::FloorArea(FloorAreaForm {
                    floor_area: area.to_string(),
                })
            }
            Step::Schedule | Step::Result => return Ok(None),
        };
        Ok(Some(input))
    }

    /// Feed answers to `wizard` until it waits on the schedule step.
    pub fn fill(
        &self,
        wizard: &mut Wizard,
    ) -> Result<(), AnswersError> {
        for _ in 0..MAX_ADVANCES {
            let step = wizard.step();
            let Some(input) = self.input_for(step, wizard.answers())? else {
                return Ok(());
            };
            let next = wizard
                .advance(input)
                .map_err(|e| AnswersError::from_wizard(step, e))?;
            debug!(from = %step, to = %next, "answered");
        }
        Err(AnswersError::NoProgress)
    }

    /// Fill every step, then price and submit.
    pub async fn run(
        &self,
        wizard: &mut Wizard,
        submitter: &dyn Submitter,
    ) -> Result<TerminalView, AnswersError> {
        self.fill(wizard)?;

        let schedule = ScheduleForm {
            start_window: self.start_window.clone(),
        };
        wizard
            .complete(schedule, submitter)
            .await
            .map_err(|e| AnswersError::from_wizard(Step::Schedule, e))
    }
}
