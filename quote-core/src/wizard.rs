//! Session state for one run through the questionnaire.
//!
//! The [`Wizard`] owns the current step and every answer given so far. Forward
//! moves are gated by validation of the current step's field group; the
//! sequencer only ever sees the [`RouteFacts`] derived from the answers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::PricingCalculator;
use crate::flow::{FlowVariant, RouteFacts, Sequencer, Step, TransitionEffect};
use crate::models::{AnswerSet, BudgetResult, BudgetType, PricingConfig, RoomCounters};
use crate::submit::{Submission, SubmissionError, Submitter};
use crate::validation::{
    ClassificationForm, ContactForm, FieldErrors, FloorAreaForm, HasProjectForm, ScheduleForm,
    SubProjectsForm, Validate,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("invalid answer: {0}")]
    Validation(#[from] FieldErrors),

    #[error("answer for {got} submitted while on {expected}")]
    UnexpectedInput { expected: Step, got: Step },

    #[error("missing answer: {0}")]
    MissingAnswer(&'static str),

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("the questionnaire is already finished")]
    Finished,
}

/// Raw answer for one data-entry step. The schedule step is answered through
/// [`Wizard::complete`] because it also triggers pricing and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput {
    /// Leave the intro screen.
    Start,
    Contact(ContactForm),
    Classification(ClassificationForm),
    HasProject(HasProjectForm),
    SubProjects(SubProjectsForm),
    Rooms(RoomCounters),
    FloorArea(FloorAreaForm),
}

impl StepInput {
    /// The step this input answers.
    pub fn step(&self) -> Step {
        match self {
            Self::Start => Step::Intro,
            Self::Contact(_) => Step::Contact,
            Self::Classification(_) => Step::Property,
            Self::HasProject(_) => Step::HasProject,
            Self::SubProjects(_) => Step::SubProjects,
            Self::Rooms(_) => Step::Rooms,
            Self::FloorArea(_) => Step::FloorArea,
        }
    }
}

/// What the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalView {
    /// Submission still running, or abandoned before it finished.
    InProgress,
    Failed(SubmissionError),
    Succeeded(BudgetResult),
}

/// Shared "submitting" marker. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlag(Arc<AtomicBool>);

impl SubmissionFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag unless it is already raised. The flag drops again when
    /// the returned guard goes out of scope, including when the future
    /// holding it is cancelled.
    pub fn try_acquire(&self) -> Option<SubmissionGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SubmissionGuard(self.0.clone()))
    }
}

#[derive(Debug)]
pub struct SubmissionGuard(Arc<AtomicBool>);

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub struct Wizard {
    sequencer: Sequencer,
    pricing: PricingConfig,
    step: Step,
    answers: AnswerSet,
    budget: Option<BudgetResult>,
    outcome: Option<Result<(), SubmissionError>>,
    submitting: SubmissionFlag,
}

impl Wizard {
    pub fn new(
        variant: FlowVariant,
        pricing: PricingConfig,
    ) -> Self {
        let sequencer = Sequencer::new(variant);
        Self {
            step: sequencer.initial(),
            sequencer,
            pricing,
            answers: AnswerSet::new(),
            budget: None,
            outcome: None,
            submitting: SubmissionFlag::default(),
        }
    }

    pub fn variant(&self) -> FlowVariant {
        self.sequencer.variant()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Budget computed on the last entry into `Result`.
    pub fn budget(&self) -> Option<&BudgetResult> {
        self.budget.as_ref()
    }

    /// Progress-bar segment for the current step.
    pub fn progress(&self) -> Option<u8> {
        self.step.stage()
    }

    pub fn submission_flag(&self) -> SubmissionFlag {
        self.submitting.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    /// Validate `input`, store it and move to the next step.
    ///
    /// On a validation error nothing changes and the caller re-renders the
    /// same step with the returned messages.
    pub fn advance(
        &mut self,
        input: StepInput,
    ) -> Result<Step, WizardError> {
        if self.step == Step::Result {
            return Err(WizardError::Finished);
        }
        if input.step() != self.step {
            return Err(WizardError::UnexpectedInput {
                expected: self.step,
                got: input.step(),
            });
        }

        self.record(input)?;

        let facts = RouteFacts::from(&self.answers);
        let Some(transition) = self.sequencer.next(self.step, &facts) else {
            return Err(WizardError::Finished);
        };

        if let Some(effect) = transition.effect {
            self.apply(effect);
        }

        debug!(from = %self.step, to = %transition.to, "advance");
        self.step = transition.to;
        Ok(self.step)
    }

    /// Step back, returning the step now shown, or `None` when there is
    /// nowhere to go (`Intro`, `Result`).
    pub fn back(&mut self) -> Option<Step> {
        let facts = RouteFacts::from(&self.answers);
        let previous = self.sequencer.previous(self.step, &facts)?;

        debug!(from = %self.step, to = %previous, "back");
        self.step = previous;
        Some(previous)
    }

    /// Price the current answers with the model their classification calls
    /// for.
    pub fn quote(&self) -> Result<BudgetResult, WizardError> {
        let calc = PricingCalculator::new(&self.pricing);
        let rooms = &self.answers.rooms;

        if self.variant() == FlowVariant::Linear {
            return Ok(BudgetResult::Tiered {
                tiers: calc.tiered_budget(rooms),
                weighted_area: calc.weighted_area(rooms),
            });
        }

        let classification = self
            .answers
            .classification
            .ok_or(WizardError::MissingAnswer("classification"))?;

        if classification.is_house_construction() {
            let rate = calc.area_rate(rooms.unit_count());
            return Ok(BudgetResult::House(
                calc.architectural_house_budget(rooms, rate),
            ));
        }

        let floor_area = self
            .answers
            .floor_area
            .ok_or(WizardError::MissingAnswer("floor_area"))?;

        let budget = match classification.budget_type {
            BudgetType::ArchitecturalProject => {
                let rate = calc.area_rate(floor_area);
                BudgetResult::AreaBased {
                    total: calc.area_based_budget(floor_area, rate),
                    floor_area,
                    rate,
                }
            }
            BudgetType::EssentialEngineering => {
                let rate = calc.engineering_rate(floor_area);
                let sub_project_count = self.answers.sub_projects.len();
                BudgetResult::Engineering {
                    total: calc.engineering_project_budget(sub_project_count, rate, floor_area),
                    sub_project_count,
                    floor_area,
                    rate,
                }
            }
        };
        Ok(budget)
    }

    /// Answer the schedule step: price the answers, move to `Result` and
    /// hand the lead to `submitter`.
    ///
    /// A failed delivery is not an `Err`; it is reported through the
    /// returned [`TerminalView::Failed`] and is not retried.
    pub async fn complete(
        &mut self,
        schedule: ScheduleForm,
        submitter: &dyn Submitter,
    ) -> Result<TerminalView, WizardError> {
        if self.step == Step::Result {
            return Err(WizardError::Finished);
        }
        if self.step != Step::Schedule {
            return Err(WizardError::UnexpectedInput {
                expected: self.step,
                got: Step::Schedule,
            });
        }

        let start_window = schedule.validate()?;
        let _guard = self
            .submitting
            .try_acquire()
            .ok_or(WizardError::SubmissionInProgress)?;

        self.answers.start_window = Some(start_window);
        let budget = self.quote()?;
        let submission = self.submission(budget)?;

        self.budget = Some(budget);
        self.outcome = None;
        self.step = Step::Result;
        info!(
            variant = self.variant().as_str(),
            total = ?budget.total(),
            area = ?budget.approximate_area(),
            "quote computed"
        );

        let outcome = submitter.submit(&submission).await;
        match &outcome {
            Ok(()) => info!("lead submitted"),
            Err(e) => warn!(error = %e, "lead submission failed"),
        }
        self.outcome = Some(outcome);

        Ok(self.terminal_view().unwrap_or(TerminalView::InProgress))
    }

    /// Result-screen state, or `None` before `Result` is reached.
    pub fn terminal_view(&self) -> Option<TerminalView> {
        if self.step != Step::Result {
            return None;
        }

        let view = match (&self.outcome, self.budget) {
            (Some(Ok(())), Some(budget)) => TerminalView::Succeeded(budget),
            (Some(Err(e)), _) => TerminalView::Failed(e.clone()),
            _ => TerminalView::InProgress,
        };
        Some(view)
    }

    /// Start over from `Intro` with no answers.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        if self.is_submitting() {
            return Err(WizardError::SubmissionInProgress);
        }

        debug!(from = %self.step, "restart");
        self.step = self.sequencer.initial();
        self.answers = AnswerSet::new();
        self.budget = None;
        self.outcome = None;
        Ok(())
    }

    fn record(
        &mut self,
        input: StepInput,
    ) -> Result<(), FieldErrors> {
        match input {
            StepInput::Start => {}
            StepInput::Contact(form) => self.answers.contact = Some(form.validate()?),
            StepInput::Classification(form) => {
                self.answers.classification = Some(form.validate()?);
            }
            StepInput::HasProject(form) => {
                self.answers.has_architectural_project = Some(form.validate()?);
            }
            StepInput::SubProjects(form) => self.answers.sub_projects = form.validate()?,
            StepInput::Rooms(rooms) => self.answers.rooms = rooms.validate()?,
            StepInput::FloorArea(form) => self.answers.floor_area = Some(form.validate()?),
        }
        Ok(())
    }

    fn apply(
        &mut self,
        effect: TransitionEffect,
    ) {
        match effect {
            TransitionEffect::RedirectToArchitectural => {
                self.answers.has_architectural_project = None;
                if let Some(classification) = self.answers.classification.as_mut() {
                    classification.budget_type = BudgetType::ArchitecturalProject;
                }
                info!("no architectural project on file; switched to architectural quote");
            }
        }
    }

    /// Snapshot of the answers that fed `budget`. Answers left over from
    /// branches the user backed out of are not sent.
    fn submission(
        &self,
        budget: BudgetResult,
    ) -> Result<Submission, WizardError> {
        let contact = self
            .answers
            .contact
            .clone()
            .ok_or(WizardError::MissingAnswer("contact"))?;
        let start_window = self
            .answers
            .start_window
            .ok_or(WizardError::MissingAnswer("start_window"))?;

        let (floor_area, sub_projects) = match budget {
            BudgetResult::AreaBased { floor_area, .. } => (Some(floor_area), Vec::new()),
            BudgetResult::Engineering { floor_area, .. } => {
                (Some(floor_area), self.answers.sub_projects.clone())
            }
            BudgetResult::Tiered { .. } | BudgetResult::House(_) => (None, Vec::new()),
        };

        Ok(Submission {
            variant: self.variant(),
            contact,
            classification: self.answers.classification,
            floor_area,
            sub_projects,
            rooms: self.answers.rooms.clone(),
            start_window,
            budget,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{HouseBudget, RoomKind, SubProject, TieredBudget};
    use crate::validation::REQUIRED;

    // ── submitters ───────────────────────────────────────────────────────

    /// Records every submission and whether the flag was up while it ran.
    #[derive(Default)]
    struct RecordingSubmitter {
        flag: Mutex<Option<SubmissionFlag>>,
        seen: Mutex<Vec<(Submission, bool)>>,
    }

    impl RecordingSubmitter {
        fn watching(wizard: &Wizard) -> Self {
            Self {
                flag: Mutex::new(Some(wizard.submission_flag())),
                seen: Mutex::default(),
            }
        }

        fn submissions(&self) -> Vec<(Submission, bool)> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Submitter for RecordingSubmitter {
        async fn submit(
            &self,
            submission: &Submission,
        ) -> Result<(), SubmissionError> {
            let raised = self
                .flag
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(SubmissionFlag::is_set);
            self.seen.lock().unwrap().push((submission.clone(), raised));
            Ok(())
        }
    }

    struct FailingSubmitter(SubmissionError);

    #[async_trait]
    impl Submitter for FailingSubmitter {
        async fn submit(
            &self,
            _submission: &Submission,
        ) -> Result<(), SubmissionError> {
            Err(self.0.clone())
        }
    }

    /// Never finishes.
    struct StalledSubmitter;

    #[async_trait]
    impl Submitter for StalledSubmitter {
        async fn submit(
            &self,
            _submission: &Submission,
        ) -> Result<(), SubmissionError> {
            std::future::pending().await
        }
    }

    // ── input helpers ────────────────────────────────────────────────────

    fn contact() -> StepInput {
        StepInput::Contact(ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            whatsapp: "61982104088".to_string(),
            accept_terms: true,
        })
    }

    fn classification(
        property_type: &str,
        work_type: &str,
        budget_type: &str,
    ) -> StepInput {
        StepInput::Classification(ClassificationForm {
            property_type: property_type.to_string(),
            work_type: work_type.to_string(),
            budget_type: budget_type.to_string(),
        })
    }

    fn has_project(answer: &str) -> StepInput {
        StepInput::HasProject(HasProjectForm {
            answer: answer.to_string(),
        })
    }

    fn floor_area(area: &str) -> StepInput {
        StepInput::FloorArea(FloorAreaForm {
            floor_area: area.to_string(),
        })
    }

    fn schedule() -> ScheduleForm {
        ScheduleForm {
            start_window: "within_15_days".to_string(),
        }
    }

    fn branching() -> Wizard {
        Wizard::new(FlowVariant::Branching, PricingConfig::default())
    }

    /// Drive a fresh branching wizard up to the classification step.
    fn at_property() -> Wizard {
        let mut wizard = branching();
        wizard.advance(StepInput::Start).unwrap();
        wizard.advance(contact()).unwrap();
        wizard
    }

    /// Architectural house construction with three rooms, parked on
    /// `Schedule`.
    fn house_at_schedule() -> Wizard {
        let mut wizard = at_property();
        wizard
            .advance(classification("house", "construction", "architectural_project"))
            .unwrap();
        wizard
            .advance(StepInput::Rooms(
                RoomCounters::new()
                    .with(RoomKind::MasterSuite, 1)
                    .with(RoomKind::Bedroom, 2),
            ))
            .unwrap();
        wizard
    }

    // ── scenarios ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn house_construction_is_priced_by_room_count() {
        let mut wizard = house_at_schedule();
        assert_eq!(wizard.step(), Step::Schedule);

        let submitter = RecordingSubmitter::default();
        let view = wizard.complete(schedule(), &submitter).await.unwrap();

        let expected = BudgetResult::House(HouseBudget {
            total: dec!(300),
            total_area: 3,
        });
        assert_eq!(view, TerminalView::Succeeded(expected));
        assert_eq!(wizard.step(), Step::Result);
        assert_eq!(wizard.budget(), Some(&expected));
        assert_eq!(submitter.submissions().len(), 1);
    }

    #[tokio::test]
    async fn engineering_is_priced_per_sub_project() {
        let mut wizard = at_property();
        assert_eq!(
            wizard.advance(classification("commercial", "renovation", "essential_engineering")),
            Ok(Step::HasProject)
        );
        assert_eq!(wizard.advance(has_project("sim")), Ok(Step::SubProjects));
        assert_eq!(
            wizard.advance(StepInput::SubProjects(SubProjectsForm::from_csv(
                "Elétrico,Hidraulico"
            ))),
            Ok(Step::Rooms)
        );
        assert_eq!(
            wizard.advance(StepInput::Rooms(RoomCounters::new())),
            Ok(Step::FloorArea)
        );
        assert_eq!(wizard.advance(floor_area("250")), Ok(Step::Schedule));

        let submitter = RecordingSubmitter::default();
        let view = wizard.complete(schedule(), &submitter).await.unwrap();

        assert_eq!(
            view,
            TerminalView::Succeeded(BudgetResult::Engineering {
                total: dec!(7500),
                sub_project_count: 2,
                floor_area: 250,
                rate: dec!(15),
            })
        );
        let (sent, _) = &submitter.submissions()[0];
        assert_eq!(
            sent.sub_projects,
            vec![SubProject::Electrical, SubProject::Hydraulic]
        );
        assert_eq!(sent.floor_area, Some(250));
    }

    #[tokio::test]
    async fn architectural_renovation_is_priced_by_floor_area() {
        let mut wizard = at_property();
        assert_eq!(
            wizard.advance(classification("apartment", "renovation", "architectural_project")),
            Ok(Step::FloorArea)
        );
        wizard.advance(floor_area("120")).unwrap();

        let view = wizard
            .complete(schedule(), &RecordingSubmitter::default())
            .await
            .unwrap();

        assert_eq!(
            view,
            TerminalView::Succeeded(BudgetResult::AreaBased {
                total: dec!(7200),
                floor_area: 120,
                rate: dec!(60),
            })
        );
    }

    #[test]
    fn no_project_redirects_to_architectural_classification() {
        let mut wizard = at_property();
        wizard
            .advance(classification("apartment", "renovation", "essential_engineering"))
            .unwrap();

        assert_eq!(wizard.advance(has_project("não")), Ok(Step::Property));
        assert_eq!(wizard.answers().has_architectural_project, None);
        assert_eq!(
            wizard.answers().budget_type(),
            Some(BudgetType::ArchitecturalProject)
        );
    }

    #[tokio::test]
    async fn linear_flow_quotes_three_tiers() {
        let mut wizard = Wizard::new(FlowVariant::Linear, PricingConfig::default());
        wizard.advance(StepInput::Start).unwrap();
        wizard.advance(contact()).unwrap();
        assert_eq!(
            wizard.advance(classification("house", "renovation", "essential_engineering")),
            Ok(Step::Rooms)
        );
        assert_eq!(
            wizard.advance(StepInput::Rooms(RoomCounters::new().with(RoomKind::Bedroom, 2))),
            Ok(Step::Schedule)
        );

        let view = wizard
            .complete(schedule(), &RecordingSubmitter::default())
            .await
            .unwrap();

        assert_eq!(
            view,
            TerminalView::Succeeded(BudgetResult::Tiered {
                tiers: TieredBudget {
                    silver: dec!(96000),
                    gold: dec!(128000),
                    diamond: dec!(160000),
                },
                weighted_area: 32,
            })
        );
    }

    // ── gating ───────────────────────────────────────────────────────────

    #[test]
    fn invalid_answer_keeps_the_current_step() {
        let mut wizard = branching();
        wizard.advance(StepInput::Start).unwrap();

        let err = wizard
            .advance(StepInput::Contact(ContactForm::default()))
            .unwrap_err();

        match err {
            WizardError::Validation(errors) => assert_eq!(errors.get("name"), Some(REQUIRED)),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.answers().contact, None);
    }

    #[test]
    fn answer_for_another_step_is_rejected() {
        let mut wizard = branching();

        assert_eq!(
            wizard.advance(contact()),
            Err(WizardError::UnexpectedInput {
                expected: Step::Intro,
                got: Step::Contact,
            })
        );
        assert_eq!(wizard.step(), Step::Intro);
    }

    #[tokio::test]
    async fn schedule_cannot_be_completed_early() {
        let mut wizard = at_property();

        let result = wizard
            .complete(schedule(), &RecordingSubmitter::default())
            .await;

        assert_eq!(
            result,
            Err(WizardError::UnexpectedInput {
                expected: Step::Property,
                got: Step::Schedule,
            })
        );
    }

    #[tokio::test]
    async fn finished_session_refuses_more_answers() {
        let mut wizard = house_at_schedule();
        wizard
            .complete(schedule(), &RecordingSubmitter::default())
            .await
            .unwrap();

        assert_eq!(wizard.advance(StepInput::Start), Err(WizardError::Finished));
        assert_eq!(wizard.back(), None);
        assert_eq!(wizard.step(), Step::Result);
    }

    // ── back ─────────────────────────────────────────────────────────────

    #[test]
    fn back_from_intro_does_not_move() {
        let mut wizard = branching();

        assert_eq!(wizard.back(), None);
        assert_eq!(wizard.step(), Step::Intro);
    }

    #[test]
    fn back_from_schedule_returns_to_rooms_on_house_path() {
        let mut wizard = house_at_schedule();

        assert_eq!(wizard.back(), Some(Step::Rooms));
        assert_eq!(wizard.back(), Some(Step::Property));
    }

    #[test]
    fn progress_follows_the_step() {
        let mut wizard = branching();
        assert_eq!(wizard.progress(), None);

        wizard.advance(StepInput::Start).unwrap();
        assert_eq!(wizard.progress(), Some(1));
    }

    // ── submitting flag ──────────────────────────────────────────────────

    #[tokio::test]
    async fn flag_is_raised_during_submission_and_cleared_after() {
        let mut wizard = house_at_schedule();
        let submitter = RecordingSubmitter::watching(&wizard);

        wizard.complete(schedule(), &submitter).await.unwrap();

        let (_, raised) = &submitter.submissions()[0];
        assert!(raised, "flag should be up while the submitter runs");
        assert!(!wizard.is_submitting());
    }

    #[tokio::test]
    async fn http_status_failure_clears_flag_and_shows_failure() {
        let mut wizard = house_at_schedule();

        let view = wizard
            .complete(schedule(), &FailingSubmitter(SubmissionError::Status(500)))
            .await
            .unwrap();

        assert_eq!(view, TerminalView::Failed(SubmissionError::Status(500)));
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.terminal_view(), Some(view));
    }

    #[tokio::test]
    async fn transport_failure_clears_flag() {
        let mut wizard = house_at_schedule();
        let error = SubmissionError::Transport("connection refused".to_string());

        let view = wizard
            .complete(schedule(), &FailingSubmitter(error.clone()))
            .await
            .unwrap();

        assert_eq!(view, TerminalView::Failed(error));
        assert!(!wizard.is_submitting());
    }

    #[tokio::test]
    async fn dropped_submission_clears_flag() {
        let mut wizard = house_at_schedule();
        let flag = wizard.submission_flag();

        let timed_out = tokio::time::timeout(
            Duration::from_millis(20),
            wizard.complete(schedule(), &StalledSubmitter),
        )
        .await;

        assert!(timed_out.is_err());
        assert!(!flag.is_set());
        assert_eq!(wizard.terminal_view(), Some(TerminalView::InProgress));
        assert_eq!(wizard.restart(), Ok(()));
    }

    #[tokio::test]
    async fn second_submission_is_refused_while_one_is_outstanding() {
        let mut wizard = house_at_schedule();
        let _held = wizard.submission_flag().try_acquire().unwrap();

        let result = wizard
            .complete(schedule(), &RecordingSubmitter::default())
            .await;

        assert_eq!(result, Err(WizardError::SubmissionInProgress));
        assert_eq!(wizard.step(), Step::Schedule);
        assert_eq!(wizard.restart(), Err(WizardError::SubmissionInProgress));
    }

    // ── restart ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn restart_clears_answers_after_failure() {
        let mut wizard = house_at_schedule();
        wizard
            .complete(schedule(), &FailingSubmitter(SubmissionError::Status(502)))
            .await
            .unwrap();

        wizard.restart().unwrap();

        assert_eq!(wizard.step(), Step::Intro);
        assert_eq!(wizard.answers(), &AnswerSet::new());
        assert_eq!(wizard.budget(), None);
        assert_eq!(wizard.terminal_view(), None);
    }
}
