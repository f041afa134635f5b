//! Interactive terminal front end for the questionnaire.
//!
//! Each step is rendered with `dialoguer`. Select prompts carry a
//! "« Voltar" entry; text prompts go back when the user types `:voltar`.

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

use quote_core::flow::{STAGE_COUNT, Step};
use quote_core::validation::{
    ClassificationForm, ContactForm, FieldErrors, FloorAreaForm, HasProjectForm, ScheduleForm,
    SubProjectsForm,
};
use quote_core::{
    AnswerSet, BudgetType, Contact, PropertyType, RoomCounters, RoomKind, StartWindow, StepInput,
    SubProject, Submitter, WorkType, Wizard, WizardError,
};

use crate::app::{SUBMITTING, render_terminal};
use crate::config::ResultConfig;

const BACK_ITEM: &str = "« Voltar";
const BACK_KEYWORD: &str = ":voltar";

pub const NO_PROJECT_NOTICE: &str =
    "Não executamos projeto de engenharia sem projeto de arquitetura.";

enum Prompted<T> {
    Answer(T),
    Back,
    Quit,
}

/// Title line for `step`, with the progress marker when the step has one.
pub fn header(step: Step) -> String {
    match step.stage() {
        Some(stage) => format!("[{stage}/{STAGE_COUNT}] {}", step.title()),
        None => step.title().to_string(),
    }
}

/// Whether free text is the "go back" keyword.
pub fn is_back(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(BACK_KEYWORD)
}

/// Explanation shown when answering "no" sent the user back to the
/// property step with an architectural quote.
pub fn redirect_notice(
    from: Step,
    to: Step,
) -> Option<&'static str> {
    (from == Step::HasProject && to == Step::Property).then_some(NO_PROJECT_NOTICE)
}

pub fn render_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  ✗ {field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the questionnaire until the user declines another quote.
pub async fn run(
    wizard: &mut Wizard,
    submitter: &dyn Submitter,
    result: &ResultConfig,
) -> Result<()> {
    let prompter = Prompter::default();

    loop {
        let step = wizard.step();
        println!("\n{}", header(step));

        match step {
            Step::Result => {
                if !prompter.confirm("Fazer outro orçamento?", false)? {
                    return Ok(());
                }
                wizard.restart()?;
            }
            Step::Schedule => match prompter.schedule()? {
                Prompted::Answer(form) => {
                    println!("{SUBMITTING}");
                    match wizard.complete(form, submitter).await {
                        Ok(view) => println!("\n{}", render_terminal(&view, result)),
                        Err(WizardError::Validation(errors)) => {
                            println!("{}", render_errors(&errors))
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Prompted::Back => {
                    wizard.back();
                }
                Prompted::Quit => return Ok(()),
            },
            _ => match prompter.ask(step, wizard.answers())? {
                Prompted::Answer(input) => match wizard.advance(input) {
                    Ok(next) => {
                        if let Some(notice) = redirect_notice(step, next) {
                            println!("{notice}");
                        }
                    }
                    Err(WizardError::Validation(errors)) => println!("{}", render_errors(&errors)),
                    Err(e) => return Err(e.into()),
                },
                Prompted::Back => {
                    wizard.back();
                }
                Prompted::Quit => return Ok(()),
            },
        }
    }
}

#[derive(Default)]
struct Prompter {
    theme: ColorfulTheme,
}

impl Prompter {
    fn ask(
        &self,
        step: Step,
        answers: &AnswerSet,
    ) -> Result<Prompted<StepInput>> {
        match step {
            Step::Intro => {
                println!("Responda algumas perguntas e receba uma estimativa na hora.");
                Ok(if self.confirm("Vamos começar?", true)? {
                    Prompted::Answer(StepInput::Start)
                } else {
                    Prompted::Quit
                })
            }
            Step::Contact => Ok(self.contact(answers)?.map(StepInput::Contact)),
            Step::Property => Ok(self.classification(answers)?.map(StepInput::Classification)),
            Step::HasProject => Ok(self.has_project()?.map(StepInput::HasProject)),
            Step::SubProjects => Ok(self.sub_projects(answers)?.map(StepInput::SubProjects)),
            Step::Rooms => Ok(self.rooms(answers)?.map(StepInput::Rooms)),
            Step::FloorArea => Ok(self.floor_area(answers)?.map(StepInput::FloorArea)),
            Step::Schedule | Step::Result => Ok(Prompted::Quit),
        }
    }

    fn confirm(
        &self,
        prompt: &str,
        default: bool,
    ) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    /// Free text; `None` when the user asked to go back.
    fn text(
        &self,
        prompt: &str,
        initial: &str,
    ) -> Result<Option<String>> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok((!is_back(&value)).then_some(value))
    }

    /// Single choice among `labels`, with a back entry appended.
    fn select(
        &self,
        prompt: &str,
        labels: &[&str],
        current: Option<usize>,
    ) -> Result<Option<usize>> {
        let mut items = labels.to_vec();
        items.push(BACK_ITEM);

        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(current.unwrap_or(0))
            .interact()?;
        Ok((index < labels.len()).then_some(index))
    }

    fn contact(
        &self,
        answers: &AnswerSet,
    ) -> Result<Prompted<ContactForm>> {
        let accepted_before = answers.contact.is_some();
        let stored = answers.contact.clone().unwrap_or_else(|| Contact {
            name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
        });
        println!("(digite {BACK_KEYWORD} para voltar)");

        let Some(name) = self.text("Nome", &stored.name)? else {
            return Ok(Prompted::Back);
        };
        let Some(email) = self.text("E-mail", &stored.email)? else {
            return Ok(Prompted::Back);
        };
        let Some(whatsapp) = self.text("WhatsApp", &stored.whatsapp)? else {
            return Ok(Prompted::Back);
        };
        let accept_terms = self.confirm("Aceito os termos de uso", accepted_before)?;

        Ok(Prompted::Answer(ContactForm {
            name,
            email,
            whatsapp,
            accept_terms,
        }))
    }

    fn classification(
        &self,
        answers: &AnswerSet,
    ) -> Result<Prompted<ClassificationForm>> {
        let stored = answers.classification;

        let property_labels: Vec<_> = PropertyType::ALL.iter().map(|p| p.label()).collect();
        let current = stored.and_then(|c| PropertyType::ALL.iter().position(|p| *p == c.property_type));
        let Some(property) = self.select("Tipo de imóvel", &property_labels, current)? else {
            return Ok(Prompted::Back);
        };

        let work_labels: Vec<_> = WorkType::ALL.iter().map(|w| w.label()).collect();
        let current = stored.and_then(|c| WorkType::ALL.iter().position(|w| *w == c.work_type));
        let Some(work) = self.select("Tipo de obra", &work_labels, current)? else {
            return Ok(Prompted::Back);
        };

        let budget_labels: Vec<_> = BudgetType::ALL.iter().map(|b| b.label()).collect();
        let current = stored.and_then(|c| BudgetType::ALL.iter().position(|b| *b == c.budget_type));
        let Some(budget) = self.select("Tipo de orçamento", &budget_labels, current)? else {
            return Ok(Prompted::Back);
        };

        Ok(Prompted::Answer(ClassificationForm {
            property_type: PropertyType::ALL[property].as_str().to_string(),
            work_type: WorkType::ALL[work].as_str().to_string(),
            budget_type: BudgetType::ALL[budget].as_str().to_string(),
        }))
    }

    fn has_project(&self) -> Result<Prompted<HasProjectForm>> {
        let labels = ["Sim", "Não"];
        Ok(
            match self.select("Você já possui projeto arquitetônico?", &labels, None)? {
                Some(index) => Prompted::Answer(HasProjectForm {
                    answer: labels[index].to_string(),
                }),
                None => Prompted::Back,
            },
        )
    }

    fn sub_projects(
        &self,
        answers: &AnswerSet,
    ) -> Result<Prompted<SubProjectsForm>> {
        let mut items: Vec<_> = SubProject::ALL.iter().map(|p| p.label()).collect();
        items.push(BACK_ITEM);
        let checked: Vec<_> = SubProject::ALL
            .iter()
            .map(|p| answers.sub_projects.contains(p))
            .chain([false])
            .collect();

        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt("Quais projetos de engenharia? (espaço marca, enter confirma)")
            .items(&items)
            .defaults(&checked)
            .interact()?;

        if chosen.contains(&SubProject::ALL.len()) {
            return Ok(Prompted::Back);
        }
        Ok(Prompted::Answer(SubProjectsForm {
            selected: chosen
                .into_iter()
                .map(|i| SubProject::ALL[i].label().to_string())
                .collect(),
        }))
    }

    fn rooms(
        &self,
        answers: &AnswerSet,
    ) -> Result<Prompted<RoomCounters>> {
        println!("Quantos ambientes de cada tipo? (0 a 5, {BACK_KEYWORD} para voltar)");
        let mut rooms = answers.rooms.clone();

        for kind in RoomKind::ALL {
            let prompt = format!("{} - {}m²", kind.label(), kind.area_per_unit());
            let value: String = Input::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(rooms.get(kind).to_string())
                .validate_with(|input: &String| -> Result<(), &str> {
                    if is_back(input) || input.trim().parse::<u8>().is_ok() {
                        Ok(())
                    } else {
                        Err("Valor inválido")
                    }
                })
                .interact_text()?;

            if is_back(&value) {
                return Ok(Prompted::Back);
            }
            let quantity = value.trim().parse::<u8>().unwrap_or_default();
            rooms = rooms.with(kind, quantity);
        }

        Ok(Prompted::Answer(rooms))
    }

    fn floor_area(
        &self,
        answers: &AnswerSet,
    ) -> Result<Prompted<FloorAreaForm>> {
        let stored = answers.floor_area.map(|a| a.to_string()).unwrap_or_default();
        Ok(
            match self.text("Qual a metragem do imóvel? (em m²)", &stored)? {
                Some(floor_area) => Prompted::Answer(FloorAreaForm { floor_area }),
                None => Prompted::Back,
            },
        )
    }

    fn schedule(&self) -> Result<Prompted<ScheduleForm>> {
        let labels: Vec<_> = StartWindow::ALL.iter().map(|w| w.label()).collect();
        Ok(
            match self.select("Quando pretende iniciar a obra?", &labels, None)? {
                Some(index) => Prompted::Answer(ScheduleForm {
                    start_window: StartWindow::ALL[index].as_str().to_string(),
                }),
                None => Prompted::Back,
            },
        )
    }
}

impl<T> Prompted<T> {
    fn map<U>(
        self,
        f: impl FnOnce(T) -> U,
    ) -> Prompted<U> {
        match self {
            Self::Answer(value) => Prompted::Answer(f(value)),
            Self::Back => Prompted::Back,
            Self::Quit => Prompted::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use quote_core::validation::REQUIRED;

    #[test]
    fn header_shows_progress_for_staged_steps() {
        assert_eq!(header(Step::Contact), "[1/4] Seus dados");
        assert_eq!(header(Step::SubProjects), "[2/4] Projetos de engenharia");
        assert_eq!(header(Step::Intro), "Orçamento online");
    }

    #[test]
    fn back_keyword_is_case_and_space_insensitive() {
        assert!(is_back(":voltar"));
        assert!(is_back("  :VOLTAR "));
        assert!(!is_back("voltar"));
        assert!(!is_back(""));
    }

    #[test]
    fn notice_only_for_the_no_project_redirect() {
        assert_eq!(
            redirect_notice(Step::HasProject, Step::Property),
            Some(NO_PROJECT_NOTICE)
        );
        assert_eq!(redirect_notice(Step::HasProject, Step::SubProjects), None);
        assert_eq!(redirect_notice(Step::Rooms, Step::Property), None);
    }

    #[test]
    fn errors_render_one_per_line() {
        let mut errors = FieldErrors::new();
        errors.push("name", REQUIRED);
        errors.push("email", REQUIRED);

        assert_eq!(
            render_errors(&errors),
            "  ✗ email: Campo obrigatório.\n  ✗ name: Campo obrigatório."
        );
    }
}
