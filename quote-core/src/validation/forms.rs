//! Raw field groups as typed by the user, and their validators.
//!
//! Each form is what a front-end collects for one step. `validate` either
//! returns the typed answer or a [`FieldErrors`] keyed by form field name.

use serde::{Deserialize, Serialize};

use super::phone::{format_phone, is_valid_phone};
use super::{FieldErrors, Validate};
use crate::models::{
    BudgetType, Classification, Contact, MAX_ROOM_QUANTITY, PropertyType, RoomCounters,
    StartWindow, SubProject, WorkType,
};

pub const REQUIRED: &str = "Campo obrigatório.";
pub const INVALID_OPTION: &str = "Opção inválida.";
pub const INVALID_PHONE: &str = "Número de telefone inválido. Use o formato (99) 9 1111-1111";
pub const TERMS_NOT_ACCEPTED: &str = "Você deve aceitar os termos";
pub const INVALID_VALUE: &str = "Valor inválido";
pub const ROOM_LIMIT: &str = "Quantidade máxima é 5.";

/// Parses a select-box value, recording an error under `field` on failure.
fn select<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    if raw.trim().is_empty() {
        errors.push(field, REQUIRED);
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        errors.push(field, INVALID_OPTION);
    }
    parsed
}

fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(field, REQUIRED);
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub accept_terms: bool,
}

impl Validate for ContactForm {
    type Output = Contact;

    fn validate(&self) -> Result<Contact, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = required(&mut errors, "name", &self.name);
        let email = required(&mut errors, "email", &self.email);

        let whatsapp = format_phone(&self.whatsapp);
        if !is_valid_phone(&whatsapp) {
            errors.push("whatsapp", INVALID_PHONE);
        }

        if !self.accept_terms {
            errors.push("accept_terms", TERMS_NOT_ACCEPTED);
        }

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(Contact {
                name,
                email,
                whatsapp,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationForm {
    pub property_type: String,
    pub work_type: String,
    pub budget_type: String,
}

impl ClassificationForm {
    pub fn from_answers(classification: &Classification) -> Self {
        Self {
            property_type: classification.property_type.as_str().to_string(),
            work_type: classification.work_type.as_str().to_string(),
            budget_type: classification.budget_type.as_str().to_string(),
        }
    }
}

impl Validate for ClassificationForm {
    type Output = Classification;

    fn validate(&self) -> Result<Classification, FieldErrors> {
        let mut errors = FieldErrors::new();

        let property_type = select(
            &mut errors,
            "property_type",
            &self.property_type,
            PropertyType::parse,
        );
        let work_type = select(&mut errors, "work_type", &self.work_type, WorkType::parse);
        let budget_type = select(
            &mut errors,
            "budget_type",
            &self.budget_type,
            BudgetType::parse,
        );

        match (property_type, work_type, budget_type) {
            (Some(property_type), Some(work_type), Some(budget_type)) => Ok(Classification {
                property_type,
                work_type,
                budget_type,
            }),
            _ => Err(errors),
        }
    }
}

/// "Do you already have an architectural project?"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasProjectForm {
    pub answer: String,
}

impl Validate for HasProjectForm {
    type Output = bool;

    fn validate(&self) -> Result<bool, FieldErrors> {
        let mut errors = FieldErrors::new();
        let parsed = select(&mut errors, "answer", &self.answer, |s| {
            match s.trim().to_lowercase().as_str() {
                "sim" | "yes" | "true" => Some(true),
                "não" | "nao" | "no" | "false" => Some(false),
                _ => None,
            }
        });
        parsed.ok_or(errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubProjectsForm {
    pub selected: Vec<String>,
}

impl SubProjectsForm {
    /// Builds the form from the multi-select's comma-joined value,
    /// e.g. `"Elétrico,Hidraulico"`.
    pub fn from_csv(joined: &str) -> Self {
        Self {
            selected: joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Validate for SubProjectsForm {
    type Output = Vec<SubProject>;

    fn validate(&self) -> Result<Vec<SubProject>, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.selected.is_empty() {
            errors.push("selected", REQUIRED);
            return Err(errors);
        }

        let mut projects = Vec::with_capacity(self.selected.len());
        for raw in &self.selected {
            match SubProject::parse(raw) {
                Some(project) if !projects.contains(&project) => projects.push(project),
                Some(_) => {}
                None => errors.push("selected", INVALID_OPTION),
            }
        }

        if errors.is_empty() {
            Ok(projects)
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorAreaForm {
    pub floor_area: String,
}

impl Validate for FloorAreaForm {
    type Output = u32;

    /// Whole square meters, at least one.
    fn validate(&self) -> Result<u32, FieldErrors> {
        let mut errors = FieldErrors::new();
        let Some(raw) = required(&mut errors, "floor_area", &self.floor_area) else {
            return Err(errors);
        };

        match raw.parse::<u32>() {
            Ok(area) if area >= 1 => Ok(area),
            _ => {
                errors.push("floor_area", INVALID_VALUE);
                Err(errors)
            }
        }
    }
}

impl Validate for RoomCounters {
    type Output = RoomCounters;

    fn validate(&self) -> Result<RoomCounters, FieldErrors> {
        let mut errors = FieldErrors::new();
        for (kind, quantity) in self.iter() {
            if quantity > MAX_ROOM_QUANTITY {
                errors.push(kind.as_str(), ROOM_LIMIT);
            }
        }

        if errors.is_empty() {
            Ok(self.clone())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleForm {
    pub start_window: String,
}

impl Validate for ScheduleForm {
    type Output = StartWindow;

    fn validate(&self) -> Result<StartWindow, FieldErrors> {
        let mut errors = FieldErrors::new();
        select(
            &mut errors,
            "start_window",
            &self.start_window,
            StartWindow::parse,
        )
        .ok_or(errors)
    }
}
