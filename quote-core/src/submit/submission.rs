use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::format_brl;
use crate::flow::FlowVariant;
use crate::models::{
    BudgetResult, Classification, Contact, RoomCounters, StartWindow, SubProject,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("endpoint answered with status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Everything the studio receives about one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub variant: FlowVariant,
    pub contact: Contact,
    pub classification: Option<Classification>,
    pub floor_area: Option<u32>,
    pub sub_projects: Vec<SubProject>,
    pub rooms: RoomCounters,
    pub start_window: StartWindow,
    pub budget: BudgetResult,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Plain-text summary sent to the studio's inbox, one `key: value` per line.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Room quantities are only meaningful when they fed into the quote or
    /// when engineering needs them as context.
    fn priced_by_rooms(&self) -> bool {
        !matches!(self.budget, BudgetResult::AreaBased { .. })
    }
}

impl fmt::Display for Submission {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "name: {}", self.contact.name)?;
        writeln!(f, "email: {}", self.contact.email)?;
        writeln!(f, "whatsapp: {}", self.contact.whatsapp)?;

        if let Some(c) = &self.classification {
            writeln!(f, "budget_type: {}", c.budget_type.label())?;
            writeln!(f, "property_type: {}", c.property_type.label())?;
            writeln!(f, "work_type: {}", c.work_type.label())?;
        }

        if let Some(area) = self.floor_area {
            writeln!(f, "floor_area: {area} m²")?;
        }

        if !self.sub_projects.is_empty() {
            let labels: Vec<_> = self.sub_projects.iter().map(|p| p.label()).collect();
            writeln!(f, "sub_projects: {}", labels.join(","))?;
        }

        if self.priced_by_rooms() {
            for (kind, quantity) in self.rooms.iter() {
                writeln!(f, "{}: {quantity}", kind.as_str())?;
            }
        }

        writeln!(f, "start_window: {}", self.start_window.label())?;

        match &self.budget {
            BudgetResult::Tiered { tiers, .. } => {
                writeln!(f, "budget_silver: {}", format_brl(tiers.silver))?;
                writeln!(f, "budget_gold: {}", format_brl(tiers.gold))?;
                writeln!(f, "budget_diamond: {}", format_brl(tiers.diamond))?;
            }
            other => {
                if let Some(total) = other.total() {
                    writeln!(f, "budget: {}", format_brl(total))?;
                }
            }
        }

        if let Some(area) = self.budget.approximate_area() {
            writeln!(f, "approximate_area: {area} m²")?;
        }

        Ok(())
    }
}

/// One way of delivering a finished questionnaire.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        submission: &Submission,
    ) -> Result<(), SubmissionError>;
}
