use serde::{Deserialize, Serialize};

use super::room::RoomCounters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [Self::House, Self::Apartment, Self::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Apartment => "apartment",
            Self::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::House => "Casa",
            Self::Apartment => "Apartamento",
            Self::Commercial => "Comercial",
        }
    }

    /// Accepts either the code (`house`) or the display label (`Casa`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Renovation,
    Construction,
}

impl WorkType {
    pub const ALL: [WorkType; 2] = [Self::Renovation, Self::Construction];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Renovation => "renovation",
            Self::Construction => "construction",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Renovation => "Reforma",
            Self::Construction => "Construção",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label() == s)
    }
}

/// Which pricing track the client is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    ArchitecturalProject,
    EssentialEngineering,
}

impl BudgetType {
    pub const ALL: [BudgetType; 2] = [Self::ArchitecturalProject, Self::EssentialEngineering];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArchitecturalProject => "architectural_project",
            Self::EssentialEngineering => "essential_engineering",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ArchitecturalProject => "Projeto Arquitetônico",
            Self::EssentialEngineering => "Projeto Essencial de Engenharia",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label() == s)
    }
}

/// Engineering disciplines quoted on the essential-engineering track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubProject {
    Electrical,
    Hydraulic,
    HydroSanitary,
    Stormwater,
}

impl SubProject {
    pub const ALL: [SubProject; 4] = [
        Self::Electrical,
        Self::Hydraulic,
        Self::HydroSanitary,
        Self::Stormwater,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Hydraulic => "hydraulic",
            Self::HydroSanitary => "hydro_sanitary",
            Self::Stormwater => "stormwater",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electrical => "Elétrico",
            Self::Hydraulic => "Hidraulico",
            Self::HydroSanitary => "Hidrossanitário",
            Self::Stormwater => "Águas Pluvias",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label() == s)
    }
}

/// How soon the client intends to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartWindow {
    Within15Days,
    Within30Days,
    Within45Days,
}

impl StartWindow {
    pub const ALL: [StartWindow; 3] = [Self::Within15Days, Self::Within30Days, Self::Within45Days];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Within15Days => "within_15_days",
            Self::Within30Days => "within_30_days",
            Self::Within45Days => "within_45_days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Within15Days => "Em até 15 dias",
            Self::Within30Days => "Em até 30 dias",
            Self::Within45Days => "Em até 45 dias",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    /// Always in the canonical `(DD) D DDDD-DDDD` form once validated.
    pub whatsapp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub property_type: PropertyType,
    pub work_type: WorkType,
    pub budget_type: BudgetType,
}

impl Classification {
    /// Architectural project for building a new house: the only combination
    /// priced room by room.
    pub fn is_house_construction(&self) -> bool {
        self.budget_type == BudgetType::ArchitecturalProject
            && self.property_type == PropertyType::House
            && self.work_type == WorkType::Construction
    }
}

/// Validated answers gathered so far in one questionnaire session.
///
/// Each field group is `None` (or empty) until its step has been submitted
/// successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub contact: Option<Contact>,
    pub classification: Option<Classification>,
    pub has_architectural_project: Option<bool>,
    pub sub_projects: Vec<SubProject>,
    pub rooms: RoomCounters,
    pub floor_area: Option<u32>,
    pub start_window: Option<StartWindow>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget_type(&self) -> Option<BudgetType> {
        self.classification.map(|c| c.budget_type)
    }

    pub fn is_house_construction(&self) -> bool {
        self.classification
            .is_some_and(|c| c.is_house_construction())
    }
}
