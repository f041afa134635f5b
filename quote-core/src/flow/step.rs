use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in the questionnaire.
///
/// Sub-steps (`HasProject`, `SubProjects`, `FloorArea`) only exist in the
/// branching flow and share the progress stage of the step they hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Intro,
    Contact,
    Property,
    HasProject,
    SubProjects,
    Rooms,
    FloorArea,
    Schedule,
    Result,
}

impl Step {
    /// Legacy numeric code of the step, kept for logs and analytics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Intro => "0",
            Self::Contact => "1",
            Self::Property => "2",
            Self::HasProject => "2.5",
            Self::SubProjects => "2.7",
            Self::Rooms => "3",
            Self::FloorArea => "3.5",
            Self::Schedule => "4",
            Self::Result => "5",
        }
    }

    /// Which of the four progress-marker segments is active, if any.
    pub fn stage(&self) -> Option<u8> {
        match self {
            Self::Intro | Self::Result => None,
            Self::Contact => Some(1),
            Self::Property | Self::HasProject | Self::SubProjects => Some(2),
            Self::Rooms | Self::FloorArea => Some(3),
            Self::Schedule => Some(4),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Intro => "Orçamento online",
            Self::Contact => "Seus dados",
            Self::Property => "Sobre o imóvel",
            Self::HasProject => "Projeto arquitetônico",
            Self::SubProjects => "Projetos de engenharia",
            Self::Rooms => "Ambientes",
            Self::FloorArea => "Metragem",
            Self::Schedule => "Prazo",
            Self::Result => "Resultado",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

/// Number of segments in the progress marker.
pub const STAGE_COUNT: u8 = 4;

/// The two shapes the questionnaire ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowVariant {
    /// Architectural / engineering tracks with conditional sub-steps.
    #[default]
    Branching,
    /// Straight sequence priced with the three finish tiers.
    Linear,
}

impl FlowVariant {
    pub fn steps(&self) -> &'static [Step] {
        match self {
            Self::Branching => &[
                Step::Intro,
                Step::Contact,
                Step::Property,
                Step::HasProject,
                Step::SubProjects,
                Step::Rooms,
                Step::FloorArea,
                Step::Schedule,
                Step::Result,
            ],
            Self::Linear => &[
                Step::Intro,
                Step::Contact,
                Step::Property,
                Step::Rooms,
                Step::Schedule,
                Step::Result,
            ],
        }
    }

    pub fn contains(
        &self,
        step: Step,
    ) -> bool {
        self.steps().contains(&step)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Branching => "branching",
            Self::Linear => "linear",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "branching" => Some(Self::Branching),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sub_steps_share_parent_stage() {
        assert_eq!(Step::HasProject.stage(), Step::Property.stage());
        assert_eq!(Step::SubProjects.stage(), Step::Property.stage());
        assert_eq!(Step::FloorArea.stage(), Step::Rooms.stage());
    }

    #[test]
    fn stages_cover_one_to_stage_count() {
        let mut stages: Vec<u8> = FlowVariant::Branching
            .steps()
            .iter()
            .filter_map(|s| s.stage())
            .collect();
        stages.dedup();

        assert_eq!(stages, (1..=STAGE_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn linear_flow_has_no_sub_steps() {
        for step in [Step::HasProject, Step::SubProjects, Step::FloorArea] {
            assert!(!FlowVariant::Linear.contains(step));
            assert!(FlowVariant::Branching.contains(step));
        }
    }

    #[test]
    fn display_includes_legacy_code() {
        assert_eq!(Step::HasProject.to_string(), "HasProject(2.5)");
    }

    #[test]
    fn variant_round_trips_through_str() {
        for variant in [FlowVariant::Branching, FlowVariant::Linear] {
            assert_eq!(FlowVariant::parse(variant.as_str()), Some(variant));
        }
    }
}
