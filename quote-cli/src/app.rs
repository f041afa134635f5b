use quote_core::calculations::common::format_brl;
use quote_core::submit::SubmitterRegistry;
use quote_core::{BudgetResult, TerminalView};

use crate::config::ResultConfig;

pub const SUBMITTING: &str = "Calculando orçamento...";
pub const SUBMISSION_FAILED: &str = "Infelizmente algo deu errado, tente mais tarde!";
pub const DISCLAIMER: &str = "*Orçamento online possui margens de erro, faça seu orçamento \
                              realista entrando em contato conosco!";

/// Registry with every backend the CLI can submit through.
pub fn build_registry() -> SubmitterRegistry {
    quote_submit::default_registry()
}

/// Result-screen text for a computed budget.
pub fn render_budget(
    budget: &BudgetResult,
    result: &ResultConfig,
) -> String {
    let mut lines = Vec::new();

    match budget {
        BudgetResult::Tiered { tiers, .. } => {
            lines.push(format!("Prata:    {}", format_brl(tiers.silver)));
            lines.push(format!("Ouro:     {}", format_brl(tiers.gold)));
            lines.push(format!("Diamante: {}", format_brl(tiers.diamond)));
        }
        other => {
            if let Some(total) = other.total() {
                lines.push(format!("Seu orçamento final: {}", format_brl(total)));
            }
        }
    }

    if let Some(area) = budget.approximate_area() {
        lines.push(format!("Metragem aproximada do projeto: {area} m²"));
    }

    lines.push(String::new());
    lines.push(format!("{}: {}", result.contact_label, result.contact_url));
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

pub fn render_terminal(
    view: &TerminalView,
    result: &ResultConfig,
) -> String {
    match view {
        TerminalView::InProgress => SUBMITTING.to_string(),
        TerminalView::Failed(_) => SUBMISSION_FAILED.to_string(),
        TerminalView::Succeeded(budget) => render_budget(budget, result),
    }
}
