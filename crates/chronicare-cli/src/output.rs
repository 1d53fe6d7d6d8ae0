//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chronicare_domain::{fields_for, Condition, FieldSpec, ResultsMapping, RiskTier};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a single assessment.
    pub fn format_assessment(&self, condition: Condition, tier: RiskTier) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "condition": condition,
                "tier": tier,
            }))?),
            OutputFormat::Table => Ok(format!(
                "{} Risk Level: {}",
                condition,
                self.tier_label(tier)
            )),
            OutputFormat::Quiet => Ok(tier.to_string()),
        }
    }

    /// Format the tiers recorded so far.
    pub fn format_results(&self, results: &ResultsMapping) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
            OutputFormat::Table => Ok(self.format_results_table(results)),
            OutputFormat::Quiet => Ok(results
                .iter()
                .map(|(condition, tier)| format!("{}={}", condition, tier))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a composed care plan together with the tiers it was built from.
    pub fn format_plan(&self, results: &ResultsMapping, plan: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "results": results,
                "plan": plan,
            }))?),
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.warning(
                        "No conditions assessed yet. Assess at least one condition first.",
                    ));
                }
                Ok(format!(
                    "{}\n\n{}",
                    self.format_results_table(results),
                    plan
                ))
            }
            OutputFormat::Quiet => Ok(plan.to_string()),
        }
    }

    /// Format the field catalogue for the given conditions.
    pub fn format_fields(&self, conditions: &[Condition]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = conditions
                    .iter()
                    .flat_map(|&condition| {
                        fields_for(condition).iter().map(move |spec| {
                            serde_json::json!({
                                "condition": condition,
                                "field": spec.name(),
                                "label": spec.label(),
                                "kind": field_kind(spec),
                                "range": spec.range_text(),
                                "default": spec.default_text(),
                            })
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Condition", "Field", "Label", "Range", "Default"]);
                for &condition in conditions {
                    for spec in fields_for(condition) {
                        builder.push_record([
                            condition.to_string(),
                            spec.name().to_string(),
                            spec.label().to_string(),
                            spec.range_text(),
                            spec.default_text(),
                        ]);
                    }
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(conditions
                .iter()
                .flat_map(|&condition| {
                    fields_for(condition)
                        .iter()
                        .map(move |spec| format!("{}.{}", condition.key(), spec.name()))
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format results as a table.
    fn format_results_table(&self, results: &ResultsMapping) -> String {
        if results.is_empty() {
            return self.colorize("No conditions assessed yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Condition", "Risk Level"]);
        for (condition, tier) in results.iter() {
            builder.push_record([condition.as_str(), tier.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Tier name, colored by severity.
    pub fn tier_label(&self, tier: RiskTier) -> String {
        let color = match tier {
            RiskTier::High => "red",
            RiskTier::Moderate => "yellow",
            RiskTier::Low => "green",
        };
        self.colorize(tier.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn field_kind(spec: &FieldSpec) -> &'static str {
    match spec {
        FieldSpec::Integer(_) => "integer",
        FieldSpec::Decimal(_) => "decimal",
        FieldSpec::Flag(_) => "flag",
    }
}
