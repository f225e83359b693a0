use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, progress, risk_analysis, PRIORITY_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::PieChart, ChartType::BarChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "cycle-counting",
        "Tune cycle count frequency and surface count discrepancies",
        input(),
        output(),
        PromptSpec::new(
            "cycle_counting.md",
            "I need you to analyze the cycle counting process based on the following input:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint(
        "cycleCountFrequency",
        &["Daily", "Weekly", "Bi-Weekly", "Monthly", "Quarterly", "Annually"],
    )
    .with_hint("priorityLevel", PRIORITY_LEVELS)
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "CycleCountingInput",
        vec![
            Field::required("cycleCountFrequency", Shape::String),
            Field::required("expectedCount", Shape::Integer),
            Field::required("currentInventoryLevels", Shape::Integer)
                .describe("Items currently recorded in the inventory system"),
            Field::required("priorityLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "CycleCountingResults",
        vec![
            Field::required("discrepancyAnalysis", plot(CHARTS)),
            Field::required("cycleCountFrequencySuggestion", progress()),
            Field::required("inventoryRiskAssessment", risk_analysis()),
            Field::required("priorityRecommendations", plot(CHARTS)),
            Field::required("cycleCountEfficiency", progress()),
            Field::required("nextCycleCountPeriod", Shape::String).describe("e.g. \"2 weeks\""),
            Field::required("replenishmentSuggestion", Shape::String),
            Field::required("stockLevelAnalysis", plot(CHARTS)),
            Field::required("accuracyImprovementSuggestions", Shape::String),
            Field::required("processStreamliningSuggestions", Shape::String),
        ],
    )
}
