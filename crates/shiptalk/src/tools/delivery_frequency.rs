use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart];
const URGENCY_LEVELS: &[&str] = &["Standard", "Express", "Critical"];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "delivery-frequency-cost-impact-analyzer",
        "Find the weekly delivery frequency with the best cost for a given urgency",
        input(),
        output(),
        PromptSpec::new(
            "delivery_frequency.md",
            "I need an analysis of delivery frequency cost impact based on these inputs:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint("urgencyLevel", URGENCY_LEVELS)
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "DeliveryFrequencyInput",
        vec![
            Field::required("deliveryFrequency", Shape::Integer).describe("Deliveries per week"),
            Field::required("averageParcelCost", Shape::Float),
            Field::required("routeDistance", Shape::Float).describe("Kilometers per route"),
            Field::required("urgencyLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    let breakdown = Shape::object(
        "FrequencyCost",
        vec![
            Field::required("frequency", Shape::Integer),
            Field::required("totalCost", Shape::Float),
            Field::required("costDifference", Shape::Float),
            Field::required("savingsPotential", Shape::Float),
            Field::required("averageCostPerParcel", Shape::Float),
            Field::required("totalDistanceCovered", Shape::Float),
        ],
    );
    let summary = Shape::object(
        "FinancialSummary",
        vec![
            Field::required("weeklySavings", Shape::Float),
            Field::required("monthlySavings", Shape::Float),
            Field::required("annualSavings", Shape::Float),
        ],
    );
    let urgency = Shape::object(
        "UrgencyImpact",
        vec![
            Field::required("urgencyLevel", Shape::one_of(URGENCY_LEVELS)),
            Field::required("suggestedFrequency", Shape::Integer),
            Field::required("description", Shape::String),
        ],
    );

    ObjectShape::new(
        "DeliveryFrequencyResults",
        vec![
            Field::required("frequencyCostBreakdown", Shape::list(breakdown)),
            Field::required("optimalFrequency", Shape::Integer),
            Field::required("totalCostEstimation", Shape::Float),
            Field::required("savingsEstimation", Shape::Float),
            Field::required("frequencyCostAnalysis", plot(CHARTS)),
            Field::required("savingsPotentialAnalysis", plot(CHARTS)),
            Field::required("averageCostPerParcelTrend", plot(CHARTS)),
            Field::required("distanceCoverageAnalysis", plot(CHARTS)),
            Field::required("recommendations", text_list()),
            Field::required("keyInsights", text_list()),
            Field::required("financialSummary", summary),
            Field::required("urgencyImpactAssessment", Shape::list(urgency)),
        ],
    )
}
