use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{carrier_profile, packaging_option, plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart, ChartType::PieChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "parcel-climate-protection",
        "Recommend packaging and carriers that protect parcels from the climate en route",
        input(),
        output(),
        PromptSpec::new(
            "parcel_climate_protection.md",
            "I need you to analyze the climate protection requirements based on the following input:",
        )
        .with_reference("climate.json"),
    )
    .with_charts(CHARTS)
    .with_hint(
        "climateCondition",
        &[
            "Extreme Heat",
            "Extreme Cold",
            "High Humidity",
            "Extreme Temperature Fluctuation",
            "Rain",
            "Snow",
            "Storm",
        ],
    )
    .with_hint("sensitivityLevel", &["High", "Moderate", "Low"])
    .with_hint("urgencyLevel", &["Standard", "Express", "Same-Day"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "ParcelClimateProtectionInput",
        vec![
            Field::required("productType", Shape::String),
            Field::required("climateCondition", Shape::String),
            Field::required("sensitivityLevel", Shape::String),
            Field::required("carrierOptions", text_list()),
            Field::required("urgencyLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "ParcelClimateProtectionResults",
        vec![
            Field::required("climateRiskAssessment", Shape::String),
            Field::required("packagingRecommendations", Shape::list(packaging_option())),
            Field::required("carrierComparisons", Shape::list(carrier_profile())),
            Field::required("realTimeAlerts", text_list()),
            Field::required("packagingCostAnalysis", plot(CHARTS)),
            Field::required("carrierCapabilityAnalysis", plot(CHARTS)),
            Field::required("transitImpactPrediction", Shape::String),
            Field::required("climateAdaptabilityScore", plot(CHARTS)),
        ],
    )
}
