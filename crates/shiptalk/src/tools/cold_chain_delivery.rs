use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{carrier_profile, packaging_option, plot, text_list, RISK_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "cold-chain-delivery-cost-estimator",
        "Estimate temperature-controlled delivery cost, packaging and risk",
        input(),
        output(),
        PromptSpec::new(
            "cold_chain_delivery.md",
            "Please analyze the cold-chain delivery cost requirements based on the following input:",
        )
        .with_reference("climate.json"),
    )
    .with_charts(CHARTS)
    .with_hint(
        "weatherCondition",
        &[
            "Extreme Heat",
            "Extreme Cold",
            "High Humidity",
            "Extreme Temperature Fluctuation",
        ],
    )
    .with_hint("carrier", &["CoolTech Logistics", "PolarShield Transport", "ThermoGuard Express"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "ColdChainDeliveryInput",
        vec![
            Field::required("productType", Shape::String),
            Field::required("weatherCondition", Shape::String),
            Field::required("routeDistance", Shape::Float).describe("Miles"),
            Field::required("carrier", Shape::String),
            Field::required("temperatureRequirement", Shape::Float).describe("Degrees Fahrenheit"),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "ColdChainDeliveryResults",
        vec![
            Field::required("packagingRecommendations", Shape::list(packaging_option())),
            Field::required("carrierCostEstimate", carrier_profile()),
            Field::required("totalDeliveryCost", Shape::Float),
            Field::required("weatherImpactAssessment", Shape::String),
            Field::required("costBreakdownChart", plot(CHARTS)),
            Field::required("environmentalRiskLevel", Shape::one_of(RISK_LEVELS)),
            Field::required("handlingRecommendations", text_list()),
            Field::required("estimatedDeliveryTime", Shape::String),
            Field::required("temperatureDeviationRisk", Shape::one_of(RISK_LEVELS)),
            Field::required("packagingCostEfficiencyChart", plot(CHARTS)),
            Field::required("seasonalAdjustmentRecommendations", Shape::String),
        ],
    )
}
