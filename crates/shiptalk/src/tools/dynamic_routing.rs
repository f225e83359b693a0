use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, RISK_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart, ChartType::PieChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "dynamic-routing",
        "Compare shipping modes and delivery risk under current traffic and weather",
        input(),
        output(),
        PromptSpec::new(
            "dynamic_routing.md",
            "I need you to analyze a parcel's delivery based on the following input:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint("trafficConditions", &["Light", "Moderate", "Heavy"])
    .with_hint("weatherConditions", &["Clear", "Rain", "Snow", "Fog", "Storm"])
    .with_hint("priorityLevel", &["Low", "Medium", "High"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "DynamicRoutingInput",
        vec![
            Field::required("destinationAddress", Shape::String),
            Field::required("currentLocation", Shape::String),
            Field::required("priorityLevel", Shape::String),
            Field::required("trafficConditions", Shape::String),
            Field::required("weatherConditions", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "DynamicRoutingResults",
        vec![
            Field::required("deliveryTimeComparison", plot(CHARTS)),
            Field::required("conditionImpactChart", plot(CHARTS)),
            Field::required("priorityBasedRecommendation", plot(CHARTS)),
            Field::required("riskLevel", Shape::one_of(RISK_LEVELS)),
            Field::required("riskProgress", Shape::Float),
            Field::required("riskExplanation", Shape::String),
            Field::required(
                "delayImpactAnalysis",
                Shape::list(Shape::object(
                    "ImpactProgress",
                    vec![
                        Field::required("label", Shape::String),
                        Field::required("value", Shape::Float),
                    ],
                )),
            ),
            Field::required("deliveryStatus", Shape::one_of(&["On Time", "Delayed"])),
            Field::required("deliveryStatusExplanation", Shape::String),
            Field::required(
                "trafficSensitivity",
                Shape::object(
                    "Sensitivity",
                    vec![
                        Field::required("level", Shape::one_of(RISK_LEVELS)),
                        Field::required("explanation", Shape::String),
                    ],
                ),
            ),
            Field::required("weatherImpactAssessment", Shape::String),
            Field::required("priorityAdjustmentSuggestions", Shape::String),
        ],
    )
}
