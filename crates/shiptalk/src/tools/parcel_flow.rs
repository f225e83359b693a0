use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list, PRIORITY_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart, ChartType::PieChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "parcel-flow",
        "Find bottlenecks and delay risk across parcel processing stages",
        input(),
        output(),
        PromptSpec::new(
            "parcel_flow.md",
            "I need you to analyze the parcel flow process based on the following input:",
        )
        .with_reference("parcel_flow.json"),
    )
    .with_charts(CHARTS)
    .with_hint("season", &["Spring", "Summer", "Fall", "Winter", "Holiday Peak"])
    .with_hint("type", &["Standard", "Fragile", "Perishable", "Oversized", "Hazardous"])
    .with_hint("weatherCondition", &["Clear", "Rain", "Snow", "Fog", "Storm"])
    .with_hint("staffAvailability", &["Full", "Limited", "Short-Staffed"])
    .with_hint("volume", &["Low", "Medium", "High"])
    .with_hint("priorityLevel", PRIORITY_LEVELS)
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "ParcelFlowInput",
        vec![
            Field::required("volume", Shape::String),
            Field::required("season", Shape::String),
            Field::required("type", Shape::String).describe("Parcel type"),
            Field::required("weatherCondition", Shape::String),
            Field::required("staffAvailability", Shape::String),
            Field::required("priorityLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "ParcelFlowResults",
        vec![
            Field::required("processingStage", plot(CHARTS)),
            Field::required("bottleneckIndicators", text_list()),
            Field::required(
                "delayPrediction",
                Shape::object(
                    "DelayPrediction",
                    vec![
                        Field::required("delayAllowance", Shape::Float).describe("Days"),
                        Field::required("onTimeDeliveryProbability", Shape::Float).describe("Percent"),
                    ],
                ),
            ),
            Field::required("riskLevelsByParcelType", plot(CHARTS)),
            Field::required("timePeriod", plot(CHARTS)),
            Field::required("bottleneckImpact", plot(CHARTS)),
            Field::required("recommendations", text_list()),
            Field::required("volumeImpactAnalysis", plot(CHARTS)),
            Field::required("seasonalRiskTrends", plot(CHARTS)),
            Field::required("staffUtilization", plot(CHARTS)),
            Field::required("costEfficiency", Shape::String),
        ],
    )
}
