use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list, PRIORITY_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart, ChartType::PieChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "multi-stop-route-optimizer",
        "Sequence delivery stops by priority and handling needs",
        input(),
        output(),
        PromptSpec::new(
            "multi_stop_route.md",
            "I need you to analyze the multi-stop parcel route based on the following input parameters:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint(
        "parcelType",
        &["Standard", "Perishable", "Fragile", "Oversized", "Hazardous"],
    )
    .with_hint("priorityLevel", PRIORITY_LEVELS)
    .with_hint("urgencyLevel", &["Standard", "Express", "Critical"])
}

fn input() -> ObjectShape {
    let stop = Shape::object(
        "Stop",
        vec![
            Field::required("address", Shape::String),
            Field::required("parcelType", Shape::String),
            Field::required("priorityLevel", Shape::String),
        ],
    );

    ObjectShape::new(
        "MultiStopRouteInput",
        vec![
            Field::required("stops", Shape::list(stop)),
            Field::required("routeStart", Shape::String).describe("Origin such as a warehouse"),
            Field::required("urgencyLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    let routed_stop = Shape::object(
        "RoutedStop",
        vec![
            Field::required("address", Shape::String),
            Field::required("parcelType", Shape::String),
            Field::required("priorityLevel", Shape::String),
            Field::required("sequenceOrder", Shape::Integer),
            Field::required("handlingRequirements", Shape::String),
        ],
    );

    ObjectShape::new(
        "MultiStopRouteResults",
        vec![
            Field::required("optimizedRoute", Shape::list(routed_stop)),
            Field::required("totalStops", Shape::Integer),
            Field::required("highPriorityParcelCount", Shape::Integer),
            Field::required("handlingRequirementSummary", text_list()),
            Field::required("highRiskStops", text_list()),
            Field::required("delayRiskAnalysis", plot(CHARTS)),
            Field::required("travelComplexityAnalysis", plot(CHARTS)),
            Field::required("priorityParcelImpact", plot(CHARTS)),
            Field::required("handlingRequirementsDistribution", plot(CHARTS)),
            Field::required("handlingCostEstimation", plot(CHARTS)),
            Field::required("recommendations", text_list()),
        ],
    )
}
