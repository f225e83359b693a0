use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{comparison_plot, plot, risk_analysis, PRIORITY_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::PieChart, ChartType::BarChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "cross-docking",
        "Schedule docks and labor to move goods from inbound to outbound trucks",
        input(),
        output(),
        PromptSpec::new(
            "cross_docking.md",
            "I need you to analyze the cross-docking process based on the following input:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint("loadType", &["Perishable", "Fragile", "Standard", "Special", "Other"])
    .with_hint("trafficConditions", &["Light", "Moderate", "Heavy"])
    .with_hint("weatherConditions", &["Clear", "Rain", "Snow", "Fog", "Storm"])
    .with_hint("priorityLevel", PRIORITY_LEVELS)
}

fn input() -> ObjectShape {
    let incoming = Shape::object(
        "IncomingTruck",
        vec![
            Field::required("arrivalTime", Shape::String),
            Field::required("loadType", Shape::String),
            Field::required("quantity", Shape::Float).describe("Units or weight of goods"),
        ],
    );
    let outbound = Shape::object(
        "OutboundTruck",
        vec![
            Field::required("departureTime", Shape::String).describe("YYYY-MM-DD HH:MM AM/PM"),
            Field::required("capacity", Shape::Float),
        ],
    );

    ObjectShape::new(
        "CrossDockingInput",
        vec![
            Field::required("incomingTrucks", Shape::list(incoming)),
            Field::required("outboundTrucks", Shape::list(outbound)),
            Field::required("docksAvailable", Shape::Integer),
            Field::required("laborAvailable", Shape::Integer),
            Field::required("priorityLevel", Shape::String),
            Field::required("trafficConditions", Shape::String),
            Field::required("weatherConditions", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "CrossDockingResults",
        vec![
            Field::required("carrierOptimization", plot(CHARTS)),
            Field::required("dockScheduling", Shape::String),
            Field::required("laborAllocation", plot(CHARTS)),
            Field::required("riskAssessment", risk_analysis()),
            Field::required("deliveryTimelineComparison", comparison_plot(CHARTS)),
            Field::required(
                "deliveryStatus",
                Shape::object(
                    "DeliveryStatus",
                    vec![
                        Field::required("status", Shape::one_of(&["On Time", "Delayed"])),
                        Field::required("explanation", Shape::String),
                    ],
                ),
            ),
            Field::required(
                "costEfficiency",
                Shape::object(
                    "CostEfficiency",
                    vec![
                        Field::required("laborEfficiency", Shape::String),
                        Field::required("dockUtilization", Shape::String),
                        Field::required("truckCapacityUtilization", Shape::String),
                    ],
                ),
            ),
        ],
    )
}
