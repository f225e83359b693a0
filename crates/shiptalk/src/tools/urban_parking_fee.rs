use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list, RISK_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "urban-parking-fee-minimizer",
        "Cut parking fees on urban delivery stops with timing, zones and permits",
        input(),
        output(),
        PromptSpec::new(
            "urban_parking_fee.md",
            "I need you to analyze the urban parking fees and optimize delivery stops \
             based on the following inputs:",
        )
        .with_reference("parking_fees.json"),
    )
    .with_charts(CHARTS)
    .with_hint("urgencyLevel", &["Standard", "Express", "Same-Day"])
}

fn input() -> ObjectShape {
    let stop = Shape::object(
        "DeliveryLocation",
        vec![
            Field::required("location", Shape::String),
            Field::required("deliveryTime", Shape::String),
        ],
    );

    ObjectShape::new(
        "UrbanParkingInput",
        vec![
            Field::required("deliveryLocations", Shape::list(stop)),
            Field::required("urgencyLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    let cost = Shape::object(
        "ParkingCost",
        vec![
            Field::required("location", Shape::String),
            Field::required("zoneType", Shape::String),
            Field::required("estimatedParkingCost", Shape::Float),
        ],
    );
    let traffic = Shape::object(
        "TrafficWindow",
        vec![
            Field::required("location", Shape::String),
            Field::required("congestionLevel", Shape::one_of(RISK_LEVELS)),
            Field::required("suggestedTime", Shape::String),
        ],
    );
    let permit = Shape::object(
        "PermitRecommendation",
        vec![
            Field::required("permitType", Shape::String),
            Field::required("applicableZones", text_list()),
            Field::required("cost", Shape::String).describe("Monthly or annual"),
        ],
    );

    ObjectShape::new(
        "UrbanParkingResults",
        vec![
            Field::required("totalEstimatedParkingCost", Shape::Float),
            Field::required("parkingCostAnalysis", Shape::list(cost)),
            Field::required("trafficAnalysis", Shape::list(traffic)),
            Field::required("loadingZoneInfo", Shape::String),
            Field::required("permitRecommendations", Shape::list(permit)),
            Field::required("seasonalEventImpact", Shape::String),
            Field::required("parkingFeeComparison", plot(CHARTS)),
            Field::required("congestionImpactAnalysis", plot(CHARTS)),
        ],
    )
}
