use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{comparison_plot, plot, PRIORITY_LEVELS};

const CHARTS: &[ChartType] = &[ChartType::PieChart, ChartType::BarChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "freight-consolidation",
        "Combine orders into fewer loads to cut shipping cost and fill carrier capacity",
        input(),
        output(),
        PromptSpec::new(
            "freight_consolidation.md",
            "I need you to analyze the freight consolidation process based on the following input:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint("serviceType", &["Standard", "Express", "Priority"])
    .with_hint("priorityLevel", PRIORITY_LEVELS)
}

fn input() -> ObjectShape {
    let order = Shape::object(
        "Order",
        vec![
            Field::required("orderWeight", Shape::Float),
            Field::required("destinationAddress", Shape::String),
            Field::required("originAddress", Shape::String),
            Field::required("serviceType", Shape::String),
        ],
    );
    let carrier = Shape::object(
        "CarrierOption",
        vec![
            Field::required("carrierName", Shape::String),
            Field::required("carrierCapacity", Shape::Float),
        ],
    );

    ObjectShape::new(
        "FreightConsolidationInput",
        vec![
            Field::required("orders", Shape::list(order)),
            Field::required("carrierOptions", Shape::list(carrier)),
            Field::required("maxDeliveryTime", Shape::Integer).describe("Days"),
            Field::required("consolidationThreshold", Shape::Float),
            Field::required("shippingCostPerUnit", Shape::Float),
            Field::required("bulkDiscountRate", Shape::Integer).describe("Percent"),
            Field::required("priorityLevel", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "FreightConsolidationResults",
        vec![
            Field::required("consolidationRate", Shape::Float).describe("Percent of orders consolidated"),
            Field::required("consolidationDetails", plot(CHARTS)),
            Field::required("totalShippingCostBefore", Shape::Float),
            Field::required("totalShippingCostAfter", Shape::Float),
            Field::required("costSavings", Shape::Float),
            Field::required("discountApplied", Shape::Integer),
            Field::required("carrierUsage", comparison_plot(CHARTS)),
            Field::required("carrierLoadDistribution", plot(CHARTS)),
            Field::required("costComparison", plot(CHARTS)),
            Field::required("deliveryDelayRisk", Shape::String),
            Field::required("priorityRecommendations", Shape::String),
            Field::required("priorityImpact", Shape::String),
            Field::required("shipmentRecommendations", Shape::String),
            Field::required("costEfficiencyExplanation", Shape::String),
            Field::required("carrierRecommendations", Shape::String),
        ],
    )
}
