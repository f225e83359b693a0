use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::plot;

const CHARTS: &[ChartType] = &[
    ChartType::BarChart,
    ChartType::PieChart,
    ChartType::LineChart,
    ChartType::AreaChart,
];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "just-in-time-inventory",
        "Balance stock, lead times and production days to minimize holding costs",
        input(),
        output(),
        PromptSpec::new(
            "just_in_time_inventory.md",
            "I want to optimize my inventory using the Just-In-Time approach. Here's my data:",
        ),
    )
    .with_charts(CHARTS)
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "JustInTimeInventoryInput",
        vec![
            Field::required("productType", Shape::String),
            Field::required("currentInventoryLevel", Shape::Integer),
            Field::required("averageLeadTime", Shape::Integer).describe("Days"),
            Field::required("dailyDemand", Shape::Integer),
            Field::required("productionDays", Shape::Integer),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "JustInTimeInventoryResults",
        vec![
            Field::required("description", Shape::String),
            Field::required("plots", Shape::list(plot(CHARTS))),
            Field::required("conclusion", Shape::String).describe("Markdown"),
        ],
    )
}
