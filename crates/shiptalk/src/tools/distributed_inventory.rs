use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{comparison_plot, plot, text_list};

const CHARTS: &[ChartType] = &[
    ChartType::PieChart,
    ChartType::BarChart,
    ChartType::AreaChart,
    ChartType::LineChart,
];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "distributed-inventory",
        "Split inventory across warehouse regions to match regional demand",
        input(),
        output(),
        PromptSpec::new(
            "distributed_inventory.md",
            "I need you to optimize inventory distribution across multiple warehouses. \
             Below is the information about my current warehouse setup and demand levels:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint("demandLevel", &["High", "Medium", "Low"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "DistributedInventoryInput",
        vec![
            Field::required("warehouseRegions", text_list()),
            Field::required(
                "demandLevels",
                Shape::list(Shape::object(
                    "RegionalDemand",
                    vec![
                        Field::required("region", Shape::String),
                        Field::required("demandLevel", Shape::String),
                    ],
                )),
            ),
            Field::required("leadTime", Shape::Integer).describe("Days"),
            Field::required("productType", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "DistributedInventoryResults",
        vec![
            Field::required("inventoryDistribution", plot(CHARTS)),
            Field::required("replenishmentSchedule", comparison_plot(CHARTS)),
            Field::required("shippingCostsAndTimes", comparison_plot(CHARTS)),
            Field::required("warehouseUtilization", comparison_plot(CHARTS)),
            Field::required("demandForecast", comparison_plot(CHARTS)),
            Field::required("costToServe", comparison_plot(CHARTS)),
            Field::required("newWarehouseRecommendation", plot(CHARTS)),
            Field::required("conclusion", Shape::String),
        ],
    )
}
