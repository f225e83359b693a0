use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::LineChart, ChartType::PieChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "seasonal-planning",
        "Prepare shipping and storage capacity for peak seasons",
        input(),
        output(),
        PromptSpec::new(
            "seasonal_planning.md",
            "Please analyze my business data for the upcoming peak seasons and provide \
             recommendations based on the following input:",
        ),
    )
    .with_charts(CHARTS)
    .with_hint(
        "peak_season_periods",
        &[
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
            "Spring",
            "Summer",
            "Fall",
            "Winter",
        ],
    )
    .with_hint(
        "constraints",
        &[
            "Budget Limitations",
            "Supplier Constraints",
            "Labor Shortage",
            "Storage Capacity Limits",
            "Regulatory Compliance",
        ],
    )
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "SeasonalPlanningInput",
        vec![
            Field::required("peak_season_periods", text_list()),
            Field::required("daily_shipments", Shape::Integer),
            Field::required("expected_demand_increase_percentage", Shape::Float),
            Field::required("available_capacity", Shape::Integer)
                .describe("Total shipping and storage capacity"),
            Field::optional("constraints", text_list()),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "SeasonalPlanningResults",
        vec![
            Field::required("estimated_cost_impact", Shape::Float),
            Field::required(
                "cost_breakdown",
                Shape::list(Shape::object(
                    "CostBreakdown",
                    vec![
                        Field::required("label", Shape::String),
                        Field::required("cost", Shape::Float),
                    ],
                )),
            ),
            Field::required("potential_risks", Shape::String),
            Field::required("mitigation_strategies", Shape::String),
            Field::required("implementation_plan", Shape::String),
            Field::required("charts", Shape::list(plot(CHARTS))),
            Field::required("summary", Shape::String),
        ],
    )
}
