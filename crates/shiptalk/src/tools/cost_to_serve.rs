use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::PieChart, ChartType::BarChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "cost-to-serve-analysis",
        "Break down what it costs to serve each product and customer segment",
        input(),
        output(),
        PromptSpec::new(
            "cost_to_serve.md",
            "Please perform a cost-to-serve analysis based on the following data:",
        )
        .with_chart_quota(ChartType::PieChart, 1, 2)
        .with_chart_quota(ChartType::BarChart, 1, 2)
        .with_chart_quota(ChartType::LineChart, 1, 2),
    )
    .with_charts(CHARTS)
    .with_hint("business_model", &["B2B", "B2C", "D2C", "Hybrid"])
    .with_hint(
        "user_goals",
        &[
            "Reduce Cost-to-Serve",
            "Improve Profit Margins",
            "Optimize Distribution Network",
            "Enhance Customer Satisfaction",
            "Streamline Operations",
        ],
    )
    .with_hint(
        "challenges",
        &[
            "High Delivery Costs",
            "Inefficient Warehousing",
            "Complex Distribution Channels",
            "Low Order Volumes",
            "High Return Rates",
        ],
    )
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "CostToServeInput",
        vec![
            Field::required("business_model", Shape::String),
            Field::required("key_products", text_list()),
            Field::required("customer_segments", text_list()),
            Field::required("average_order_values", Shape::map(Shape::Float)).describe("By customer segment"),
            Field::required("supply_chain_costs", Shape::map(Shape::Float)).describe("By supply chain stage"),
            Field::required("user_goals", text_list()),
            Field::optional("challenges", text_list()),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "CostToServeResults",
        vec![
            Field::required("total_cost_to_serve", Shape::Float),
            Field::optional("cost_breakdown", Shape::map(Shape::Float)),
            Field::optional("profit_margins", Shape::map(Shape::Float)),
            Field::required("optimization_recommendations", text_list()),
            Field::required("strategic_insights", text_list()),
            Field::required("visualizations", Shape::list(plot(CHARTS))),
            Field::required("implementation_steps", text_list()),
            Field::required("risk_evaluation", text_list()),
            Field::optional("case_examples", Shape::String),
            Field::required("final_recommendation", Shape::String),
        ],
    )
}
