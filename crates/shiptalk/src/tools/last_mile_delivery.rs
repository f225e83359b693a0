use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{kpi, plot, risk_mitigation, text_list};

const CHARTS: &[ChartType] = &[
    ChartType::BarChart,
    ChartType::PieChart,
    ChartType::LineChart,
    ChartType::AreaChart,
    ChartType::ScatterPlot,
    ChartType::HeatMap,
];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "last-mile-delivery-solutions",
        "Recommend carriers and tactics for faster, cheaper last-mile delivery",
        input(),
        output(),
        PromptSpec::new("last_mile_delivery.md", "Please analyze the following data:")
            .with_chart_quota(ChartType::PieChart, 1, 3)
            .with_chart_quota(ChartType::BarChart, 1, 3)
            .with_chart_quota(ChartType::LineChart, 1, 3),
    )
    .with_charts(CHARTS)
    .with_hint(
        "type_of_products",
        &[
            "Perishable Goods",
            "Fragile Items",
            "High-Value Products",
            "Regulated Goods (e.g., Alcohol, Tobacco)",
            "Oversized & Heavy Items",
            "Temperature-Sensitive Goods",
            "Standard Retail Products",
            "Documents & Legal Paperwork",
            "Medical Supplies & Pharmaceuticals",
        ],
    )
    .with_hint(
        "delivery_method",
        &[
            "Own Fleet",
            "Third-Party Carrier",
            "Mixed Fleet",
            "Courier Service",
            "Postal Service",
            "Crowdsourced Delivery",
        ],
    )
    .with_hint(
        "user_objectives",
        &[
            "Cost Reduction",
            "Faster Delivery",
            "Customer Satisfaction",
            "Operational Efficiency",
            "Improved Delivery Accuracy",
            "Sustainability",
            "Enhanced Tracking & Visibility",
        ],
    )
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "LastMileDeliveryInput",
        vec![
            Field::required("daily_orders", Shape::Integer),
            Field::required("delivery_locations", text_list()),
            Field::required("delivery_method", Shape::String),
            Field::required("user_objectives", text_list()),
            Field::required("type_of_products", text_list()),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "LastMileDeliveryResults",
        vec![
            Field::required("suggested_carriers", text_list()),
            Field::required("estimated_cost_savings_percentage", Shape::Float),
            Field::required("expected_delivery_time_reduction_percentage", Shape::Float),
            Field::required("key_performance_indicators", Shape::list(kpi())),
            Field::required("implementation_plan", text_list()),
            Field::required("risk_analysis", Shape::list(risk_mitigation())),
            Field::required("overall_suggestion", Shape::String),
            Field::required("charts", Shape::list(plot(CHARTS))),
            Field::optional("success_stories", Shape::String),
        ],
    )
}
