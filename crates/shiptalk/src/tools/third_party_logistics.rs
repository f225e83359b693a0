use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{kpi, plot, risk_mitigation, text_list, COMPANY_SIZES};

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
        "third-party-logistics",
        "Recommend 3PL providers and an outsourcing plan for chosen logistics functions",
        input(),
        output(),
        PromptSpec::new("third_party_logistics.md", "Please analyze the following data:")
            .with_chart_quota(ChartType::PieChart, 1, 3)
            .with_chart_quota(ChartType::BarChart, 1, 3)
            .with_chart_quota(ChartType::LineChart, 1, 3),
    )
    .with_charts(CHARTS)
    .with_hint(
        "logistics_functions_to_outsource",
        &[
            "Warehousing",
            "Transportation",
            "Inventory Management",
            "Order Fulfillment",
            "Customs Brokerage",
            "Freight Forwarding",
            "Reverse Logistics",
            "Distribution",
        ],
    )
    .with_hint(
        "types_of_products",
        &[
            "Electronics",
            "Perishable Goods",
            "Fragile Items",
            "High-Value Products",
            "Oversized & Heavy Items",
            "Temperature-Sensitive Goods",
            "Standard Retail Products",
            "Medical Supplies & Pharmaceuticals",
        ],
    )
    .with_hint(
        "user_objectives",
        &[
            "Cost Reduction",
            "Scalability",
            "Improved Service Levels",
            "Access to Advanced Technology",
            "Focus on Core Competencies",
            "Operational Efficiency",
            "Enhanced Tracking & Visibility",
        ],
    )
    .with_hint(
        "constraints",
        &[
            "Budget Limitations",
            "Regulatory Compliance",
            "Limited Resources",
            "Tight Timelines",
            "Data Security Requirements",
            "Customer Service Expectations",
        ],
    )
    .with_hint(
        "current_challenges",
        &[
            "High Inventory Costs",
            "Slow Delivery Times",
            "Inaccurate Order Fulfillment",
            "Lack of Scalability",
            "Inefficient Processes",
            "High Return Rates",
        ],
    )
    .with_hint(
        "geographic_regions",
        &[
            "North America",
            "Europe",
            "Asia-Pacific",
            "Latin America",
            "Middle East",
            "Africa",
        ],
    )
    .with_hint("company_size", COMPANY_SIZES)
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "ThirdPartyLogisticsInput",
        vec![
            Field::required("company_size", Shape::String),
            Field::required("logistics_functions_to_outsource", text_list()),
            Field::required("geographic_regions", text_list()),
            Field::required("types_of_products", text_list()),
            Field::required("shipment_volume_per_month", Shape::Integer),
            Field::required("user_objectives", text_list()),
            Field::optional("constraints", text_list()),
            Field::optional("current_challenges", text_list()),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "ThirdPartyLogisticsResults",
        vec![
            Field::required("suggested_providers", text_list()),
            Field::required("estimated_cost_savings_percentage", Shape::Float),
            Field::required("expected_improvement_in_service_levels", Shape::String),
            Field::required("key_performance_indicators", Shape::list(kpi())),
            Field::required("implementation_plan", text_list()),
            Field::required("risk_analysis", Shape::list(risk_mitigation())),
            Field::required("key_considerations", text_list()),
            Field::required("charts", Shape::list(plot(CHARTS))),
            Field::optional("success_stories", Shape::String),
            Field::required("overall_suggestion", Shape::String),
        ],
    )
}
