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
        "sales-and-operations-planning",
        "Align demand forecasts, inventory and operations into one S&OP plan",
        input(),
        output(),
        PromptSpec::new("sales_and_operations_planning.md", "Please analyze the following data:")
            .with_chart_quota(ChartType::PieChart, 1, 3)
            .with_chart_quota(ChartType::BarChart, 1, 3)
            .with_chart_quota(ChartType::LineChart, 1, 3),
    )
    .with_charts(CHARTS)
    .with_hint(
        "industry_sector",
        &[
            "Retail",
            "Manufacturing",
            "Healthcare",
            "Technology",
            "Consumer Goods",
            "Automotive",
            "Pharmaceuticals",
            "Food & Beverage",
        ],
    )
    .with_hint(
        "user_objectives",
        &[
            "Improve Forecast Accuracy",
            "Reduce Stockouts",
            "Optimize Inventory Levels",
            "Enhance Customer Satisfaction",
            "Increase Operational Efficiency",
            "Reduce Costs",
            "Improve Collaboration Across Departments",
        ],
    )
    .with_hint(
        "operational_constraints",
        &[
            "Limited Production Capacity",
            "Supply Chain Disruptions",
            "Regulatory Compliance",
            "Budget Limitations",
            "Workforce Shortages",
            "Technology Limitations",
        ],
    )
    .with_hint(
        "current_challenges",
        &[
            "Inaccurate Forecasts",
            "High Inventory Costs",
            "Slow Response to Market Changes",
            "Lack of Coordination Between Departments",
            "Overproduction or Underproduction",
            "Inefficient Resource Allocation",
        ],
    )
    .with_hint("company_size", COMPANY_SIZES)
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "SalesAndOperationsPlanningInput",
        vec![
            Field::required("company_size", Shape::String),
            Field::required("industry_sector", Shape::String),
            Field::required("current_sales_data", Shape::map(Shape::Float)).describe("Sales by month"),
            Field::required("inventory_levels", Shape::map(Shape::Float)).describe("Stock by product"),
            Field::required("operational_constraints", text_list()),
            Field::required("demand_forecast_horizon_months", Shape::Integer),
            Field::required("user_objectives", text_list()),
            Field::optional("current_challenges", text_list()),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "SalesAndOperationsPlanningResults",
        vec![
            Field::optional("optimized_forecast", Shape::map(Shape::Float)),
            Field::optional("recommended_inventory_levels", Shape::map(Shape::Float)),
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
