//! Output sub-shapes shared across tools.

use crate::chart::ChartType;
use crate::shape::{Field, Shape};

pub const RISK_LEVELS: &[&str] = &["Low", "Medium", "High"];
pub const PRIORITY_LEVELS: &[&str] = &["High", "Medium", "Low"];
pub const COMPANY_SIZES: &[&str] = &["Small", "Medium", "Large"];

pub fn text_list() -> Shape {
    Shape::list(Shape::String)
}

/// A chart the front-end can render: axis labels, a chart kind, and points
pub fn plot(charts: &[ChartType]) -> Shape {
    Shape::object(
        "Plot",
        vec![
            Field::required("xLabel", Shape::String),
            Field::required("yLabel", Shape::String),
            Field::required("chartType", chart_kind(charts)),
            Field::required(
                "data",
                Shape::list(Shape::object(
                    "PlotData",
                    vec![
                        Field::required("label", Shape::String).describe("One or two words"),
                        Field::required("value", Shape::Float),
                    ],
                )),
            ),
        ],
    )
}

/// A chart contrasting current and optimized values per label
pub fn comparison_plot(charts: &[ChartType]) -> Shape {
    Shape::object(
        "ComparisonPlot",
        vec![
            Field::required("xLabel", Shape::String),
            Field::required("yLabel", Shape::String),
            Field::required("chartType", chart_kind(charts)),
            Field::required(
                "data",
                Shape::list(Shape::object(
                    "ComparisonData",
                    vec![
                        Field::required("label", Shape::String),
                        Field::required("current", Shape::Float),
                        Field::required("optimized", Shape::Float),
                    ],
                )),
            ),
            Field::required("explanation", Shape::String).describe("Markdown"),
        ],
    )
}

fn chart_kind(charts: &[ChartType]) -> Shape {
    Shape::Enum(ChartType::names(charts))
}

/// Graded risk shown as a progress bar
pub fn risk_analysis() -> Shape {
    Shape::object(
        "RiskAnalysis",
        vec![
            Field::required("riskLevel", Shape::one_of(RISK_LEVELS)),
            Field::required("riskProgress", Shape::Float).describe("0 to 100"),
            Field::required("explanation", Shape::String).describe("Markdown"),
        ],
    )
}

pub fn risk_mitigation() -> Shape {
    Shape::object(
        "RiskMitigation",
        vec![
            Field::required("risk_description", Shape::String),
            Field::required("mitigation_suggestion", Shape::String),
        ],
    )
}

pub fn kpi() -> Shape {
    Shape::object(
        "KeyPerformanceIndicator",
        vec![
            Field::required("kpi_name", Shape::String),
            Field::required("current_value", Shape::Float),
            Field::required("expected_improvement_percentage", Shape::Float),
        ],
    )
}

pub fn progress() -> Shape {
    Shape::object(
        "ProgressData",
        vec![
            Field::required("label", Shape::String),
            Field::required("value", Shape::Float).describe("0 to 100"),
            Field::required("explanation", Shape::String).describe("Markdown"),
        ],
    )
}

pub fn packaging_option() -> Shape {
    Shape::object(
        "PackagingOption",
        vec![
            Field::required("name", Shape::String),
            Field::required("cost", Shape::Float),
            Field::required(
                "specifications",
                Shape::list(Shape::object(
                    "Specification",
                    vec![
                        Field::required("name", Shape::String),
                        Field::required("value", Shape::String),
                    ],
                )),
            ),
        ],
    )
}

pub fn carrier_profile() -> Shape {
    Shape::object(
        "CarrierProfile",
        vec![
            Field::required("name", Shape::String),
            Field::required("rating", Shape::Float),
            Field::required("capabilities", text_list()),
            Field::required("costPremium", Shape::Float),
        ],
    )
}
