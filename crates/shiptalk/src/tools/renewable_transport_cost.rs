use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::BarChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "renewable-transport-cost-estimator",
        "Compare route costs and emissions across renewable-powered vehicles",
        input(),
        output(),
        PromptSpec::new(
            "renewable_transport_cost.md",
            "I need a cost analysis for renewable-powered transport based on the following input:",
        )
        .with_reference("renewable_cost.json"),
    )
    .with_charts(CHARTS)
    .with_hint("carrierType", &["electricVehicle", "hydrogenVehicle", "biofuelVehicle"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "RenewableTransportInput",
        vec![
            Field::required("routeDistance", Shape::Float).describe("Miles"),
            Field::required("carrierType", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    let estimate = Shape::object(
        "VehicleCostEstimate",
        vec![
            Field::required("vehicleName", Shape::String),
            Field::required("energySource", Shape::String),
            Field::required("costEstimate", Shape::Float),
            Field::required("costPerUnit", Shape::String).describe("e.g. per kWh, per kg"),
            Field::required("efficiency", Shape::String),
            Field::required("environmentalImpact", Shape::String),
        ],
    );

    ObjectShape::new(
        "RenewableTransportResults",
        vec![
            Field::required("estimatedTotalCost", Shape::Float),
            Field::required("carrierCostEstimates", Shape::list(estimate)),
            Field::optional("emissionReductions", Shape::map(Shape::String)),
            Field::required("recommendedCarrier", Shape::String),
            Field::required("carrierComparisonAnalysis", plot(CHARTS)),
            Field::required("environmentalIncentives", text_list()),
        ],
    )
}
