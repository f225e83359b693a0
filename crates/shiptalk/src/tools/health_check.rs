use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

/// Liveness probe that round-trips through the completion service
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "health-check",
        "Confirm the service and its completion backend are reachable",
        ObjectShape::new("HealthCheckInput", vec![Field::required("message", Shape::String)]),
        ObjectShape::new(
            "HealthCheckOutput",
            vec![
                Field::required("message", Shape::String),
                Field::required("input", Shape::String).describe("The message that was sent"),
            ],
        ),
        PromptSpec::new("health_check.md", "Health check payload:"),
    )
}
