use serde::Serialize;
use serde_json::{json, Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// The structure and constraints a JSON value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    Integer,
    Float,
    Boolean,
    /// A string restricted to a fixed set of values
    Enum(Vec<&'static str>),
    List(Box<Shape>),
    /// A string-keyed dictionary whose values all share one shape
    Map(Box<Shape>),
    Object(ObjectShape),
}

/// A named record of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectShape {
    pub title: &'static str,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
    /// Value filled in when an optional field is absent. `None` means null.
    pub default: Option<Value>,
    pub description: Option<&'static str>,
}

/// One reason a value failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Dotted path to the offending value, e.g. `orders[0].orderWeight`
    pub field: String,
    /// The constraint the value had to satisfy
    pub expected: String,
    /// The value that was supplied; absent when the field was omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Value>,
}

impl Violation {
    fn missing(field: &str, shape: &Shape) -> Self {
        Self {
            field: display_path(field),
            expected: shape.expected(),
            given: None,
        }
    }

    fn mismatch(field: &str, expected: String, given: &Value) -> Self {
        Self {
            field: display_path(field),
            expected,
            given: Some(given.clone()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.given {
            None => write!(f, "{}: field required ({})", self.field, self.expected),
            Some(given) => write!(f, "{}: expected {}, got {}", self.field, self.expected, given),
        }
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}.{}", parent, child)
    }
}

impl Shape {
    pub fn one_of(values: &[&'static str]) -> Self {
        Shape::Enum(values.to_vec())
    }

    pub fn list(item: Shape) -> Self {
        Shape::List(Box::new(item))
    }

    pub fn map(value: Shape) -> Self {
        Shape::Map(Box::new(value))
    }

    pub fn object(title: &'static str, fields: Vec<Field>) -> Self {
        Shape::Object(ObjectShape::new(title, fields))
    }

    /// Human readable form of the constraint, used in violations
    pub fn expected(&self) -> String {
        match self {
            Shape::String => "string".to_string(),
            Shape::Integer => "integer".to_string(),
            Shape::Float => "number".to_string(),
            Shape::Boolean => "boolean".to_string(),
            Shape::Enum(values) => format!("one of [{}]", values.join(", ")),
            Shape::List(item) => format!("list of {}", item.expected()),
            Shape::Map(value) => format!("map of {}", value.expected()),
            Shape::Object(object) => format!("object {}", object.title),
        }
    }

    fn validate_at(&self, path: &str, value: &Value, violations: &mut Vec<Violation>) -> Option<Value> {
        let normalized = match self {
            Shape::String => value.is_string().then(|| value.clone()),
            Shape::Integer => coerce_integer(value).map(Value::from),
            Shape::Float => coerce_float(value)
                .and_then(Number::from_f64)
                .map(Value::Number),
            Shape::Boolean => coerce_boolean(value).map(Value::Bool),
            Shape::Enum(allowed) => value
                .as_str()
                .filter(|s| allowed.iter().any(|a| a == s))
                .map(|_| value.clone()),
            Shape::List(item) => {
                let items = match value.as_array() {
                    Some(items) => items,
                    None => {
                        violations.push(Violation::mismatch(path, self.expected(), value));
                        return None;
                    }
                };
                let before = violations.len();
                let normalized: Vec<Value> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item_value)| {
                        item.validate_at(&format!("{}[{}]", path, index), item_value, violations)
                    })
                    .collect();
                return (violations.len() == before).then_some(Value::Array(normalized));
            }
            Shape::Map(value_shape) => {
                let entries = match value.as_object() {
                    Some(entries) => entries,
                    None => {
                        violations.push(Violation::mismatch(path, self.expected(), value));
                        return None;
                    }
                };
                let before = violations.len();
                let mut normalized = Map::new();
                for (key, entry) in entries {
                    if let Some(v) = value_shape.validate_at(&join_path(path, key), entry, violations) {
                        normalized.insert(key.clone(), v);
                    }
                }
                return (violations.len() == before).then_some(Value::Object(normalized));
            }
            Shape::Object(object) => return object.validate_at(path, value, violations),
        };

        if normalized.is_none() {
            violations.push(Violation::mismatch(path, self.expected(), value));
        }
        normalized
    }

    fn schema(&self, strict: bool) -> Value {
        match self {
            Shape::String => json!({ "type": "string" }),
            Shape::Integer => json!({ "type": "integer" }),
            Shape::Float => json!({ "type": "number" }),
            Shape::Boolean => json!({ "type": "boolean" }),
            Shape::Enum(values) => json!({ "type": "string", "enum": values }),
            Shape::List(item) => json!({ "type": "array", "items": item.schema(strict) }),
            Shape::Map(value) => json!({ "type": "object", "additionalProperties": value.schema(strict) }),
            Shape::Object(object) => object.schema(strict),
        }
    }

    fn has_map(&self) -> bool {
        match self {
            Shape::Map(_) => true,
            Shape::List(item) => item.has_map(),
            Shape::Object(object) => object.fields.iter().any(|f| f.shape.has_map()),
            _ => false,
        }
    }

    fn example(&self) -> Value {
        match self {
            Shape::String => json!("example"),
            Shape::Integer => json!(1),
            Shape::Float => json!(1.5),
            Shape::Boolean => json!(false),
            Shape::Enum(values) => json!(values.first().copied().unwrap_or_default()),
            Shape::List(item) => json!([item.example()]),
            Shape::Map(value) => json!({ "example": value.example() }),
            Shape::Object(object) => object.example(),
        }
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn coerce_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

impl ObjectShape {
    pub fn new(title: &'static str, fields: Vec<Field>) -> Self {
        Self { title, fields }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate `value` against this shape.
    ///
    /// Every violation is collected rather than stopping at the first one. On
    /// success the returned value holds only declared fields, with lax
    /// coercions applied and defaults filled in for absent optional fields.
    pub fn validate(&self, value: &Value) -> Result<Value, Vec<Violation>> {
        let mut violations = Vec::new();
        match self.validate_at("", value, &mut violations) {
            Some(normalized) if violations.is_empty() => Ok(normalized),
            _ => Err(violations),
        }
    }

    fn validate_at(&self, path: &str, value: &Value, violations: &mut Vec<Violation>) -> Option<Value> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                violations.push(Violation::mismatch(path, format!("object {}", self.title), value));
                return None;
            }
        };

        let before = violations.len();
        let mut normalized = Map::new();
        for field in &self.fields {
            let field_path = join_path(path, field.name);
            match object.get(field.name) {
                None if field.required => violations.push(Violation::missing(&field_path, &field.shape)),
                Some(Value::Null) if field.required => {
                    violations.push(Violation::mismatch(&field_path, field.shape.expected(), &Value::Null))
                }
                None | Some(Value::Null) => {
                    normalized.insert(
                        field.name.to_string(),
                        field.default.clone().unwrap_or(Value::Null),
                    );
                }
                Some(given) => {
                    if let Some(v) = field.shape.validate_at(&field_path, given, violations) {
                        normalized.insert(field.name.to_string(), v);
                    }
                }
            }
        }

        (violations.len() == before).then_some(Value::Object(normalized))
    }

    /// Descriptive JSON Schema, as shown to the model and to API consumers
    pub fn json_schema(&self) -> Value {
        self.schema(false)
    }

    /// Closed JSON Schema for structured output: every object rejects extra
    /// properties and lists all of its properties as required, with optional
    /// ones made nullable.
    pub fn strict_json_schema(&self) -> Value {
        self.schema(true)
    }

    /// Open dictionaries cannot be expressed as a strict structured output.
    pub fn supports_strict(&self) -> bool {
        !self.fields.iter().any(|f| f.shape.has_map())
    }

    fn schema(&self, strict: bool) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut property = field.shape.schema(strict);
            if let Value::Object(ref mut attributes) = property {
                if let Some(description) = field.description {
                    attributes.insert("description".to_string(), json!(description));
                }
                if !strict {
                    if let Some(default) = &field.default {
                        attributes.insert("default".to_string(), default.clone());
                    }
                }
            }
            if strict && !field.required {
                property = json!({ "anyOf": [property, { "type": "null" }] });
            }
            if strict || field.required {
                required.push(field.name);
            }
            properties.insert(field.name.to_string(), property);
        }

        if strict {
            json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            })
        } else {
            json!({
                "title": self.title,
                "type": "object",
                "properties": properties,
                "required": required,
            })
        }
    }

    /// Allowed values of every enumerated field, keyed by field name.
    ///
    /// Nested records contribute their own field names, so a list of trucks
    /// with a `loadType` enum yields a `loadType` entry.
    pub fn enum_options(&self) -> BTreeMap<String, Vec<&'static str>> {
        let mut options = BTreeMap::new();
        self.collect_enum_options(&mut options);
        options
    }

    fn collect_enum_options(&self, options: &mut BTreeMap<String, Vec<&'static str>>) {
        for field in &self.fields {
            let mut shape = &field.shape;
            while let Shape::List(item) | Shape::Map(item) = shape {
                shape = item;
            }
            match shape {
                Shape::Enum(values) => {
                    options.insert(field.name.to_string(), values.clone());
                }
                Shape::Object(object) => object.collect_enum_options(options),
                _ => {}
            }
        }
    }

    /// A minimal value that satisfies this shape, optional fields included
    pub fn example(&self) -> Value {
        let fields: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.shape.example()))
            .collect();
        Value::Object(fields)
    }
}

impl Field {
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            required: true,
            default: None,
            description: None,
        }
    }

    pub fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            required: false,
            ..Self::required(name, shape)
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> ObjectShape {
        ObjectShape::new(
            "Inventory",
            vec![
                Field::required("productType", Shape::String),
                Field::required("dailyDemand", Shape::Integer),
                Field::required("priorityLevel", Shape::one_of(&["High", "Medium", "Low"])),
                Field::optional("constraints", Shape::list(Shape::String)),
                Field::optional("expedite", Shape::Boolean).with_default(json!(false)),
            ],
        )
    }

    fn freight() -> ObjectShape {
        ObjectShape::new(
            "Freight",
            vec![Field::required(
                "orders",
                Shape::list(Shape::object(
                    "Order",
                    vec![
                        Field::required("orderWeight", Shape::Float),
                        Field::required("serviceType", Shape::one_of(&["Standard", "Express"])),
                    ],
                )),
            )],
        )
    }

    #[test]
    fn test_missing_required_field_is_named() {
        let violations = inventory().validate(&json!({})).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["productType", "dailyDemand", "priorityLevel"]);
        assert!(violations.iter().all(|v| v.given.is_none()));
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let violations = inventory()
            .validate(&json!({
                "productType": "Widgets",
                "dailyDemand": 4,
                "priorityLevel": "Urgent"
            }))
            .unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "priorityLevel");
        assert_eq!(violations[0].expected, "one of [High, Medium, Low]");
        assert_eq!(violations[0].given, Some(json!("Urgent")));
    }

    #[test]
    fn test_lax_coercion_and_defaults() {
        let normalized = inventory()
            .validate(&json!({
                "productType": "Widgets",
                "dailyDemand": "12",
                "priorityLevel": "Low",
                "unknown": true
            }))
            .unwrap();
        assert_eq!(
            normalized,
            json!({
                "productType": "Widgets",
                "dailyDemand": 12,
                "priorityLevel": "Low",
                "constraints": null,
                "expedite": false
            })
        );
    }

    #[test]
    fn test_integer_rejects_fractional_and_strings_are_strict() {
        let violations = inventory()
            .validate(&json!({
                "productType": 42,
                "dailyDemand": 2.5,
                "priorityLevel": "High"
            }))
            .unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["productType", "dailyDemand"]);
    }

    #[test]
    fn test_nested_paths() {
        let violations = freight()
            .validate(&json!({
                "orders": [
                    { "orderWeight": 10, "serviceType": "Standard" },
                    { "orderWeight": "heavy", "serviceType": "Overnight" }
                ]
            }))
            .unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["orders[1].orderWeight", "orders[1].serviceType"]);
    }

    #[test]
    fn test_required_null_is_a_mismatch() {
        let violations = freight().validate(&json!({ "orders": null })).unwrap_err();
        assert_eq!(violations[0].given, Some(Value::Null));
        assert_eq!(violations[0].to_string(), "orders: expected list of object Order, got null");
    }

    #[test]
    fn test_root_must_be_object() {
        let violations = inventory().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(violations[0].field, "(root)");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let shape = freight();
        let first = shape
            .validate(&json!({ "orders": [{ "orderWeight": "3", "serviceType": "Express" }] }))
            .unwrap();
        let reparsed: Value = serde_json::from_str(&serde_json::to_string(&first).unwrap()).unwrap();
        assert_eq!(shape.validate(&reparsed).unwrap(), first);
    }

    #[test]
    fn test_map_values_are_validated() {
        let shape = ObjectShape::new(
            "Costs",
            vec![Field::required("costs", Shape::map(Shape::Float))],
        );
        assert!(shape.validate(&json!({ "costs": { "Manufacturing": 1000 } })).is_ok());
        let violations = shape.validate(&json!({ "costs": { "Freight": "n/a" } })).unwrap_err();
        assert_eq!(violations[0].field, "costs.Freight");
        assert!(!shape.supports_strict());
    }

    #[test]
    fn test_strict_schema_is_closed() {
        let schema = inventory().strict_json_schema();
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(
            schema["required"],
            json!(["productType", "dailyDemand", "priorityLevel", "constraints", "expedite"])
        );
        assert_eq!(schema["properties"]["constraints"]["anyOf"][1], json!({ "type": "null" }));

        let nested = freight().strict_json_schema();
        assert_eq!(nested["properties"]["orders"]["items"]["additionalProperties"], json!(false));
    }

    #[test]
    fn test_descriptive_schema_lists_only_required() {
        let schema = inventory().json_schema();
        assert_eq!(schema["title"], json!("Inventory"));
        assert_eq!(schema["required"], json!(["productType", "dailyDemand", "priorityLevel"]));
        assert_eq!(schema["properties"]["expedite"]["default"], json!(false));
    }

    #[test]
    fn test_enum_options_include_nested_fields() {
        let options = freight().enum_options();
        assert_eq!(options.get("serviceType"), Some(&vec!["Standard", "Express"]));
        assert_eq!(inventory().enum_options().len(), 1);
    }

    #[test]
    fn test_example_satisfies_shape() {
        for shape in [inventory(), freight()] {
            assert!(shape.validate(&shape.example()).is_ok());
        }
    }
}
