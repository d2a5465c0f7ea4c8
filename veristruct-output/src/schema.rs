//! Target schema descriptions.
//!
//! An [`ObjectSchema`] is a declarative description of the shape a model
//! reply should take: ordered fields with names and type names. It is used
//! both to render the example-shape hint injected into prompts and to build
//! the JSON-schema constraint for backends with native structured output.

use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};

/// One field of a target schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in the JSON object.
    pub name: String,
    /// Human-readable type name, rendered into the prompt hint.
    pub type_name: String,
}

impl FieldSpec {
    /// Create a field with an explicit type name.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// A string field.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, "str")
    }

    /// A boolean field.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, "bool")
    }

    /// An integer field.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, "int")
    }

    /// A float field.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, "float")
    }

    /// A list-of-strings field.
    #[must_use]
    pub fn string_list(name: impl Into<String>) -> Self {
        Self::new(name, "list[str]")
    }

    fn json_type(&self) -> JsonValue {
        match self.type_name.as_str() {
            "str" => json!({"type": "string"}),
            "bool" => json!({"type": "boolean"}),
            "int" => json!({"type": "integer"}),
            "float" => json!({"type": "number"}),
            "list[str]" => json!({"type": "array", "items": {"type": "string"}}),
            _ => json!({}),
        }
    }
}

/// A declarative object shape: ordered named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// The schema fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the flat example-shape hint used in prompts.
    ///
    /// For fields `claims: list[str]` and `no_claims: bool` this renders
    /// `{"claims": <list[str]>, "no_claims": <bool>}`.
    #[must_use]
    pub fn shape_hint(&self) -> String {
        let rendered: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("\"{}\": <{}>", f.name, f.type_name))
            .collect();
        format!("{{{}}}", rendered.join(", "))
    }

    /// Render as a JSON schema object for native structured output.
    #[must_use]
    pub fn to_json_schema(&self) -> JsonValue {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for field in &self.fields {
            properties.insert(field.name.clone(), field.json_type());
            required.push(JsonValue::String(field.name.clone()));
        }
        json!({
            "type": "object",
            "properties": JsonValue::Object(properties),
            "required": JsonValue::Array(required),
            "additionalProperties": false,
        })
    }
}

/// A type that models can be asked to produce.
///
/// Implementors supply an [`ObjectSchema`] describing their JSON shape.
/// The `Default` impl is the schema-defaults fallback used when a reply is
/// unparsable, and fields should carry `#[serde(default)]` so keys absent
/// from an otherwise valid reply fall back per-field.
pub trait StructuredOutput: DeserializeOwned + Default + Send + Sync {
    /// The declarative shape of this type.
    fn object_schema() -> ObjectSchema;
}
