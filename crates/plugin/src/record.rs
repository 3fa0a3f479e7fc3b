//! Record and schema model used by example payloads and transformations

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    Bytes,
    Array,
    Map,
    Struct,
}

impl SchemaType {
    /// Lower-case name used in generated file names
    pub fn file_prefix(&self) -> &'static str {
        match self {
            SchemaType::Int8 => "int8",
            SchemaType::Int16 => "int16",
            SchemaType::Int32 => "int32",
            SchemaType::Int64 => "int64",
            SchemaType::Float32 => "float32",
            SchemaType::Float64 => "float64",
            SchemaType::Boolean => "boolean",
            SchemaType::String => "string",
            SchemaType::Bytes => "bytes",
            SchemaType::Array => "array",
            SchemaType::Map => "map",
            SchemaType::Struct => "struct",
        }
    }
}

/// A struct field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

/// Record schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    #[serde(default, rename = "isOptional", alias = "optional")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Box<Schema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_schema: Option<Box<Schema>>,
}

impl Schema {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            name: None,
            doc: None,
            version: None,
            optional: false,
            fields: Vec::new(),
            key_schema: None,
            value_schema: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push(Field {
            name: name.into(),
            schema,
        });
        self
    }

    pub fn map(key: Schema, value: Schema) -> Self {
        let mut schema = Self::new(SchemaType::Map);
        schema.key_schema = Some(Box::new(key));
        schema.value_schema = Some(Box::new(value));
        schema
    }

    pub fn array(value: Schema) -> Self {
        let mut schema = Self::new(SchemaType::Array);
        schema.value_schema = Some(Box::new(value));
        schema
    }

    /// Direct child schemas: struct fields, map key and value, array element
    pub fn children(&self) -> Vec<&Schema> {
        match self.schema_type {
            SchemaType::Struct => self.fields.iter().map(|f| &f.schema).collect(),
            SchemaType::Map => self
                .key_schema
                .iter()
                .chain(self.value_schema.iter())
                .map(|s| &**s)
                .collect(),
            SchemaType::Array => self.value_schema.iter().map(|s| &**s).collect(),
            _ => Vec::new(),
        }
    }

    /// This schema and every schema nested in it, depth first, without
    /// duplicates, in first-seen order.
    pub fn all_schemas(&self) -> Vec<&Schema> {
        let mut seen: Vec<&Schema> = Vec::new();
        let mut stack = vec![self];
        while let Some(schema) = stack.pop() {
            if !seen.contains(&schema) {
                seen.push(schema);
                let mut children = schema.children();
                children.reverse();
                stack.extend(children);
            }
        }
        seen
    }
}

/// Record header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub value: Value,
}

/// A record flowing through a connector or transformation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRecord {
    pub topic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka_partition: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Schema>,

    #[serde(default)]
    pub key: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_schema: Option<Schema>,

    #[serde(default)]
    pub value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_type: Option<String>,

    #[serde(default, alias = "offset", skip_serializing_if = "Option::is_none")]
    pub kafka_offset: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
}

impl ConnectRecord {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            kafka_partition: None,
            key_schema: None,
            key: Value::Null,
            value_schema: None,
            value: Value::Null,
            timestamp: None,
            timestamp_type: None,
            kafka_offset: None,
            headers: Vec::new(),
        }
    }

    pub fn with_key(mut self, schema: Option<Schema>, key: Value) -> Self {
        self.key_schema = schema;
        self.key = key;
        self
    }

    pub fn with_value(mut self, schema: Option<Schema>, value: Value) -> Self {
        self.value_schema = schema;
        self.value = value;
        self
    }

    /// Key and value schemas present on this record
    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.key_schema
            .iter()
            .chain(self.value_schema.iter())
            .chain(self.headers.iter().filter_map(|h| h.schema.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer() -> Schema {
        Schema::new(SchemaType::Struct)
            .named("com.example.Customer")
            .field("name", Schema::new(SchemaType::String))
            .field(
                "tags",
                Schema::array(Schema::new(SchemaType::String)),
            )
            .field(
                "address",
                Schema::new(SchemaType::Struct)
                    .named("com.example.Address")
                    .field("city", Schema::new(SchemaType::String).optional()),
            )
    }

    #[test]
    fn test_all_schemas_walks_nested_types() {
        let schema = customer();
        let all = schema.all_schemas();

        let names: Vec<Option<&str>> = all.iter().map(|s| s.name.as_deref()).collect();
        assert_eq!(names[0], Some("com.example.Customer"));
        assert!(names.contains(&Some("com.example.Address")));
        // STRING (shared), ARRAY, optional STRING, two structs
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_record_deserializes_camel_case() {
        let record: ConnectRecord = serde_json::from_value(json!({
            "topic": "customers",
            "kafkaPartition": 1,
            "valueSchema": {"type": "STRING", "isOptional": true},
            "value": "alice"
        }))
        .unwrap();

        assert_eq!(record.topic, "customers");
        assert_eq!(record.kafka_partition, Some(1));
        assert_eq!(record.key, Value::Null);
        assert!(record.value_schema.as_ref().unwrap().optional);
        assert_eq!(record.schemas().count(), 1);
    }

    #[test]
    fn test_schema_type_names() {
        let value = serde_json::to_value(SchemaType::Float64).unwrap();
        assert_eq!(value, json!("FLOAT64"));
        assert_eq!(SchemaType::Struct.file_prefix(), "struct");
    }
}
