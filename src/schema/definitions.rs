#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// The built-in scalar types a field may have.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    ID,
}

impl ScalarType {
    pub const ALL: [ScalarType; 5] = [
        ScalarType::String,
        ScalarType::Int,
        ScalarType::Float,
        ScalarType::Boolean,
        ScalarType::ID,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
            ScalarType::ID => "ID",
        }
    }

    /// Looks up a scalar by its exact name.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.as_str() == name)
    }
}

/// The type of a field: either a built-in scalar or a reference to another entity by name.
///
/// References aren't checked against the registry. A reference to an entity that doesn't exist
/// still renders, as the registry only ever constructs text.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(from = "String", into = "String"))]
pub enum FieldType {
    Scalar(ScalarType),
    Reference(String),
}

impl FieldType {
    /// Returns the type name as it's written into a schema document.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Scalar(scalar) => scalar.as_str(),
            FieldType::Reference(name) => name.trim(),
        }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldType::Scalar(_))
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Scalar(ScalarType::String)
    }
}

impl From<ScalarType> for FieldType {
    #[inline]
    fn from(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }
}

impl From<&str> for FieldType {
    #[inline]
    fn from(name: &str) -> Self {
        let name = name.trim();
        match ScalarType::from_name(name) {
            Some(scalar) => FieldType::Scalar(scalar),
            None => FieldType::Reference(name.to_string()),
        }
    }
}

impl From<String> for FieldType {
    #[inline]
    fn from(name: String) -> Self {
        FieldType::from(name.as_str())
    }
}

impl From<FieldType> for String {
    #[inline]
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl FromStr for FieldType {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(FieldType::from(name))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of an entity.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct FieldDef {
    pub name: String,
    #[cfg_attr(feature = "json", serde(rename = "type", default))]
    pub field_type: FieldType,
    #[cfg_attr(feature = "json", serde(default))]
    pub required: bool,
    #[cfg_attr(feature = "json", serde(default))]
    pub is_array: bool,
    /// Marks the entity's identifier. The identifier is passed as an explicit `id: ID!`
    /// argument to derived operations and can't be removed through the registry.
    #[cfg_attr(feature = "json", serde(default))]
    pub is_id_field: bool,
}

impl FieldDef {
    /// Creates an optional, non-list field.
    pub fn new<N: Into<String>, T: Into<FieldType>>(name: N, field_type: T) -> Self {
        FieldDef {
            name: name.into(),
            field_type: field_type.into(),
            ..Default::default()
        }
    }

    /// Creates the protected `id: ID!` identifier field.
    pub fn id() -> Self {
        FieldDef {
            name: "id".to_string(),
            field_type: ScalarType::ID.into(),
            required: true,
            is_array: false,
            is_id_field: true,
        }
    }

    /// Marks this field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks this field as a list of its type.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Fields with blank names are skipped when rendering.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A named entity, rendered as an object type with derived query and mutation fields.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct EntityDef {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Creates an entity without fields. The name is trimmed and capitalized.
    pub fn new<N: AsRef<str>>(name: N) -> Self {
        EntityDef {
            name: capitalize(name.as_ref()),
            fields: Vec::new(),
        }
    }

    /// Appends a field to this entity.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Entities with blank names are skipped when rendering.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Returns the fields that are rendered into this entity's object type.
    pub fn renderable_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.is_renderable())
    }

    /// Returns the fields that are accepted as arguments by the derived `create` and `update`
    /// mutations, which is every renderable field except the identifier.
    pub fn mutation_arguments(&self) -> impl Iterator<Item = &FieldDef> {
        self.renderable_fields().filter(|field| !field.is_id_field)
    }

    /// Returns the identifier field, if any was marked.
    pub fn id_field(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.is_id_field)
    }
}

/// Trims a name and upper-cases its first letter, as type names are conventionally written.
pub fn capitalize(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_names() {
        assert_eq!(capitalize("  user "), "User");
        assert_eq!(capitalize("User"), "User");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("   "), "");
        assert_eq!(EntityDef::new("post").name, "Post");
    }

    #[test]
    fn field_types() {
        assert_eq!(FieldType::from("Int"), FieldType::Scalar(ScalarType::Int));
        assert_eq!(FieldType::from(" ID "), FieldType::Scalar(ScalarType::ID));
        assert_eq!(
            FieldType::from("Post"),
            FieldType::Reference("Post".to_string())
        );
        assert_eq!(FieldType::from("int").to_string(), "int");
        assert!(!FieldType::from("int").is_scalar());
    }

    #[test]
    fn mutation_arguments_skip_identifier() {
        let entity = EntityDef::new("User")
            .with_field(FieldDef::id())
            .with_field(FieldDef::new("name", ScalarType::String).required())
            .with_field(FieldDef::new(" ", ScalarType::Int));
        let names: Vec<&str> = entity
            .mutation_arguments()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(names, ["name"]);
        assert_eq!(entity.renderable_fields().count(), 2);
        assert_eq!(entity.id_field().map(|field| field.name.as_str()), Some("id"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_shape() {
        let field: FieldDef = serde_json::from_str(
            r#"{ "name": "tags", "type": "String", "isArray": true, "required": true }"#,
        )
        .unwrap();
        assert_eq!(field, FieldDef::new("tags", ScalarType::String).list().required());

        let value = serde_json::to_value(FieldDef::id()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "id",
                "type": "ID",
                "required": true,
                "isArray": false,
                "isIdField": true
            })
        );
    }
}
