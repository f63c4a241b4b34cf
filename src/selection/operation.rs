use super::tree::SelectionTree;
use crate::ast::OperationKind;
use crate::config::GeneratorConfig;
use crate::error::{Error, ErrorType, Result};
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// The custom operation name new operations start out with.
pub const DEFAULT_CUSTOM_OPERATION_NAME: &str = "GeneratedQuery";

/// Type tokens offered as suggestions when declaring an operation argument.
///
/// Any token following the argument type grammar is accepted; see [`crate::ast::ParseNode`].
pub const DEFAULT_ARGUMENT_TYPES: [&str; 14] = [
    "String", "String!", "Int", "Int!", "Float", "Float!", "Boolean", "Boolean!", "ID", "ID!",
    "[String]", "[Int]", "[Boolean]", "[ID]",
];

/// An argument of a generated operation, declared as a variable and forwarded to the root
/// field under the same name.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct ArgumentDef {
    #[cfg_attr(feature = "json", serde(default))]
    pub name: String,
    /// A type token such as `ID!` or `[String]`. It's only checked when rendering.
    #[cfg_attr(feature = "json", serde(rename = "type", default = "default_type_token"))]
    pub type_token: String,
}

impl ArgumentDef {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, type_token: T) -> Self {
        ArgumentDef {
            name: name.into(),
            type_token: type_token.into(),
        }
    }
}

impl Default for ArgumentDef {
    /// An unnamed `String` argument, which is skipped until it's given a name.
    fn default() -> Self {
        ArgumentDef::new("", default_type_token())
    }
}

fn default_type_token() -> String {
    DEFAULT_ARGUMENT_TYPES[0].to_string()
}

/// A single change to an argument, as applied by [`OperationSpec::update_argument`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ArgumentUpdate {
    Name(String),
    Type(String),
}

/// Everything needed to render one operation: its kind, the names of the outer operation and
/// of the root field it calls, the selected fields and the arguments passed through.
///
/// ```
/// use graphql_scaffold::selection::*;
///
/// let mut spec = OperationSpec::new("user");
/// spec.custom_operation_name = "GetUser".into();
/// spec.arguments_list.push(ArgumentDef::new("id", "ID!"));
/// let id = spec.fields.add_field().unwrap();
/// spec.fields.rename(id, "id").unwrap();
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase", default))]
pub struct OperationSpec {
    pub query_type: OperationKind,
    /// The root field that the operation calls. Operations without one don't render.
    pub operation_name: String,
    /// The name of the outer operation. A blank name renders an anonymous operation.
    pub custom_operation_name: String,
    pub fields: SelectionTree,
    pub arguments_list: Vec<ArgumentDef>,
}

impl OperationSpec {
    /// Creates a query calling `operation_name` with no fields and no arguments.
    pub fn new<N: Into<String>>(operation_name: N) -> Self {
        OperationSpec {
            operation_name: operation_name.into(),
            ..Default::default()
        }
    }

    /// Creates an empty query whose selection tree uses the nesting limit of `config`.
    pub fn with_config(config: &GeneratorConfig) -> Self {
        OperationSpec {
            fields: SelectionTree::with_config(config),
            ..Default::default()
        }
    }

    /// Appends an unnamed `String` argument and returns its index.
    pub fn add_argument(&mut self) -> usize {
        self.arguments_list.push(ArgumentDef::default());
        self.arguments_list.len() - 1
    }

    pub fn update_argument(&mut self, index: usize, update: ArgumentUpdate) -> Result<()> {
        let argument = self
            .arguments_list
            .get_mut(index)
            .ok_or_else(|| missing_argument(index))?;
        match update {
            ArgumentUpdate::Name(name) => argument.name = name,
            ArgumentUpdate::Type(type_token) => argument.type_token = type_token,
        }
        Ok(())
    }

    pub fn remove_argument(&mut self, index: usize) -> Result<ArgumentDef> {
        if index >= self.arguments_list.len() {
            return Err(missing_argument(index));
        }
        Ok(self.arguments_list.remove(index))
    }
}

impl Default for OperationSpec {
    fn default() -> Self {
        OperationSpec {
            query_type: OperationKind::Query,
            operation_name: String::new(),
            custom_operation_name: DEFAULT_CUSTOM_OPERATION_NAME.to_string(),
            fields: SelectionTree::default(),
            arguments_list: Vec::new(),
        }
    }
}

fn missing_argument(index: usize) -> Error {
    Error::new(
        format!("Argument {index} does not exist"),
        ErrorType::InvalidPath,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ASTContext, ParseNode, Type};

    #[test]
    fn suggested_types_parse() {
        let ctx = ASTContext::new();
        for token in DEFAULT_ARGUMENT_TYPES {
            assert!(Type::parse(&ctx, token).is_ok(), "{token} should parse");
        }
    }

    #[test]
    fn edits_arguments() {
        let mut spec = OperationSpec::new("user");
        let index = spec.add_argument();
        assert_eq!(spec.arguments_list[index], ArgumentDef::new("", "String"));
        spec.update_argument(index, ArgumentUpdate::Name("id".into()))
            .unwrap();
        spec.update_argument(index, ArgumentUpdate::Type("ID!".into()))
            .unwrap();
        assert_eq!(spec.arguments_list, vec![ArgumentDef::new("id", "ID!")]);
        assert!(spec
            .update_argument(3, ArgumentUpdate::Name("x".into()))
            .is_err());
        assert_eq!(spec.remove_argument(0).unwrap().name, "id");
        assert_eq!(
            spec.remove_argument(0).unwrap_err().error_type(),
            ErrorType::InvalidPath
        );
    }

    #[test]
    fn takes_limit_from_config() {
        let spec = OperationSpec::with_config(&GeneratorConfig::with_max_depth(3));
        assert_eq!(spec.fields.max_depth(), 3);
        assert_eq!(spec.custom_operation_name, "GeneratedQuery");
        assert_eq!(OperationSpec::default().fields.max_depth(), 5);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_shape() {
        let spec: OperationSpec = serde_json::from_str(
            r#"{
                "queryType": "mutation",
                "operationName": "createPost",
                "fields": [{ "name": "id", "subFields": [] }],
                "argumentsList": [{ "name": "title", "type": "String!" }, { "name": "" }]
            }"#,
        )
        .unwrap();
        assert_eq!(spec.query_type, OperationKind::Mutation);
        assert_eq!(spec.custom_operation_name, "GeneratedQuery");
        assert_eq!(spec.fields.len(), 1);
        assert_eq!(spec.arguments_list[1], ArgumentDef::default());

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["queryType"], "mutation");
        assert_eq!(value["argumentsList"][0]["type"], "String!");
        assert_eq!(value["fields"][0]["subFields"], serde_json::json!([]));
    }
}
