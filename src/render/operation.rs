use crate::ast::*;
use crate::error::Error;
use crate::selection::{NodeRef, OperationSpec, SelectionTree};
use tracing::debug;

/// The outcome of checking one argument of an [OperationSpec] before it's rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentVerdict<'a> {
    /// The argument is declared as a variable and passed to the root field.
    Kept { name: &'a str, of_type: &'a Type<'a> },
    /// The argument is skipped since its name is blank.
    BlankName { index: usize },
    /// The argument is skipped since its type token is malformed.
    MalformedType {
        index: usize,
        name: &'a str,
        error: Error,
    },
}

impl<'a> ArgumentVerdict<'a> {
    #[inline]
    pub fn is_kept(&self) -> bool {
        matches!(self, ArgumentVerdict::Kept { .. })
    }
}

/// Renders an [OperationSpec] into an executable document.
///
/// The rendered operation always has the same two-level shape: an outer operation named after
/// `custom_operation_name` that declares the arguments as variables, wrapping a single call of
/// the root field `operation_name` that receives every variable under its own name and selects
/// the spec's fields.
///
/// ```
/// use graphql_scaffold::render::OperationRenderer;
/// use graphql_scaffold::selection::*;
///
/// let mut spec = OperationSpec::new("user");
/// spec.custom_operation_name = "GetUser".into();
/// spec.arguments_list.push(ArgumentDef::new("id", "ID!"));
/// let id = spec.fields.add_field().unwrap();
/// spec.fields.rename(id, "name").unwrap();
///
/// assert_eq!(
///     OperationRenderer::new().render(&spec),
///     "query GetUser($id: ID!) {\n  user(id: $id) {\n    name\n  }\n}"
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationRenderer;

impl OperationRenderer {
    pub fn new() -> Self {
        OperationRenderer
    }

    /// Checks every argument of the spec, in order. Kept arguments carry their parsed type,
    /// allocated on the given context.
    pub fn check_arguments<'a>(
        &self,
        ctx: &'a ASTContext,
        spec: &'a OperationSpec,
    ) -> Vec<ArgumentVerdict<'a>> {
        spec.arguments_list
            .iter()
            .enumerate()
            .map(|(index, argument)| {
                let name = argument.name.trim();
                if name.is_empty() {
                    return ArgumentVerdict::BlankName { index };
                }
                match Type::parse(ctx, &argument.type_token) {
                    Ok(of_type) => ArgumentVerdict::Kept { name, of_type },
                    Err(error) => ArgumentVerdict::MalformedType { index, name, error },
                }
            })
            .collect()
    }

    /// Lowers the spec into an [OperationDefinition] allocated on the given context.
    ///
    /// Returns `None` when the spec has no root field name or no field with a non-blank name.
    pub fn lower<'a>(
        &self,
        ctx: &'a ASTContext,
        spec: &'a OperationSpec,
    ) -> Option<OperationDefinition<'a>> {
        let operation_name = spec.operation_name.trim();
        if operation_name.is_empty() {
            debug!("Operation has no name, nothing to render");
            return None;
        }

        let fields = lower_selections(ctx, &spec.fields);
        if fields.is_empty() {
            debug!(
                operation = operation_name,
                "Operation selects no named fields, nothing to render"
            );
            return None;
        }

        let mut variable_definitions = VariableDefinitions::default_in(&ctx.arena);
        let mut arguments = Arguments::default_in(&ctx.arena);
        for verdict in self.check_arguments(ctx, spec) {
            match verdict {
                ArgumentVerdict::Kept { name, of_type } => {
                    variable_definitions.children.push(VariableDefinition {
                        variable: Variable::from(name),
                        of_type: *of_type,
                    });
                    arguments.children.push(Argument {
                        name,
                        value: Variable::from(name),
                    });
                }
                ArgumentVerdict::BlankName { index } => {
                    debug!(index, "Dropping argument without a name");
                }
                ArgumentVerdict::MalformedType { index, name, error } => {
                    debug!(
                        index,
                        argument = name,
                        error = error.message(),
                        "Dropping argument with malformed type"
                    );
                }
            }
        }

        let mut root = Field::new_leaf(ctx, operation_name);
        root.arguments = arguments;
        root.selection_set = fields;
        let mut selection_set = SelectionSet::default_in(&ctx.arena);
        selection_set.selections.push(root);

        let custom_name = spec.custom_operation_name.trim();
        Some(OperationDefinition {
            operation: spec.query_type,
            name: (!custom_name.is_empty()).then(|| NamedType::from(custom_name)),
            variable_definitions,
            selection_set,
        })
    }

    /// Renders the spec, or returns the empty string when [`OperationRenderer::lower`] finds
    /// nothing to render.
    pub fn render(&self, spec: &OperationSpec) -> String {
        let ctx = ASTContext::new();
        let operation = self.lower(&ctx, spec);
        match operation {
            Some(operation) => operation.print(),
            None => String::new(),
        }
    }
}

/// Renders an [OperationSpec] using a default [OperationRenderer].
pub fn render_operation(spec: &OperationSpec) -> String {
    OperationRenderer::new().render(spec)
}

fn lower_selections<'a>(ctx: &'a ASTContext, tree: &'a SelectionTree) -> SelectionSet<'a> {
    let mut selection_set = SelectionSet::default_in(&ctx.arena);
    for node in tree.roots() {
        if let Some(field) = lower_node(ctx, node) {
            selection_set.selections.push(field);
        }
    }
    selection_set
}

/// Lowers a node with a non-blank name. Nodes with blank names are dropped together with
/// everything below them.
fn lower_node<'a>(ctx: &'a ASTContext, node: NodeRef<'a>) -> Option<Field<'a>> {
    let name = node.name().trim();
    if name.is_empty() {
        return None;
    }
    let mut field = Field::new_leaf(ctx, name);
    for child in node.children() {
        if let Some(child) = lower_node(ctx, child) {
            field.selection_set.selections.push(child);
        }
    }
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;
    use crate::selection::ArgumentDef;

    fn spec_with_field(name: &str) -> OperationSpec {
        let mut spec = OperationSpec::new("user");
        let id = spec.fields.add_field().unwrap();
        spec.fields.rename(id, name).unwrap();
        spec
    }

    #[test]
    fn checks_arguments() {
        let mut spec = spec_with_field("id");
        spec.arguments_list = vec![
            ArgumentDef::new(" id ", " ID! "),
            ArgumentDef::new("  ", "Int"),
            ArgumentDef::new("tags", "[[String]]"),
            ArgumentDef::new("first", "[Int!]!"),
        ];
        let ctx = ASTContext::new();
        let verdicts = OperationRenderer::new().check_arguments(&ctx, &spec);
        assert_eq!(verdicts.len(), 4);
        match &verdicts[0] {
            ArgumentVerdict::Kept { name, of_type } => {
                assert_eq!(*name, "id");
                assert_eq!(of_type.print(), "ID!");
            }
            other => panic!("unexpected verdict {other:?}"),
        }
        assert_eq!(verdicts[1], ArgumentVerdict::BlankName { index: 1 });
        match &verdicts[2] {
            ArgumentVerdict::MalformedType { index, name, error } => {
                assert_eq!(*index, 2);
                assert_eq!(*name, "tags");
                assert_eq!(error.error_type(), ErrorType::MalformedArgumentType);
            }
            other => panic!("unexpected verdict {other:?}"),
        }
        assert!(verdicts[3].is_kept());
    }

    #[test]
    fn lowers_two_level_shape() {
        let spec = spec_with_field("id");
        let ctx = ASTContext::new();
        let operation = OperationRenderer::new().lower(&ctx, &spec).unwrap();
        assert_eq!(operation.name, Some(NamedType::from("GeneratedQuery")));
        assert_eq!(operation.selection_set.selections.len(), 1);
        let root = &operation.selection_set.selections[0];
        assert_eq!(root.name, "user");
        assert_eq!(root.selection_set.selections[0].name, "id");
    }

    #[test]
    fn nothing_to_lower() {
        let ctx = ASTContext::new();
        let renderer = OperationRenderer::new();

        let mut spec = spec_with_field("id");
        spec.operation_name = "  ".into();
        assert!(renderer.lower(&ctx, &spec).is_none());

        let spec = spec_with_field(" ");
        assert!(renderer.lower(&ctx, &spec).is_none());
        assert_eq!(renderer.render(&spec), "");
    }
}
