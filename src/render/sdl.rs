use crate::ast::*;
use crate::schema::{EntityDef, FieldDef};
use tracing::debug;

/// Renders entity definitions into a schema document.
///
/// The document contains one object type per entity, followed by a `Query` type with a
/// `get<Name>(id: ID!)` field per entity and a `Mutation` type with `create<Name>`,
/// `update<Name>` and `delete<Name>` fields per entity. Entities and fields with blank names are
/// skipped. When no entity is left to render, the empty string is returned.
pub fn render_sdl(entities: &[EntityDef]) -> String {
    let ctx = ASTContext::new();
    let document = lower_schema(&ctx, entities);
    if document.is_empty() {
        debug!(entities = entities.len(), "No renderable entities, schema is empty");
        return String::new();
    }
    document.print()
}

/// Lowers entity definitions into a [SchemaDocument] allocated on the given context.
pub(crate) fn lower_schema<'a>(ctx: &'a ASTContext, entities: &[EntityDef]) -> SchemaDocument<'a> {
    let mut document = SchemaDocument::default_in(&ctx.arena);
    let entities: Vec<&EntityDef> = entities
        .iter()
        .filter(|entity| entity.is_renderable())
        .collect();
    if entities.is_empty() {
        return document;
    }

    let mut query = ObjectTypeDefinition::new(ctx, "Query");
    let mut mutation = ObjectTypeDefinition::new(ctx, "Mutation");
    for entity in entities.iter() {
        let name = ctx.alloc_str(entity.name.trim());
        let mut object = ObjectTypeDefinition::new(ctx, name);
        for field in entity.renderable_fields() {
            object.fields.push(FieldDefinition::new(
                ctx,
                ctx.alloc_str(field.name.trim()),
                field_type(ctx, field),
            ));
        }
        document.size_hint += 16 + name.len() + object.fields.len() * 24;
        document.definitions.push(object);

        let mut get = FieldDefinition::new(ctx, prefixed(ctx, "get", name), Type::from(name));
        get.arguments.children.push(id_argument(ctx));
        query.fields.push(get);

        let mut create = FieldDefinition::new(ctx, prefixed(ctx, "create", name), Type::from(name));
        let mut update = FieldDefinition::new(ctx, prefixed(ctx, "update", name), Type::from(name));
        update.arguments.children.push(id_argument(ctx));
        for field in entity.mutation_arguments() {
            let argument = InputValueDefinition {
                name: ctx.alloc_str(field.name.trim()),
                of_type: field_type(ctx, field),
            };
            create.arguments.children.push(argument.clone());
            update.arguments.children.push(argument);
        }
        let mut delete =
            FieldDefinition::new(ctx, prefixed(ctx, "delete", name), Type::from("Boolean"));
        delete.arguments.children.push(id_argument(ctx));
        mutation.fields.push(create);
        mutation.fields.push(update);
        mutation.fields.push(delete);
        document.size_hint += 160 + name.len() * 5 + entity.fields.len() * 48;
    }

    document.definitions.push(query);
    document.definitions.push(mutation);
    document
}

/// The printed type of a field: a list if it's an array, then non-null if it's required.
#[inline]
pub(crate) fn field_type<'a>(ctx: &'a ASTContext, field: &FieldDef) -> Type<'a> {
    Type::with_modifiers(
        ctx,
        ctx.alloc_str(field.field_type.as_str()),
        field.is_array,
        field.required,
    )
}

#[inline]
fn id_argument<'a>(ctx: &'a ASTContext) -> InputValueDefinition<'a> {
    InputValueDefinition {
        name: "id",
        of_type: Type::from("ID").into_nonnull(ctx),
    }
}

#[inline]
fn prefixed<'a>(ctx: &'a ASTContext, prefix: &str, name: &str) -> &'a str {
    ctx.alloc_str(&format!("{prefix}{name}"))
}
