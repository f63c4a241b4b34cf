use super::sdl::render_sdl;
use crate::config::GeneratorConfig;
use crate::schema::EntityDef;
use hashbrown::HashSet;
use std::fmt::{self, Write};
use tracing::debug;

/// Renders the source of a minimal Apollo server on Express that serves the schema of a list of
/// entities.
///
/// Every entity gets a `get<Name>` query resolver and `create<Name>`, `update<Name>` and
/// `delete<Name>` mutation resolvers. The resolvers don't persist anything: they echo the
/// arguments they receive, and deletions always report success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverRenderer {
    server_port: u16,
}

impl ResolverRenderer {
    pub fn new(config: &GeneratorConfig) -> Self {
        ResolverRenderer {
            server_port: config.server_port,
        }
    }

    /// Renders the server source, or the empty string if no entity has a name.
    pub fn render(&self, entities: &[EntityDef]) -> String {
        let type_defs = render_sdl(entities);
        if type_defs.is_empty() {
            debug!("No renderable entities, server scaffold is empty");
            return String::new();
        }
        let mut buf = String::with_capacity(type_defs.len() * 3 + 1024);
        match self.write_to_buffer(entities, &type_defs, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }

    fn write_to_buffer(
        &self,
        entities: &[EntityDef],
        type_defs: &str,
        buffer: &mut dyn Write,
    ) -> fmt::Result {
        buffer.write_str(concat!(
            "const express = require('express');\n",
            "const { ApolloServer, gql } = require('apollo-server-express');\n",
            "const cors = require('cors');\n",
            "\n",
            "const app = express();\n",
            "app.use(cors());\n",
            "\n",
            "const typeDefs = gql`\n",
        ))?;
        write_template_literal(type_defs, buffer)?;
        buffer.write_str("\n`;\n\nconst resolvers = {\n  Query: {\n")?;

        let entities: Vec<&EntityDef> = entities
            .iter()
            .filter(|entity| entity.is_renderable())
            .collect();
        for entity in entities.iter() {
            let name = entity.name.trim();
            write_resolver(
                buffer,
                &format!("get{name}"),
                "id",
                &format!("Logic to get {name} by id"),
                "{ id }",
            )?;
        }
        buffer.write_str("  },\n  Mutation: {\n")?;
        for entity in entities.iter() {
            let name = entity.name.trim();
            let arguments: Vec<&str> = entity
                .mutation_arguments()
                .map(|field| field.name.trim())
                .collect();
            let created = parameter_list(arguments.iter().copied());
            let updated = parameter_list(std::iter::once("id").chain(arguments.iter().copied()));
            write_resolver(
                buffer,
                &format!("create{name}"),
                &created,
                &format!("Logic to create {name}"),
                &destructured(&created),
            )?;
            write_resolver(
                buffer,
                &format!("update{name}"),
                &updated,
                &format!("Logic to update {name}"),
                &destructured(&updated),
            )?;
            write_resolver(
                buffer,
                &format!("delete{name}"),
                "id",
                &format!("Logic to delete {name} by id"),
                "true",
            )?;
        }
        buffer.write_str("  },\n};\n\n")?;

        buffer.write_str(concat!(
            "const server = new ApolloServer({ typeDefs, resolvers });\n",
            "\n",
            "async function start() {\n",
            "  await server.start();\n",
            "  server.applyMiddleware({ app });\n",
        ))?;
        writeln!(buffer, "  app.listen({}, () => {{", self.server_port)?;
        writeln!(
            buffer,
            "    console.log('Server running at http://localhost:{}' + server.graphqlPath);",
            self.server_port
        )?;
        buffer.write_str("  });\n}\n\nstart();\n")
    }
}

impl Default for ResolverRenderer {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

/// Renders the server source for the given entities using the port of `config`.
pub fn render_resolvers(entities: &[EntityDef], config: &GeneratorConfig) -> String {
    ResolverRenderer::new(config).render(entities)
}

fn write_resolver(
    buffer: &mut dyn Write,
    name: &str,
    arguments: &str,
    comment: &str,
    returns: &str,
) -> fmt::Result {
    writeln!(buffer, "    {name}: (_, {}) => {{", destructured(arguments))?;
    writeln!(buffer, "      // {comment}")?;
    writeln!(buffer, "      return {returns};")?;
    buffer.write_str("    },\n")
}

/// Joins parameter names, keeping only the first occurrence of each, since a destructuring
/// pattern can't bind a name twice.
fn parameter_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    names
        .filter(|name| seen.insert(*name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[inline]
fn destructured(arguments: &str) -> String {
    if arguments.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {arguments} }}")
    }
}

/// Writes text into a JavaScript template literal, escaping what would end it or interpolate.
fn write_template_literal(text: &str, buffer: &mut dyn Write) -> fmt::Result {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => buffer.write_str("\\\\")?,
            '`' => buffer.write_str("\\`")?,
            '$' if chars.peek() == Some(&'{') => buffer.write_str("\\$")?,
            c => buffer.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, ScalarType};

    fn escaped(text: &str) -> String {
        let mut buf = String::new();
        write_template_literal(text, &mut buf).unwrap();
        buf
    }

    #[test]
    fn escapes_template_literals() {
        assert_eq!(escaped("type A {\n}"), "type A {\n}");
        assert_eq!(escaped("a`b"), "a\\`b");
        assert_eq!(escaped("${x} $y"), "\\${x} $y");
        assert_eq!(escaped("a\\b"), "a\\\\b");
    }

    #[test]
    fn destructures_names() {
        assert_eq!(destructured(""), "{}");
        assert_eq!(destructured("id, name"), "{ id, name }");
    }

    #[test]
    fn binds_each_parameter_once() {
        assert_eq!(parameter_list(["id", "name", "id", "name"].into_iter()), "id, name");
        assert_eq!(parameter_list(std::iter::empty()), "");

        let entity = EntityDef::new("Note")
            .with_field(FieldDef::id())
            .with_field(FieldDef::new("id", ScalarType::String))
            .with_field(FieldDef::new("body", ScalarType::String))
            .with_field(FieldDef::new(" body ", ScalarType::Int));
        let source = render_resolvers(&[entity], &GeneratorConfig::default());
        assert!(source.contains("    createNote: (_, { id, body }) => {\n"));
        assert!(source.contains("      return { id, body };\n"));
        assert!(source.contains("    updateNote: (_, { id, body }) => {\n"));
        assert!(!source.contains("id, id"));
        assert!(!source.contains("body, body"));
    }

    #[test]
    fn uses_configured_port() {
        let config = GeneratorConfig {
            server_port: 8080,
            ..Default::default()
        };
        let source = render_resolvers(&[EntityDef::new("User")], &config);
        assert!(source.contains("  app.listen(8080, () => {\n"));
        assert!(source.contains("http://localhost:8080"));
        assert_eq!(render_resolvers(&[], &config), "");
    }
}
