use super::definitions::{capitalize, EntityDef, FieldDef, FieldType, ScalarType};
use crate::error::{Error, ErrorType, Result};
use hashbrown::HashMap;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A single change to a field of an entity, as applied by [`TypeRegistry::update_field`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FieldUpdate {
    Name(String),
    Type(FieldType),
    Required(bool),
    IsArray(bool),
}

/// An ordered list of entity definitions and the editing operations on it.
///
/// The registry is the input of the schema and resolver renderers. Its order is the order in
/// which types and derived operations are rendered. Edits validate their indices before they
/// change anything, so a failed edit always leaves the registry as it was.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct TypeRegistry {
    entities: Vec<EntityDef>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing the starter entity `User { id: ID!, name: String! }`.
    pub fn with_starter_entity() -> Self {
        TypeRegistry {
            entities: vec![EntityDef::new("User")
                .with_field(FieldDef::id())
                .with_field(FieldDef::new("name", ScalarType::String).required())],
        }
    }

    /// Wraps existing entity definitions without normalizing them.
    pub fn from_entities(entities: Vec<EntityDef>) -> Self {
        TypeRegistry { entities }
    }

    #[inline]
    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    #[inline]
    pub fn into_entities(self) -> Vec<EntityDef> {
        self.entities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, index: usize) -> Result<&EntityDef> {
        self.entities.get(index).ok_or_else(|| missing_entity(index))
    }

    fn entity_mut(&mut self, index: usize) -> Result<&mut EntityDef> {
        self.entities
            .get_mut(index)
            .ok_or_else(|| missing_entity(index))
    }

    /// Appends a new entity carrying the protected `id: ID!` field and returns its index.
    pub fn add_entity<N: AsRef<str>>(&mut self, name: N) -> usize {
        let entity = EntityDef::new(name).with_field(FieldDef::id());
        debug!(entity = entity.name.as_str(), "Adding entity");
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Removes the entity at `index` and returns it.
    pub fn remove_entity(&mut self, index: usize) -> Result<EntityDef> {
        if index >= self.entities.len() {
            warn!(index, "Refusing to remove missing entity");
            return Err(missing_entity(index));
        }
        Ok(self.entities.remove(index))
    }

    /// Renames the entity at `index`. The name is trimmed and its first letter upper-cased.
    pub fn rename_entity<N: AsRef<str>>(&mut self, index: usize, name: N) -> Result<()> {
        let entity = self.entity_mut(index)?;
        entity.name = capitalize(name.as_ref());
        debug!(index, entity = entity.name.as_str(), "Renamed entity");
        Ok(())
    }

    /// Appends an empty, optional `String` field to the entity at `entity` and returns the new
    /// field's index.
    pub fn add_field(&mut self, entity: usize) -> Result<usize> {
        let entity = self.entity_mut(entity)?;
        entity.fields.push(FieldDef::new("", ScalarType::String));
        Ok(entity.fields.len() - 1)
    }

    /// Appends a prepared field to the entity at `entity` and returns the new field's index.
    pub fn push_field(&mut self, entity: usize, field: FieldDef) -> Result<usize> {
        let entity = self.entity_mut(entity)?;
        entity.fields.push(field);
        Ok(entity.fields.len() - 1)
    }

    /// Applies a single change to a field.
    pub fn update_field(&mut self, entity: usize, field: usize, update: FieldUpdate) -> Result<()> {
        let def = self
            .entity_mut(entity)?
            .fields
            .get_mut(field)
            .ok_or_else(|| missing_field(entity, field))?;
        match update {
            FieldUpdate::Name(name) => def.name = name,
            FieldUpdate::Type(field_type) => def.field_type = field_type,
            FieldUpdate::Required(required) => def.required = required,
            FieldUpdate::IsArray(is_array) => def.is_array = is_array,
        }
        Ok(())
    }

    /// Removes a field and returns it. The identifier field of an entity can't be removed.
    pub fn remove_field(&mut self, entity: usize, field: usize) -> Result<FieldDef> {
        let fields = &mut self.entity_mut(entity)?.fields;
        let def = fields
            .get(field)
            .ok_or_else(|| missing_field(entity, field))?;
        if def.is_id_field {
            warn!(entity, field, "Refusing to remove identifier field");
            return Err(Error::new(
                format!("Field {field} of entity {entity} is the identifier and can't be removed"),
                ErrorType::ProtectedField,
            ));
        }
        Ok(fields.remove(field))
    }

    /// Returns entity names that occur more than once, in order of their first occurrence.
    ///
    /// Duplicates aren't rejected; they render as repeated type blocks and it's up to the caller
    /// to decide whether to surface them.
    pub fn duplicate_entity_names(&self) -> Vec<&str> {
        duplicates(
            self.entities
                .iter()
                .filter(|entity| entity.is_renderable())
                .map(|entity| entity.name.trim()),
        )
    }

    /// Returns field names that occur more than once on the entity at `entity`.
    pub fn duplicate_field_names(&self, entity: usize) -> Result<Vec<&str>> {
        Ok(duplicates(
            self.entity(entity)?
                .renderable_fields()
                .map(|field| field.name.trim()),
        ))
    }
}

impl From<Vec<EntityDef>> for TypeRegistry {
    fn from(entities: Vec<EntityDef>) -> Self {
        TypeRegistry::from_entities(entities)
    }
}

fn duplicates<'a, I: Iterator<Item = &'a str>>(names: I) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for name in names {
        let count = counts.entry(name).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(name);
        }
    }
    order
}

fn missing_entity(index: usize) -> Error {
    Error::new(
        format!("Entity {index} does not exist"),
        ErrorType::InvalidPath,
    )
}

fn missing_field(entity: usize, field: usize) -> Error {
    Error::new(
        format!("Field {field} of entity {entity} does not exist"),
        ErrorType::InvalidPath,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_entities_with_identifier() {
        let mut registry = TypeRegistry::new();
        let index = registry.add_entity(" post");
        let entity = registry.entity(index).unwrap();
        assert_eq!(entity.name, "Post");
        assert_eq!(entity.fields, vec![FieldDef::id()]);
    }

    #[test]
    fn renames_with_capitalization() {
        let mut registry = TypeRegistry::with_starter_entity();
        registry.rename_entity(0, "account ").unwrap();
        assert_eq!(registry.entities()[0].name, "Account");
        assert_eq!(
            registry.rename_entity(4, "x").unwrap_err().error_type(),
            ErrorType::InvalidPath
        );
    }

    #[test]
    fn edits_fields() {
        let mut registry = TypeRegistry::with_starter_entity();
        let field = registry.add_field(0).unwrap();
        assert_eq!(field, 2);
        registry
            .update_field(0, field, FieldUpdate::Name("tags".into()))
            .unwrap();
        registry
            .update_field(0, field, FieldUpdate::IsArray(true))
            .unwrap();
        registry
            .update_field(0, field, FieldUpdate::Required(true))
            .unwrap();
        registry
            .update_field(0, field, FieldUpdate::Type(FieldType::from("Tag")))
            .unwrap();
        assert_eq!(
            registry.entities()[0].fields[2],
            FieldDef::new("tags", "Tag").list().required()
        );
        assert!(registry
            .update_field(0, 9, FieldUpdate::Required(true))
            .is_err());
    }

    #[test]
    fn refuses_to_remove_identifier() {
        let mut registry = TypeRegistry::with_starter_entity();
        let before = registry.clone();
        let error = registry.remove_field(0, 0).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::ProtectedField);
        assert_eq!(registry, before);

        let removed = registry.remove_field(0, 1).unwrap();
        assert_eq!(removed.name, "name");
        assert_eq!(registry.entities()[0].fields.len(), 1);
        assert_eq!(
            registry.remove_field(0, 1).unwrap_err().error_type(),
            ErrorType::InvalidPath
        );
    }

    #[test]
    fn removes_entities() {
        let mut registry = TypeRegistry::with_starter_entity();
        assert!(registry.remove_entity(1).is_err());
        assert_eq!(registry.remove_entity(0).unwrap().name, "User");
        assert!(registry.is_empty());
    }

    #[test]
    fn reports_duplicates() {
        let mut registry = TypeRegistry::with_starter_entity();
        registry.add_entity("post");
        registry.add_entity("user");
        registry.add_entity("");
        registry.add_entity(" ");
        assert_eq!(registry.duplicate_entity_names(), ["User"]);

        registry
            .push_field(0, FieldDef::new("name", ScalarType::Int))
            .unwrap();
        assert_eq!(registry.duplicate_field_names(0).unwrap(), ["name"]);
        assert!(registry.duplicate_field_names(1).unwrap().is_empty());
    }
}
