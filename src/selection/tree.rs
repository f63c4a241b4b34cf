use super::path::FieldPath;
use crate::config::{GeneratorConfig, DEFAULT_MAX_DEPTH};
use crate::error::{Error, ErrorType, Result};
use hashbrown::HashMap;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A stable identifier of a node in a [SelectionTree].
///
/// Ids stay valid across edits of other nodes and are never reused within one tree, so an id of
/// a removed node simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The nested, owned form of a selection node, as it's persisted and exchanged.
///
/// `depth` is informational. When a tree is built from nodes, depths are derived from the
/// nesting and the stored values are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct SelectionNode {
    #[cfg_attr(feature = "json", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub sub_fields: Vec<SelectionNode>,
    #[cfg_attr(feature = "json", serde(default))]
    pub depth: usize,
}

impl SelectionNode {
    pub fn new<N: Into<String>>(name: N) -> Self {
        SelectionNode {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends a sub-field, fixing up its depth and the depths below it.
    #[must_use]
    pub fn with_sub_field(mut self, mut node: SelectionNode) -> Self {
        node.set_depth(self.depth + 1);
        self.sub_fields.push(node);
        self
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        for sub_field in self.sub_fields.iter_mut() {
            sub_field.set_depth(depth + 1);
        }
    }
}

/// A path-addressed edit of a [SelectionTree], as applied by [`SelectionTree::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEdit {
    /// Appends an empty top-level field.
    AddField,
    /// Renames the node at the path.
    Rename { path: FieldPath, name: String },
    /// Appends an empty sub-field to the node at the path.
    AddSubField { path: FieldPath },
    /// Appends an empty node next to the node at the path, at the same depth.
    AddSibling { path: FieldPath },
    /// Removes the node at the path together with its sub-fields.
    Remove { path: FieldPath },
}

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    depth: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A forest of selection nodes with a bounded nesting depth.
///
/// Nodes live in an arena keyed by [NodeId] and refer to each other by id: each node knows its
/// parent and the ordered ids of its sub-fields, while the tree keeps the ordered list of
/// top-level fields. Removing a node frees its storage, while ids keep counting up so that they're
/// never reused. Nodes can be addressed either by id or by [FieldPath].
///
/// Every edit validates before it changes anything, so a failed edit leaves the tree untouched.
/// [`SelectionTree::apply`] additionally leaves `self` untouched on success and returns the
/// edited copy instead, so older snapshots held by a caller stay valid.
///
/// A node's depth is the number of its ancestors. Nodes may only exist at depths strictly below
/// [`SelectionTree::max_depth`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "json",
    serde(into = "Vec<SelectionNode>", try_from = "Vec<SelectionNode>")
)]
pub struct SelectionTree {
    slots: HashMap<NodeId, Slot>,
    roots: Vec<NodeId>,
    next_id: usize,
    max_depth: usize,
}

/// A borrowed view of a node in a [SelectionTree].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SelectionTree,
    id: NodeId,
    slot: &'t Slot,
}

impl<'t> NodeRef<'t> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'t str {
        let slot: &'t Slot = self.slot;
        &slot.name
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.slot.depth
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.slot.parent
    }

    /// Iterates the sub-fields of this node in order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let (tree, slot): (&'t SelectionTree, &'t Slot) = (self.tree, self.slot);
        slot.children.iter().filter_map(move |id| tree.get(*id))
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.slot.children.is_empty()
    }

    /// Converts this node and everything below it into the nested form.
    pub fn to_node(&self) -> SelectionNode {
        SelectionNode {
            name: self.slot.name.clone(),
            sub_fields: self.children().map(|child| child.to_node()).collect(),
            depth: self.slot.depth,
        }
    }
}

impl<'t> fmt::Debug for NodeRef<'t> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.slot.name)
            .field("depth", &self.slot.depth)
            .finish()
    }
}

impl SelectionTree {
    /// Creates an empty forest with the given nesting limit.
    pub fn new(max_depth: usize) -> Self {
        SelectionTree {
            slots: HashMap::new(),
            roots: Vec::new(),
            next_id: 0,
            max_depth,
        }
    }

    /// Creates an empty forest with the nesting limit of `config`.
    pub fn with_config(config: &GeneratorConfig) -> Self {
        Self::new(config.max_depth)
    }

    /// Builds a forest from nested nodes.
    ///
    /// Fails with [`ErrorType::StructuralLimitExceeded`] when any node would be nested at or
    /// beyond `max_depth`.
    pub fn from_nodes(nodes: &[SelectionNode], max_depth: usize) -> Result<Self> {
        let mut tree = Self::new(max_depth);
        let mut stack: Vec<(Option<NodeId>, &SelectionNode)> =
            nodes.iter().rev().map(|node| (None, node)).collect();
        while let Some((parent, node)) = stack.pop() {
            let depth = match parent {
                Some(parent) => tree.slot(parent)?.depth + 1,
                None => 0,
            };
            if depth >= max_depth {
                return Err(depth_exceeded(max_depth, depth));
            }
            let id = tree.insert(node.name.clone(), depth, parent);
            stack.extend(node.sub_fields.iter().rev().map(|child| (Some(id), child)));
        }
        Ok(tree)
    }

    /// Converts the forest into its nested form.
    pub fn to_nodes(&self) -> Vec<SelectionNode> {
        self.roots().map(|root| root.to_node()).collect()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The number of nodes in the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterates the top-level fields in order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().filter_map(move |id| self.get(*id))
    }

    /// Returns a view of the node with the given id, if it still exists.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        let slot = self.slots.get(&id)?;
        Some(NodeRef {
            tree: self,
            id,
            slot,
        })
    }

    /// Resolves a path to the id of the node it addresses.
    pub fn resolve(&self, path: &FieldPath) -> Result<NodeId> {
        let (first, rest) = path
            .indices
            .split_first()
            .ok_or_else(|| Error::new("Paths must not be empty", ErrorType::InvalidPath))?;
        let mut id = *self
            .roots
            .get(*first)
            .ok_or_else(|| missing_path(path))?;
        for index in rest {
            id = *self
                .slot(id)?
                .children
                .get(*index)
                .ok_or_else(|| missing_path(path))?;
        }
        Ok(id)
    }

    /// Computes the current path of the node with the given id.
    pub fn path_of(&self, id: NodeId) -> Result<FieldPath> {
        let mut indices = Vec::new();
        let mut current = id;
        loop {
            let slot = self.slot(current)?;
            let siblings = self.siblings(slot.parent)?;
            let index = siblings
                .iter()
                .position(|sibling| *sibling == current)
                .ok_or_else(|| missing_node(current))?;
            indices.push(index);
            match slot.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        indices.reverse();
        Ok(FieldPath::new(indices))
    }

    /// Appends an empty top-level field and returns its id.
    pub fn add_field(&mut self) -> Result<NodeId> {
        if self.max_depth == 0 {
            warn!(max_depth = self.max_depth, "Refusing to add field beyond max depth");
            return Err(depth_exceeded(self.max_depth, 0));
        }
        let id = self.insert(String::new(), 0, None);
        debug!(node = %id, "Added top-level field");
        Ok(id)
    }

    /// Renames the node with the given id.
    pub fn rename<N: Into<String>>(&mut self, id: NodeId, name: N) -> Result<()> {
        self.slot_mut(id)?.name = name.into();
        Ok(())
    }

    /// Appends an empty sub-field to the node with the given id and returns the new node's id.
    ///
    /// Fails with [`ErrorType::StructuralLimitExceeded`] when the sub-field would be nested at or
    /// beyond the maximum depth.
    pub fn add_sub_field_to(&mut self, id: NodeId) -> Result<NodeId> {
        let depth = self.slot(id)?.depth + 1;
        if depth >= self.max_depth {
            warn!(
                node = %id,
                depth,
                max_depth = self.max_depth,
                "Refusing to add sub-field beyond max depth"
            );
            return Err(depth_exceeded(self.max_depth, depth));
        }
        let child = self.insert(String::new(), depth, Some(id));
        debug!(node = %child, parent = %id, depth, "Added sub-field");
        Ok(child)
    }

    /// Appends an empty node to the sub-fields of the given node's parent, or to the top-level
    /// fields, at the same depth as the given node. Returns the new node's id.
    ///
    /// The guard is the same as for [`SelectionTree::add_sub_field_to`]: siblings of nodes at the
    /// deepest allowed level are rejected with [`ErrorType::StructuralLimitExceeded`].
    pub fn add_sibling_of(&mut self, id: NodeId) -> Result<NodeId> {
        let slot = self.slot(id)?;
        let (depth, parent) = (slot.depth, slot.parent);
        if depth + 1 >= self.max_depth {
            warn!(
                node = %id,
                depth,
                max_depth = self.max_depth,
                "Refusing to add sibling at max depth"
            );
            return Err(depth_exceeded(self.max_depth, depth + 1));
        }
        let sibling = self.insert(String::new(), depth, parent);
        debug!(node = %sibling, sibling_of = %id, depth, "Added sibling");
        Ok(sibling)
    }

    /// Removes the node with the given id and all nodes below it, returning them in their
    /// nested form.
    pub fn remove(&mut self, id: NodeId) -> Result<SelectionNode> {
        let removed = self
            .get(id)
            .map(|node| node.to_node())
            .ok_or_else(|| missing_node(id))?;
        let parent = self.slot(id)?.parent;
        self.siblings_mut(parent)?.retain(|sibling| *sibling != id);

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(slot) = self.slots.remove(&current) {
                stack.extend(slot.children);
            }
        }
        debug!(node = %id, "Removed node");
        Ok(removed)
    }

    /// Renames the node at `path`.
    pub fn update_name<N: Into<String>>(&mut self, path: &FieldPath, name: N) -> Result<()> {
        let id = self.resolve(path)?;
        self.rename(id, name)
    }

    /// Appends an empty sub-field to the node at `path`. The new node's depth equals the length
    /// of `path`, so this fails when `path` is at least `max_depth` indices long.
    pub fn add_sub_field(&mut self, path: &FieldPath) -> Result<NodeId> {
        let id = self.resolve(path)?;
        self.add_sub_field_to(id)
    }

    /// Appends an empty node next to the node at `path`, at the same depth. Like
    /// [`SelectionTree::add_sub_field`], this fails when `path` is at least `max_depth` indices
    /// long.
    pub fn add_sibling_at_same_level(&mut self, path: &FieldPath) -> Result<NodeId> {
        let id = self.resolve(path)?;
        self.add_sibling_of(id)
    }

    /// Removes exactly the node at `path`, together with its sub-fields.
    pub fn remove_at_path(&mut self, path: &FieldPath) -> Result<SelectionNode> {
        let id = self.resolve(path)?;
        self.remove(id)
    }

    /// Applies an edit in place.
    pub fn apply_mut(&mut self, edit: SelectionEdit) -> Result<()> {
        match edit {
            SelectionEdit::AddField => self.add_field().map(drop),
            SelectionEdit::Rename { path, name } => self.update_name(&path, name),
            SelectionEdit::AddSubField { path } => self.add_sub_field(&path).map(drop),
            SelectionEdit::AddSibling { path } => self.add_sibling_at_same_level(&path).map(drop),
            SelectionEdit::Remove { path } => self.remove_at_path(&path).map(drop),
        }
    }

    /// Applies an edit to a copy of this tree and returns the copy, leaving `self` as it was.
    pub fn apply(&self, edit: SelectionEdit) -> Result<Self> {
        let mut next = self.clone();
        next.apply_mut(edit)?;
        Ok(next)
    }

    fn insert(&mut self, name: String, depth: usize, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.slots.insert(
            id,
            Slot {
                name,
                depth,
                parent,
                children: Vec::new(),
            },
        );
        match parent.and_then(|parent| self.slots.get_mut(&parent)) {
            Some(parent) => parent.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn slot(&self, id: NodeId) -> Result<&Slot> {
        self.slots.get(&id).ok_or_else(|| missing_node(id))
    }

    fn slot_mut(&mut self, id: NodeId) -> Result<&mut Slot> {
        self.slots.get_mut(&id).ok_or_else(|| missing_node(id))
    }

    fn siblings(&self, parent: Option<NodeId>) -> Result<&Vec<NodeId>> {
        match parent {
            Some(parent) => Ok(&self.slot(parent)?.children),
            None => Ok(&self.roots),
        }
    }

    fn siblings_mut(&mut self, parent: Option<NodeId>) -> Result<&mut Vec<NodeId>> {
        match parent {
            Some(parent) => Ok(&mut self.slot_mut(parent)?.children),
            None => Ok(&mut self.roots),
        }
    }
}

impl Default for SelectionTree {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Trees are equal when their forests have the same shape and names, regardless of node ids.
impl PartialEq for SelectionTree {
    fn eq(&self, other: &Self) -> bool {
        self.to_nodes() == other.to_nodes()
    }
}

impl Eq for SelectionTree {}

impl TryFrom<Vec<SelectionNode>> for SelectionTree {
    type Error = Error;

    fn try_from(nodes: Vec<SelectionNode>) -> Result<Self> {
        Self::from_nodes(&nodes, DEFAULT_MAX_DEPTH)
    }
}

impl From<SelectionTree> for Vec<SelectionNode> {
    fn from(tree: SelectionTree) -> Self {
        tree.to_nodes()
    }
}

fn depth_exceeded(max_depth: usize, depth: usize) -> Error {
    Error::new(
        format!("Max depth of {max_depth} reached, can't nest a field at depth {depth}"),
        ErrorType::StructuralLimitExceeded,
    )
}

fn missing_node(id: NodeId) -> Error {
    Error::new(format!("Node {id} does not exist"), ErrorType::InvalidPath)
}

fn missing_path(path: &FieldPath) -> Error {
    Error::new(
        format!("Path {path} does not address a field"),
        ErrorType::InvalidPath,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path<const N: usize>(indices: [usize; N]) -> FieldPath {
        FieldPath::from(indices)
    }

    fn sample() -> SelectionTree {
        SelectionTree::from_nodes(
            &[
                SelectionNode::new("id"),
                SelectionNode::new("profile")
                    .with_sub_field(SelectionNode::new("bio"))
                    .with_sub_field(SelectionNode::new("avatar")),
            ],
            DEFAULT_MAX_DEPTH,
        )
        .unwrap()
    }

    #[test]
    fn resolves_paths() {
        let tree = sample();
        let bio = tree.resolve(&path([1, 0])).unwrap();
        assert_eq!(tree.get(bio).unwrap().name(), "bio");
        assert_eq!(tree.get(bio).unwrap().depth(), 1);
        assert_eq!(tree.path_of(bio).unwrap(), path([1, 0]));
        assert_eq!(tree.path_of(tree.resolve(&path([1, 1])).unwrap()).unwrap(), path([1, 1]));
        assert_eq!(
            tree.resolve(&path([2])).unwrap_err().error_type(),
            ErrorType::InvalidPath
        );
        assert_eq!(
            tree.resolve(&FieldPath::default()).unwrap_err().error_type(),
            ErrorType::InvalidPath
        );
        assert!(tree.resolve(&path([0, 0])).is_err());
    }

    #[test]
    fn round_trips_nested_nodes() {
        let tree = sample();
        let nodes = tree.to_nodes();
        assert_eq!(nodes[1].sub_fields[1].name, "avatar");
        assert_eq!(nodes[1].sub_fields[1].depth, 1);
        assert_eq!(SelectionTree::from_nodes(&nodes, 5).unwrap(), tree);
    }

    #[test]
    fn updates_names() {
        let mut tree = sample();
        tree.update_name(&path([1, 1]), "url").unwrap();
        assert_eq!(tree.to_nodes()[1].sub_fields[1].name, "url");
        assert!(tree.update_name(&path([1, 5]), "x").is_err());
    }

    #[test]
    fn adds_sub_fields_down_to_max_depth() {
        let mut tree = SelectionTree::new(5);
        tree.add_field().unwrap();
        tree.update_name(&path([0]), "F0").unwrap();

        for depth in 1..5 {
            let parent = FieldPath::new(vec![0; depth]);
            let id = tree.add_sub_field(&parent).unwrap();
            assert_eq!(tree.get(id).unwrap().depth(), depth);
            assert_eq!(tree.path_of(id).unwrap(), parent.child(0));
        }

        let before = tree.clone();
        let deepest = FieldPath::new(vec![0; 5]);
        let error = tree.add_sub_field(&deepest).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::StructuralLimitExceeded);
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn respects_configured_max_depth() {
        let mut tree = SelectionTree::with_config(&GeneratorConfig::with_max_depth(2));
        let root = tree.add_field().unwrap();
        let child = tree.add_sub_field_to(root).unwrap();
        assert!(tree.add_sub_field_to(child).is_err());
        assert!(tree.add_sibling_of(child).is_err());
        assert!(tree.add_sibling_of(root).is_ok());

        let mut flat = SelectionTree::new(1);
        let root = flat.add_field().unwrap();
        assert!(flat.add_sub_field_to(root).is_err());
        assert!(SelectionTree::new(0).add_field().is_err());
    }

    #[test]
    fn adds_siblings_at_same_level() {
        let mut tree = sample();
        let id = tree.add_sibling_at_same_level(&path([1, 0])).unwrap();
        assert_eq!(tree.path_of(id).unwrap(), path([1, 2]));
        assert_eq!(tree.get(id).unwrap().depth(), 1);

        let id = tree.add_sibling_at_same_level(&path([0])).unwrap();
        assert_eq!(tree.path_of(id).unwrap(), path([2]));
        assert_eq!(tree.get(id).unwrap().depth(), 0);
    }

    #[test]
    fn rejects_siblings_at_max_depth() {
        let mut tree = SelectionTree::new(5);
        tree.add_field().unwrap();
        for depth in 1..5 {
            tree.add_sub_field(&FieldPath::new(vec![0; depth])).unwrap();
        }

        let before = tree.clone();
        let deepest = FieldPath::new(vec![0; 5]);
        let error = tree.add_sibling_at_same_level(&deepest).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::StructuralLimitExceeded);
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 5);

        let error = tree
            .apply(SelectionEdit::AddSibling { path: deepest })
            .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::StructuralLimitExceeded);

        let id = tree
            .add_sibling_at_same_level(&FieldPath::new(vec![0; 4]))
            .unwrap();
        assert_eq!(tree.get(id).unwrap().depth(), 3);
        assert_eq!(tree.path_of(id).unwrap(), path([0, 0, 0, 1]));
    }

    #[test]
    fn frees_removed_nodes() {
        let mut tree = SelectionTree::new(5);
        let root = tree.add_field().unwrap();
        let mut last = root;
        for _ in 0..1000 {
            let child = tree.add_sub_field(&path([0])).unwrap();
            tree.add_sub_field_to(child).unwrap();
            tree.remove_at_path(&path([0, 0])).unwrap();
            last = child;
        }
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.slots.len(), 1);
        assert!(tree.get(last).is_none());

        let next = tree.add_sibling_of(root).unwrap();
        assert!(next.index() > last.index());
        assert_eq!(tree.slots.len(), 2);
        assert_eq!(tree.clone().slots.len(), 2);
    }

    #[test]
    fn removes_exactly_the_addressed_node() {
        let mut tree = sample();
        let avatar = tree.resolve(&path([1, 1])).unwrap();
        let removed = tree.remove_at_path(&path([1, 0])).unwrap();
        assert_eq!(removed.name, "bio");
        assert_eq!(tree.path_of(avatar).unwrap(), path([1, 0]));

        let removed = tree.remove_at_path(&path([1])).unwrap();
        assert_eq!(removed.sub_fields.len(), 1);
        assert_eq!(tree.len(), 1);
        assert!(tree.get(avatar).is_none());
        assert!(tree.remove(avatar).is_err());
        assert_eq!(tree.to_nodes(), vec![SelectionNode::new("id")]);
    }

    #[test]
    fn apply_leaves_snapshots_untouched() {
        let tree = sample();
        let edited = tree
            .apply(SelectionEdit::AddSubField { path: path([0]) })
            .unwrap()
            .apply(SelectionEdit::Rename {
                path: path([0, 0]),
                name: "nested".into(),
            })
            .unwrap()
            .apply(SelectionEdit::AddField)
            .unwrap();
        assert_eq!(tree, sample());
        assert_eq!(edited.to_nodes()[0].sub_fields[0].name, "nested");
        assert_eq!(edited.roots().count(), 3);

        let error = tree
            .apply(SelectionEdit::Remove { path: path([7]) })
            .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidPath);
    }

    #[test]
    fn rejects_deep_nodes() {
        let mut node = SelectionNode::new("leaf");
        for _ in 0..5 {
            node = SelectionNode::new("level").with_sub_field(node);
        }
        let error = SelectionTree::from_nodes(&[node], 5).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::StructuralLimitExceeded);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_shape() {
        let tree: SelectionTree = serde_json::from_str(
            r#"[{ "name": "user", "subFields": [{ "name": "id", "depth": 7 }] }]"#,
        )
        .unwrap();
        assert_eq!(tree.to_nodes()[0].sub_fields[0].depth, 1);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            serde_json::json!([
                {
                    "name": "user",
                    "subFields": [{ "name": "id", "subFields": [], "depth": 1 }],
                    "depth": 0
                }
            ])
        );
    }
}
