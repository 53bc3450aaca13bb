//! Arena-backed reflection tree.
//!
//! Nodes are owned by the tree and addressed by [`NodeId`]. A node's `parent`
//! is a plain id (never a second owner); `children` keeps insertion order,
//! which is the order documents are produced in.

use std::borrow::Cow;

use thiserror::Error;

use crate::core::slug;
use crate::core::types::{NodeId, ROOT, ReflectionFlag, ReflectionFlags, ReflectionKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("parent {parent} of '{name}' does not exist")]
    ParentNotFound { parent: NodeId, name: String },

    #[error("a project node can only be the tree root")]
    NestedProject,

    #[error("tree is full: node ids are limited to {} entries", NodeId::MAX)]
    TooManyNodes,
}

//ids are indices into the arena; refuse to wrap past NodeId::MAX
fn next_id(len: usize) -> Result<NodeId, TreeError> {
    NodeId::try_from(len).map_err(|_| TreeError::TooManyNodes)
}

#[derive(Debug, Clone)]
pub struct ReflectionNode {
    pub id: NodeId,
    pub name: String,
    pub kind: ReflectionKind,
    pub flags: ReflectionFlags,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Disambiguated name segment. Set upstream (see `assign_aliases`).
    pub alias: Option<String>,

    // written by the url resolver
    pub url: Option<String>,
    pub anchor: Option<String>,
    pub has_own_document: bool,
}

impl ReflectionNode {
    /// `parent = None` attaches the node directly under the project root.
    pub fn new(name: impl Into<String>, kind: ReflectionKind, parent: Option<NodeId>) -> Self {
        Self {
            id: 0, // overwritten by add_node
            name: name.into(),
            kind,
            flags: ReflectionFlags::new(),
            parent,
            children: Vec::new(),
            alias: None,
            url: None,
            anchor: None,
            has_own_document: false,
        }
    }

    pub fn with_flag(mut self, flag: ReflectionFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Pre-set url, e.g. an external link that must survive resolution.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(ReflectionFlag::Static)
    }

    /// The alias if one was assigned, otherwise the sanitized name.
    pub fn alias(&self) -> Cow<'_, str> {
        match &self.alias {
            Some(a) => Cow::Borrowed(a.as_str()),
            None => Cow::Owned(slug::sanitize_alias(&self.name, self.id)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReflectionTree {
    nodes: Vec<ReflectionNode>,
}

impl ReflectionTree {
    pub fn new(project_name: impl Into<String>) -> Self {
        let mut root = ReflectionNode::new(project_name, ReflectionKind::Project, None);
        root.id = ROOT;
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        id == ROOT
    }

    //appends the node under its parent (root when None) and returns its id
    pub fn add_node(&mut self, mut node: ReflectionNode) -> Result<NodeId, TreeError> {
        if node.kind.is_project() {
            return Err(TreeError::NestedProject);
        }
        let parent = node.parent.unwrap_or(ROOT);
        if parent as usize >= self.nodes.len() {
            return Err(TreeError::ParentNotFound { parent, name: node.name });
        }

        let id = next_id(self.nodes.len())?;
        node.id = id;
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent as usize].children.push(id);
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&ReflectionNode, TreeError> {
        self.nodes.get(id as usize).ok_or(TreeError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut ReflectionNode, TreeError> {
        self.nodes.get_mut(id as usize).ok_or(TreeError::NodeNotFound(id))
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(self.node(id)?.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // the root is always present
        self.nodes.len() == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReflectionNode> + '_ {
        self.nodes.iter()
    }

    /// Preorder walk of the subtree below `id` (excluding `id` itself).
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id)?.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next)?.iter().rev().copied());
        }
        Ok(out)
    }

    /// Looks up a descendant of `parent` by a dotted name path such as `Foo.Bar`.
    pub fn child_by_name(&self, parent: NodeId, path: &str) -> Result<Option<NodeId>, TreeError> {
        let mut current = parent;
        for part in path.split('.') {
            let found = self
                .children(current)?
                .iter()
                .copied()
                .find(|&c| self.nodes[c as usize].name == part);
            match found {
                Some(c) => current = c,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    //drops everything the resolver wrote so a fresh run can start. external links are input, kept
    pub fn clear_urls(&mut self) {
        for n in self.nodes.iter_mut() {
            if !n.url.as_deref().is_some_and(slug::is_external_url) {
                n.url = None;
            }
            n.anchor = None;
            n.has_own_document = false;
        }
    }
}
