// hand-off artifacts for the renderer
use serde::Serialize;

use crate::core::tree::{ReflectionTree, TreeError};
use crate::core::types::NodeId;
use crate::output::navigation::NavigationModel;

/// Extra fields merged into the entry point for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexModel {
    pub entry_point: NodeId,
    pub display_readme: bool,
    pub is_index: bool,
    pub base_heading_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UnitModel {
    Reflection { node: NodeId },
    Index(IndexModel),
    Navigation(NavigationModel),
}

impl UnitModel {
    /// Display name the renderer would show for this model, if it has one.
    pub fn name<'t>(&self, tree: &'t ReflectionTree) -> Result<Option<&'t str>, TreeError> {
        match self {
            UnitModel::Reflection { node } => Ok(Some(tree.node(*node)?.name.as_str())),
            UnitModel::Index(index) => Ok(Some(tree.node(index.entry_point)?.name.as_str())),
            UnitModel::Navigation(_) => Ok(None),
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        match self {
            UnitModel::Reflection { node } => Some(*node),
            UnitModel::Index(index) => Some(index.entry_point),
            UnitModel::Navigation(_) => None,
        }
    }
}

/// One file to render: `path` (always `.md`), the model and the template id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputUnit {
    pub path: String,
    pub model: UnitModel,
    pub template: String,
}

impl OutputUnit {
    pub fn new(path: impl Into<String>, model: UnitModel, template: impl Into<String>) -> Self {
        Self { path: path.into(), model, template: template.into() }
    }

    pub fn reflection(path: impl Into<String>, node: NodeId, template: impl Into<String>) -> Self {
        Self::new(path, UnitModel::Reflection { node }, template)
    }
}
