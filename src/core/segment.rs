// ancestor-joined name segments
use crate::core::slug;
use crate::core::tree::{ReflectionTree, TreeError};
use crate::core::types::NodeId;
use crate::theme::engine::Engine;

impl ReflectionTree {
    /// Joins the aliases from the outermost relevant ancestor down to `node`.
    ///
    /// The walk stops below `stop` (exclusive) or below the project root,
    /// whichever comes first. On the flat wiki engine underscores are removed
    /// from every alias.
    ///
    /// The tree must be acyclic.
    pub fn build_segment(
        &self,
        node: NodeId,
        stop: Option<NodeId>,
        separator: &str,
        engine: Engine,
    ) -> Result<String, TreeError> {
        let mut parts: Vec<String> = Vec::new();
        let mut current = node;
        loop {
            let n = self.node(current)?;
            let alias = n.alias();
            parts.push(if engine.is_flat() {
                slug::strip_underscores(&alias)
            } else {
                alias.into_owned()
            });

            match n.parent {
                Some(p) if Some(p) != stop && !self.is_root(p) => current = p,
                _ => break,
            }
        }
        parts.reverse();
        Ok(parts.join(separator))
    }
}
