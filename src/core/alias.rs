// upstream alias assignment: sibling-unique name segments
use std::collections::HashSet;

use crate::core::slug;
use crate::core::tree::{ReflectionTree, TreeError};
use crate::core::types::NodeId;

impl ReflectionTree {
    //gives every node without an explicit alias a sanitized one, unique among its siblings.
    //collisions get "-1", "-2", ... in child order. explicit aliases are kept and reserved first.
    pub fn assign_aliases(&mut self) -> Result<(), TreeError> {
        let mut stack: Vec<NodeId> = vec![self.root()];
        while let Some(parent) = stack.pop() {
            let children: Vec<NodeId> = self.children(parent)?.to_vec();

            let mut taken: HashSet<String> = children
                .iter()
                .filter_map(|&c| self.node(c).ok().and_then(|n| n.alias.clone()))
                .collect();

            for &child in &children {
                let node = self.node_mut(child)?;
                if node.alias.is_none() {
                    let base = slug::sanitize_alias(&node.name, node.id);
                    let mut alias = base.clone();
                    let mut index = 0;
                    while taken.contains(&alias) {
                        index += 1;
                        alias = format!("{base}-{index}");
                    }
                    taken.insert(alias.clone());
                    node.alias = Some(alias);
                }
            }

            stack.extend(children.into_iter().rev());
        }
        Ok(())
    }
}
