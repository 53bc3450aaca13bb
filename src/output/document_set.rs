//! Assembles the full ordered list of documents for one generation run.
//!
//! The home page always comes first, gitbook's `SUMMARY.md` (when enabled)
//! always last; everything in between follows the tree's child order.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::core::tree::{ReflectionTree, TreeError};
use crate::core::types::NodeId;
use crate::output::navigation::{NavigationItem, build_navigation};
use crate::output::unit::{IndexModel, OutputUnit, UnitModel};
use crate::theme::engine::Engine;
use crate::theme::mapping::MappingPolicy;
use crate::theme::options::ThemeOptions;

pub const INDEX_TEMPLATE: &str = "reflection.hbs";
pub const BASE_HEADING_LEVEL: &str = "##";

pub struct DocumentSetBuilder<'a, P: MappingPolicy + ?Sized> {
    policy: &'a P,
    options: &'a ThemeOptions,
    navigation: Option<NavigationItem>,
}

impl<'a, P: MappingPolicy + ?Sized> DocumentSetBuilder<'a, P> {
    pub fn new(policy: &'a P, options: &'a ThemeOptions) -> Self {
        Self { policy, options, navigation: None }
    }

    /// Navigation used for the gitbook summary instead of the one derived
    /// from the tree.
    pub fn navigation(mut self, navigation: NavigationItem) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn build(&self, tree: &mut ReflectionTree) -> Result<Vec<OutputUnit>, TreeError> {
        let engine = self.options.engine;
        let entry_point = self.entry_point(tree)?;
        //urls left over from an earlier run (other entry point or policy) must not leak into this one
        tree.clear_urls();

        let mut units = vec![OutputUnit::new(
            engine.home_file(),
            UnitModel::Index(IndexModel {
                entry_point,
                display_readme: self.options.display_readme(),
                is_index: true,
                base_heading_level: BASE_HEADING_LEVEL.to_string(),
            }),
            INDEX_TEMPLATE,
        )];

        for child in tree.children(entry_point)?.to_vec() {
            tree.build_urls(child, self.policy, engine, &mut units)?;
        }

        if engine == Engine::Gitbook {
            let summary = match &self.navigation {
                Some(nav) => build_navigation(nav, &units, tree)?,
                None => build_navigation(&tree.navigation(entry_point)?, &units, tree)?,
            };
            units.push(summary);
        }

        warn_on_duplicate_paths(&units);
        info!(engine = %engine, documents = units.len(), "document set built");
        Ok(units)
    }

    //named entry point if configured and found, the project root otherwise
    fn entry_point(&self, tree: &ReflectionTree) -> Result<NodeId, TreeError> {
        let Some(name) = self.options.entry_point.as_deref() else {
            return Ok(tree.root());
        };
        match tree.child_by_name(tree.root(), name)? {
            Some(id) => Ok(id),
            None => {
                warn!(entry_point = name, "entry point not found, using the project root");
                Ok(tree.root())
            }
        }
    }
}

pub fn build_document_set<P: MappingPolicy + ?Sized>(
    tree: &mut ReflectionTree,
    policy: &P,
    options: &ThemeOptions,
) -> Result<Vec<OutputUnit>, TreeError> {
    DocumentSetBuilder::new(policy, options).build(tree)
}

// colliding aliases end up overwriting each other at render time; not an error here
fn warn_on_duplicate_paths(units: &[OutputUnit]) {
    let mut seen: HashSet<&str> = HashSet::new();
    for unit in units {
        if !seen.insert(unit.path.as_str()) {
            warn!(path = %unit.path, "duplicate output path, later document overwrites earlier one");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::ReflectionNode;
    use crate::core::types::{ReflectionFlag, ReflectionKind, ROOT};
    use crate::theme::mapping::MappingTable;

    fn mk_tree() -> ReflectionTree {
        let mut t = ReflectionTree::new("project");
        let foo = t.add_node(ReflectionNode::new("Foo", ReflectionKind::Module, None)).unwrap();
        let bar = t.add_node(ReflectionNode::new("Bar", ReflectionKind::Class, Some(foo))).unwrap();
        t.add_node(ReflectionNode::new("make", ReflectionKind::Method, Some(bar)).with_flag(ReflectionFlag::Static))
            .unwrap();
        t.add_node(ReflectionNode::new("Color", ReflectionKind::Enum, None)).unwrap();
        t.assign_aliases().unwrap();
        t
    }

    fn paths(units: &[OutputUnit]) -> Vec<&str> {
        units.iter().map(|u| u.path.as_str()).collect()
    }

    #[test]
    fn home_document_comes_first_for_every_engine() {
        for engine in [Engine::Default, Engine::GithubWiki, Engine::Bitbucket, Engine::Gitbook] {
            let mut t = mk_tree();
            let units = build_document_set(&mut t, &MappingTable::standard(), &ThemeOptions::new(engine)).unwrap();

            let expected = if engine == Engine::GithubWiki { "Home.md" } else { "README.md" };
            assert_eq!(units[0].path, expected, "engine {engine}");
            assert_eq!(units.iter().filter(|u| u.path == expected).count(), 1);
        }
    }

    #[test]
    fn home_model_carries_index_fields() {
        let mut t = mk_tree();
        let opts = ThemeOptions::new(Engine::Default).with_readme("none");
        let units = build_document_set(&mut t, &MappingTable::standard(), &opts).unwrap();

        assert_eq!(units[0].template, "reflection.hbs");
        assert_eq!(
            units[0].model,
            UnitModel::Index(IndexModel {
                entry_point: ROOT,
                display_readme: false,
                is_index: true,
                base_heading_level: "##".to_string(),
            })
        );
    }

    #[test]
    fn default_engine_documents_follow_tree_order() {
        let mut t = mk_tree();
        let units = build_document_set(&mut t, &MappingTable::standard(), &ThemeOptions::default()).unwrap();

        assert_eq!(paths(&units), vec!["README.md", "modules/Foo.md", "classes/Foo.Bar.md", "enums/Color.md"]);
    }

    #[test]
    fn gitbook_appends_summary_last() {
        let mut t = mk_tree();
        let units = build_document_set(&mut t, &MappingTable::standard(), &ThemeOptions::new(Engine::Gitbook)).unwrap();

        assert_eq!(units.last().unwrap().path, "SUMMARY.md");
        assert_eq!(units.len(), 5);

        let UnitModel::Navigation(model) = &units.last().unwrap().model else {
            panic!("summary must carry a navigation model");
        };
        let titles: Vec<&str> = model.navigation.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Foo", "Color"]);
        let foo_links = model.navigation[0].dedicated_urls.as_ref().unwrap();
        assert_eq!(foo_links[1].title.as_deref(), Some("Bar"));
        assert_eq!(foo_links[1].url, "classes/Foo.Bar.md");
    }

    #[test]
    fn building_twice_yields_identical_documents() {
        let mut t = mk_tree();
        let policy = MappingTable::standard();
        let opts = ThemeOptions::new(Engine::Gitbook);

        let first = build_document_set(&mut t, &policy, &opts).unwrap();
        let second = build_document_set(&mut t, &policy, &opts).unwrap();

        assert_eq!(paths(&second), vec!["README.md", "modules/Foo.md", "classes/Foo.Bar.md", "enums/Color.md", "SUMMARY.md"]);
        assert_eq!(first, second);

        let UnitModel::Navigation(model) = &second.last().unwrap().model else {
            panic!("summary must carry a navigation model");
        };
        let titles: Vec<Option<&str>> = model
            .navigation
            .iter()
            .flat_map(|e| e.dedicated_urls.iter().flatten())
            .map(|link| link.title.as_deref())
            .collect();
        assert_eq!(titles, vec![Some("Foo"), Some("Bar"), Some("Color")]);
    }

    #[test]
    fn rebuilding_with_entry_point_drops_stale_urls() {
        let mut t = mk_tree();
        let policy = MappingTable::standard();
        build_document_set(&mut t, &policy, &ThemeOptions::default()).unwrap();

        let opts = ThemeOptions::default().with_entry_point("Foo");
        build_document_set(&mut t, &policy, &opts).unwrap();

        let color = t.child_by_name(ROOT, "Color").unwrap().unwrap();
        assert_eq!(t.node(color).unwrap().url, None);
        assert!(!t.node(color).unwrap().has_own_document);
    }

    #[test]
    fn explicit_navigation_overrides_derived_one() {
        let mut t = mk_tree();
        let mut item = NavigationItem::new("Classes", None);
        item.dedicated_urls = Some(vec!["classes/Foo.Bar.md".to_string()]);
        let mut nav = NavigationItem::new("custom", None);
        nav.children.push(item);

        let policy = MappingTable::standard();
        let opts = ThemeOptions::new(Engine::Gitbook);
        let units = DocumentSetBuilder::new(&policy, &opts).navigation(nav).build(&mut t).unwrap();

        let UnitModel::Navigation(model) = &units.last().unwrap().model else {
            panic!("summary must carry a navigation model");
        };
        assert_eq!(model.navigation.len(), 1);
        assert_eq!(model.navigation[0].title, "Classes");
        let links = model.navigation[0].dedicated_urls.as_ref().unwrap();
        assert_eq!(links[0].title.as_deref(), Some("Bar"));
    }

    #[test]
    fn non_gitbook_engines_emit_no_summary() {
        for engine in [Engine::Default, Engine::GithubWiki, Engine::Bitbucket] {
            let mut t = mk_tree();
            let units = build_document_set(&mut t, &MappingTable::standard(), &ThemeOptions::new(engine)).unwrap();
            assert!(units.iter().all(|u| u.path != "SUMMARY.md"));
        }
    }

    #[test]
    fn entry_point_limits_documents_to_its_subtree() {
        let mut t = mk_tree();
        let opts = ThemeOptions::default().with_entry_point("Foo");
        let units = build_document_set(&mut t, &MappingTable::standard(), &opts).unwrap();

        assert_eq!(paths(&units), vec!["README.md", "classes/Foo.Bar.md"]);
        let foo = t.child_by_name(ROOT, "Foo").unwrap().unwrap();
        assert_eq!(units[0].model.node(), Some(foo));
    }

    #[test]
    fn missing_entry_point_falls_back_to_root() {
        let mut t = mk_tree();
        let opts = ThemeOptions::default().with_entry_point("Nope");
        let units = build_document_set(&mut t, &MappingTable::standard(), &opts).unwrap();

        assert_eq!(units[0].model.node(), Some(ROOT));
        assert_eq!(units.len(), 4);
    }
}
