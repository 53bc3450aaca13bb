//! Decides where every reflection of a documentation tree is rendered.
//!
//! Nodes whose kind has a [`MappingDirective`] get a standalone Markdown
//! document; everything else becomes an anchor inside the nearest ancestor
//! that has one. Paths and anchors follow the selected [`Engine`]:
//!
//! - `default`: `<directory>/<Outer.Inner>.md`, plain anchors
//! - `githubWiki`: flat `<Outer-Inner>.md` pages, home page `Home.md`
//! - `bitbucket`: default layout, anchors point at `markdown-header-*` ids
//! - `gitbook`: default layout plus a `SUMMARY.md` navigation manifest
//!
//! ```ignore
//! let mut tree = ReflectionTree::new("my-project");
//! let foo = tree.add_node(ReflectionNode::new("Foo", ReflectionKind::Module, None))?;
//! tree.add_node(ReflectionNode::new("Bar", ReflectionKind::Class, Some(foo)))?;
//! tree.assign_aliases()?;
//!
//! let units = build_document_set(&mut tree, &MappingTable::standard(), &ThemeOptions::default())?;
//! // README.md, modules/Foo.md, classes/Foo.Bar.md
//! ```

pub mod core;
pub mod output;
pub mod theme;

pub use crate::core::tree::{ReflectionNode, ReflectionTree, TreeError};
pub use crate::core::types::{NodeId, ROOT, ReflectionFlag, ReflectionFlags, ReflectionKind};
pub use crate::output::directory::is_output_directory;
pub use crate::output::document_set::{DocumentSetBuilder, build_document_set};
pub use crate::output::navigation::{
    DedicatedLink, NavigationEntry, NavigationItem, NavigationModel, build_navigation,
};
pub use crate::output::unit::{IndexModel, OutputUnit, UnitModel};
pub use crate::theme::engine::{Engine, UnknownEngine};
pub use crate::theme::mapping::{MappingDirective, MappingPolicy, MappingRule, MappingTable};
pub use crate::theme::options::{ConfigError, ThemeOptions};
