// per-kind document policy
use serde::{Deserialize, Serialize};

use crate::core::types::ReflectionKind;
use crate::theme::options::ConfigError;

/// Where nodes of one kind get their own document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDirective {
    pub directory: String,
    pub template: String,
    /// When set, no descendant gets a document of its own.
    #[serde(default)]
    pub is_leaf: bool,
}

impl MappingDirective {
    pub fn new(directory: impl Into<String>, template: impl Into<String>, is_leaf: bool) -> Self {
        Self { directory: directory.into(), template: template.into(), is_leaf }
    }
}

/// Looks up the directive for a kind. `None` means nodes of that kind are
/// always anchored inside an ancestor's document.
pub trait MappingPolicy {
    fn directive(&self, kind: ReflectionKind) -> Option<&MappingDirective>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub kinds: Vec<ReflectionKind>,
    #[serde(flatten)]
    pub directive: MappingDirective,
}

/// Ordered rule list; the first rule listing a kind wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingTable {
    #[serde(default)]
    pub mappings: Vec<MappingRule>,
}

//flat row form, the shape a toon table can carry (one kind per row)
#[derive(Debug, Deserialize)]
struct MappingRow {
    kind: ReflectionKind,
    directory: String,
    template: String,
    #[serde(default)]
    is_leaf: bool,
}

#[derive(Debug, Deserialize)]
struct MappingRows {
    mappings: Vec<MappingRow>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, kinds: &[ReflectionKind], directive: MappingDirective) -> Self {
        self.mappings.push(MappingRule { kinds: kinds.to_vec(), directive });
        self
    }

    /// Classic layout: classes, interfaces, enums and modules get documents.
    pub fn standard() -> Self {
        MappingTable::new()
            .with_rule(&[ReflectionKind::Class], MappingDirective::new("classes", "reflection.hbs", false))
            .with_rule(&[ReflectionKind::Interface], MappingDirective::new("interfaces", "reflection.hbs", false))
            .with_rule(&[ReflectionKind::Enum], MappingDirective::new("enums", "reflection.hbs", false))
            .with_rule(
                &[ReflectionKind::Module, ReflectionKind::ExternalModule],
                MappingDirective::new("modules", "reflection.hbs", false),
            )
    }

    /// Parses a toon document of the form
    ///
    /// ```text
    /// mappings[2]{kind,directory,template,is_leaf}:
    ///   Class,classes,reflection.hbs,false
    ///   Module,modules,reflection.hbs,true
    /// ```
    pub fn from_toon_str(input: &str) -> Result<Self, ConfigError> {
        let rows: MappingRows = toon_format::decode_default(input)?;
        let mut table = MappingTable::new();
        for row in rows.mappings {
            table = table.with_rule(
                &[row.kind],
                MappingDirective { directory: row.directory, template: row.template, is_leaf: row.is_leaf },
            );
        }
        Ok(table)
    }

    pub fn from_toon_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toon_str(&text)
    }
}

impl MappingPolicy for MappingTable {
    fn directive(&self, kind: ReflectionKind) -> Option<&MappingDirective> {
        self.mappings
            .iter()
            .find(|rule| rule.kinds.contains(&kind))
            .map(|rule| &rule.directive)
    }
}
