// shared identifiers and tags for the reflection tree
use serde::{Deserialize, Serialize};

pub type NodeId = u32;

/// Id of the synthetic project root. Every tree owns exactly one.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectionKind {
    Project,
    ExternalModule,
    Module,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    GetSignature,
    SetSignature,
    ObjectLiteral,
    TypeAlias,
    Event,
}

impl ReflectionKind {
    pub fn is_project(&self) -> bool {
        matches!(self, ReflectionKind::Project)
    }
}

/// Qualifiers carried by a reflection. Declaration order is irrelevant, a node
/// keeps its flags in the order they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectionFlag {
    Private,
    Protected,
    Public,
    Static,
    Exported,
    External,
    Optional,
    Rest,
    Abstract,
    Const,
    Let,
    ConstructorProperty,
    DefaultValue,
}

impl ReflectionFlag {
    /// Human readable name, the form headings are generated from.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReflectionFlag::Private => "Private",
            ReflectionFlag::Protected => "Protected",
            ReflectionFlag::Public => "Public",
            ReflectionFlag::Static => "Static",
            ReflectionFlag::Exported => "Exported",
            ReflectionFlag::External => "External",
            ReflectionFlag::Optional => "Optional",
            ReflectionFlag::Rest => "Rest",
            ReflectionFlag::Abstract => "Abstract",
            ReflectionFlag::Const => "Const",
            ReflectionFlag::Let => "Let",
            ReflectionFlag::ConstructorProperty => "Constructor Property",
            ReflectionFlag::DefaultValue => "Default Value",
        }
    }
}

/// Insertion-ordered set of flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionFlags(Vec<ReflectionFlag>);

impl ReflectionFlags {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    //returns false if the flag was already present (order is kept from the first insert)
    pub fn insert(&mut self, flag: ReflectionFlag) -> bool {
        if self.0.contains(&flag) {
            return false;
        }
        self.0.push(flag);
        true
    }

    pub fn contains(&self, flag: ReflectionFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = ReflectionFlag> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ReflectionFlag> for ReflectionFlags {
    fn from_iter<I: IntoIterator<Item = ReflectionFlag>>(iter: I) -> Self {
        let mut flags = ReflectionFlags::new();
        for f in iter {
            flags.insert(f);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_keep_first_insertion_order_and_ignore_duplicates() {
        let mut flags = ReflectionFlags::new();
        assert!(flags.insert(ReflectionFlag::Static));
        assert!(flags.insert(ReflectionFlag::Private));
        assert!(!flags.insert(ReflectionFlag::Static));

        let order: Vec<ReflectionFlag> = flags.iter().collect();
        assert_eq!(order, vec![ReflectionFlag::Static, ReflectionFlag::Private]);
        assert_eq!(flags.len(), 2);
        assert!(flags.contains(ReflectionFlag::Private));
        assert!(!flags.contains(ReflectionFlag::Exported));
    }

    #[test]
    fn multi_word_flags_have_spaced_display_names() {
        assert_eq!(ReflectionFlag::ConstructorProperty.display_name(), "Constructor Property");
        assert_eq!(ReflectionFlag::Static.display_name(), "Static");
    }
}
