// gitbook SUMMARY.md manifest
use serde::{Deserialize, Serialize};

use crate::core::tree::{ReflectionTree, TreeError};
use crate::core::types::NodeId;
use crate::output::unit::{OutputUnit, UnitModel};

pub const SUMMARY_FILE: &str = "SUMMARY.md";
pub const SUMMARY_TEMPLATE: &str = "summary.hbs";

/// Navigation tree handed in by the caller (or derived from the resolved
/// reflection tree). `dedicated_urls` lists paths of standalone documents
/// that belong to the item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub dedicated_urls: Option<Vec<String>>,
    #[serde(default)]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    pub fn new(title: impl Into<String>, url: Option<String>) -> Self {
        Self { title: title.into(), url, dedicated_urls: None, children: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DedicatedLink {
    /// Display name of the document at `url`; `None` when no document matches.
    pub title: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub title: String,
    pub url: Option<String>,
    pub dedicated_urls: Option<Vec<DedicatedLink>>,
    pub children: Vec<NavigationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationModel {
    pub navigation: Vec<NavigationEntry>,
}

/// Builds the summary document. Only the top-level entries get their
/// dedicated urls resolved to titles, nested items are passed through.
pub fn build_navigation(
    navigation: &NavigationItem,
    units: &[OutputUnit],
    tree: &ReflectionTree,
) -> Result<OutputUnit, TreeError> {
    let mut entries = Vec::with_capacity(navigation.children.len());
    for item in &navigation.children {
        let dedicated_urls = match &item.dedicated_urls {
            Some(urls) => {
                let mut links = Vec::with_capacity(urls.len());
                for url in urls {
                    links.push(DedicatedLink { title: title_for(url, units, tree)?, url: url.clone() });
                }
                Some(links)
            }
            None => None,
        };
        entries.push(NavigationEntry {
            title: item.title.clone(),
            url: item.url.clone(),
            dedicated_urls,
            children: item.children.clone(),
        });
    }

    Ok(OutputUnit::new(
        SUMMARY_FILE,
        UnitModel::Navigation(NavigationModel { navigation: entries }),
        SUMMARY_TEMPLATE,
    ))
}

fn title_for(url: &str, units: &[OutputUnit], tree: &ReflectionTree) -> Result<Option<String>, TreeError> {
    match units.iter().find(|u| u.path == url) {
        Some(unit) => Ok(unit.model.name(tree)?.map(str::to_string)),
        None => Ok(None),
    }
}

impl ReflectionTree {
    //one item per top-level node with its own document, listing the paths of that node and
    //every documented node below it. call after urls were resolved.
    pub fn navigation(&self, entry_point: NodeId) -> Result<NavigationItem, TreeError> {
        let root = self.node(entry_point)?;
        let mut nav = NavigationItem::new(root.name.clone(), None);

        for &child in self.children(entry_point)? {
            let n = self.node(child)?;
            if !n.has_own_document {
                continue;
            }
            let mut dedicated = Vec::new();
            dedicated.extend(n.url.clone());
            for d in self.descendants(child)? {
                let dn = self.node(d)?;
                if dn.has_own_document {
                    dedicated.extend(dn.url.clone());
                }
            }

            let mut item = NavigationItem::new(n.name.clone(), n.url.clone());
            item.dedicated_urls = Some(dedicated);
            nav.children.push(item);
        }
        Ok(nav)
    }
}
