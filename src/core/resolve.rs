//! Url and anchor assignment.
//!
//! Every node either gets a document of its own or an anchor inside the
//! document of its nearest ancestor that has one (its *container*). Results
//! are written back onto the nodes (`url`, `anchor`, `has_own_document`);
//! documents are collected as [`OutputUnit`]s.
//!
//! A node whose `url` is an absolute link (`http:`, `https:`, `ftp:`,
//! `file:`) is final and never reassigned. Every other url is recomputed, so
//! walking the same tree again yields the same urls and the same documents.

use tracing::{debug, trace};

use crate::core::slug;
use crate::core::tree::{ReflectionNode, ReflectionTree, TreeError};
use crate::core::types::{NodeId, ReflectionKind};
use crate::output::unit::OutputUnit;
use crate::theme::engine::Engine;
use crate::theme::mapping::MappingPolicy;

impl ReflectionTree {
    pub fn resolve<P: MappingPolicy + ?Sized>(
        &mut self,
        node: NodeId,
        policy: &P,
        engine: Engine,
    ) -> Result<Vec<OutputUnit>, TreeError> {
        let mut urls = Vec::new();
        self.build_urls(node, policy, engine, &mut urls)?;
        Ok(urls)
    }

    /// Assigns urls to `node` and its subtree, appending every document
    /// produced to `urls`. Called on the root it only walks the children.
    pub fn build_urls<P: MappingPolicy + ?Sized>(
        &mut self,
        node: NodeId,
        policy: &P,
        engine: Engine,
        urls: &mut Vec<OutputUnit>,
    ) -> Result<(), TreeError> {
        if self.is_root(node) {
            for child in self.children(node)?.to_vec() {
                self.build_urls(child, policy, engine, urls)?;
            }
            return Ok(());
        }

        let (kind, parent) = {
            let n = self.node(node)?;
            (n.kind, n.parent)
        };

        let Some(directive) = policy.directive(kind) else {
            if let Some(parent) = parent {
                self.apply_anchor_url(node, parent, engine)?;
            }
            return Ok(());
        };

        if !self.has_final_url(node)? {
            let url = match engine {
                Engine::GithubWiki => format!("{}.md", self.build_segment(node, None, "-", engine)?),
                Engine::Default | Engine::Bitbucket | Engine::Gitbook => format!(
                    "{}/{}.md",
                    directive.directory,
                    self.build_segment(node, None, ".", engine)?
                ),
            };
            debug!(node, url = %url, template = %directive.template, "own document");

            urls.push(OutputUnit::reflection(url.clone(), node, directive.template.clone()));
            let n = self.node_mut(node)?;
            n.url = Some(url);
            n.anchor = None;
            n.has_own_document = true;
        } else {
            trace!(node, "external url, keeping it");
        }

        //leaf groups and the flat wiki both fold all children into this document
        let fold_children = directive.is_leaf || engine.is_flat();
        for child in self.children(node)?.to_vec() {
            if fold_children {
                self.apply_anchor_url(child, node, engine)?;
            } else {
                self.build_urls(child, policy, engine, urls)?;
            }
        }
        Ok(())
    }

    /// Anchors `node` and its whole subtree inside `container`'s document.
    pub fn apply_anchor_url(
        &mut self,
        node: NodeId,
        container: NodeId,
        engine: Engine,
    ) -> Result<(), TreeError> {
        if !self.has_final_url(node)? {
            let mut anchor = self.build_segment(node, Some(container), ".", engine)?;

            let n = self.node(node)?;
            if n.is_static() {
                anchor = format!("static-{anchor}");
            }

            let anchor_ref = match engine {
                Engine::Bitbucket => bitbucket_header_ref(n),
                Engine::Default | Engine::GithubWiki | Engine::Gitbook => anchor.clone(),
            };

            let container_url = self.node(container)?.url.clone().unwrap_or_default();
            let url = format!("{container_url}#{anchor_ref}");
            debug!(node, container, url = %url, "anchor");

            let n = self.node_mut(node)?;
            n.url = Some(url);
            n.anchor = Some(anchor);
            n.has_own_document = false;
        } else {
            trace!(node, "external url, keeping it");
        }

        for child in self.children(node)?.to_vec() {
            self.apply_anchor_url(child, container, engine)?;
        }
        Ok(())
    }

    fn has_final_url(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(self.node(node)?.url.as_deref().is_some_and(slug::is_external_url))
    }
}

//bitbucket addresses headings by its own generated id: markdown-header-<flags><name>
fn bitbucket_header_ref(node: &ReflectionNode) -> String {
    let mut prefix = String::new();
    if node.kind == ReflectionKind::ObjectLiteral {
        prefix.push_str("object-literal-");
    }
    for flag in node.flags.iter() {
        prefix.push_str(flag.display_name());
        prefix.push('-');
    }
    format!("markdown-header-{}{}", slug::anchor_ref(&prefix), slug::anchor_ref(&node.name))
}
