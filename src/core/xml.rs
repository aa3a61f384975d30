//! Parsing of zypper `--xmlout` documents
//!
//! zypper wraps every listing in a `<stream>` element that may also carry
//! `<message>` elements; only the record elements are looked at here.

use roxmltree::{Document, Node};

use crate::config::defaults::DEFAULT_REPO_PRIORITY;
use crate::core::product::Product;
use crate::core::repository::Repository;
use crate::core::service::Service;

/// Parse the output of `zypper products -i`
pub fn parse_products(xml: &str) -> Result<Vec<Product>, roxmltree::Error> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let doc = Document::parse(xml)?;

    Ok(elements(&doc, "product")
        .map(|node| {
            let identifier = attr(node, "name")
                .or_else(|| node.attribute("identifier"))
                .unwrap_or_default();

            Product::new(identifier, attr_or_empty(node, "version"), attr_or_empty(node, "arch"))
                .with_base(flag(node, "isbase"))
                .with_productline(attr_or_empty(node, "productline"))
                .with_register_release(attr_or_empty(node, "registerrelease"))
                .with_release(attr_or_empty(node, "release"))
                .with_summary(
                    attr(node, "summary")
                        .or_else(|| child_text(node, "summary"))
                        .unwrap_or_default(),
                )
        })
        .collect())
}

/// Parse the output of `zypper repos -d`
pub fn parse_repositories(xml: &str) -> Result<Vec<Repository>, roxmltree::Error> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let doc = Document::parse(xml)?;

    Ok(elements(&doc, "repo")
        // services -d nests repos inside services; only top-level lists count
        .filter(|node| !node.ancestors().any(|a| a.has_tag_name("service")))
        .map(|node| {
            let url = child_text(node, "url")
                .or_else(|| node.attribute("url"))
                .unwrap_or_default();
            let priority = node
                .attribute("priority")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_REPO_PRIORITY);

            Repository::new(attr_or_empty(node, "alias"), attr_or_empty(node, "name"), url)
                .with_type(attr_or_empty(node, "type"))
                .with_priority(priority)
                .with_flags(
                    flag(node, "enabled"),
                    flag(node, "autorefresh"),
                    flag(node, "gpgcheck"),
                )
        })
        .collect())
}

/// Parse the output of `zypper services -d`
pub fn parse_services(xml: &str) -> Result<Vec<Service>, roxmltree::Error> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let doc = Document::parse(xml)?;

    Ok(elements(&doc, "service")
        .map(|node| {
            let url = node
                .attribute("url")
                .or_else(|| child_text(node, "url"))
                .unwrap_or_default();

            Service::new(attr_or_empty(node, "alias"), attr_or_empty(node, "name"), url)
                .with_type(attr_or_empty(node, "type"))
                .with_flags(flag(node, "enabled"), flag(node, "autorefresh"))
        })
        .collect())
}

fn elements<'a, 'input: 'a>(
    doc: &'a Document<'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    doc.descendants()
        .filter(move |node| node.is_element() && node.has_tag_name(tag))
}

fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

fn attr_or_empty<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or_default()
}

fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.is_element() && child.has_tag_name(tag))
        .and_then(|child| child.text())
        .map(str::trim)
}

/// zypper writes booleans as `1`/`0` or `true`/`false`
fn flag(node: Node<'_, '_>, name: &str) -> bool {
    node.attribute(name)
        .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}
