//! style
//!
//! Computed-style queries over a capability trait.
//!
//! # Design
//!
//! Resolving a computed style needs a rendering engine; this crate only
//! consumes the result. [`StyleSource`] is the narrow interface a host
//! supplies, and the queries here ([`has_style`], [`positioned_ancestor`])
//! are written against it. [`MemoryStyles`] is a deterministic in-memory
//! source for tests and demos.

mod memory;

pub use memory::MemoryStyles;

use crate::tree::TreeNode;

/// Capability to read resolved style values for nodes of type `N`.
///
/// Implementations read, they never compute: the value returned for a
/// `(node, property)` pair is whatever the host's cascade already decided.
pub trait StyleSource<N> {
    /// The resolved value of `property` for `node`, if the property is
    /// set at all.
    fn computed_value(&self, node: &N, property: &str) -> Option<String>;
}

/// Check whether `node` has `property` resolved, optionally to a specific
/// `value`.
///
/// With `value` of `None`, any resolved value counts. With `Some`, the
/// resolved value must match exactly.
pub fn has_style<N, S>(styles: &S, node: &N, property: &str, value: Option<&str>) -> bool
where
    S: StyleSource<N>,
{
    match (styles.computed_value(node, property), value) {
        (Some(resolved), Some(wanted)) => resolved == wanted,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Find the nearest relatively-positioned node, starting at `node` itself
/// and walking up the parent chain.
///
/// Useful when positioning a node absolutely: the result is the node the
/// absolute coordinates will be relative to. Returns `None` when no node
/// on the chain has `position: relative`.
pub fn positioned_ancestor<N, S>(styles: &S, node: N) -> Option<N>
where
    N: TreeNode,
    S: StyleSource<N>,
{
    let mut current = Some(node);
    while let Some(candidate) = current {
        if has_style(styles, &candidate, "position", Some("relative")) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Document;

    #[test]
    fn has_style_with_and_without_value() {
        let mut doc = Document::new("body");
        let div = doc.append_child(doc.root_id(), "div");

        let mut styles = MemoryStyles::new();
        styles.set(div, "display", "flex");

        let node = doc.element(div);
        assert!(has_style(&styles, &node, "display", None));
        assert!(has_style(&styles, &node, "display", Some("flex")));
        assert!(!has_style(&styles, &node, "display", Some("block")));
        assert!(!has_style(&styles, &node, "position", None));
    }

    #[test]
    fn positioned_ancestor_prefers_the_node_itself() {
        let mut doc = Document::new("body");
        let outer = doc.append_child(doc.root_id(), "div");
        let inner = doc.append_child(outer, "span");

        let mut styles = MemoryStyles::new();
        styles.set(outer, "position", "relative");
        styles.set(inner, "position", "relative");

        let found = positioned_ancestor(&styles, doc.element(inner));
        assert_eq!(found.map(|n| n.id()), Some(inner));
    }

    #[test]
    fn positioned_ancestor_walks_upward() {
        let mut doc = Document::new("body");
        let outer = doc.append_child(doc.root_id(), "div");
        let middle = doc.append_child(outer, "div");
        let inner = doc.append_child(middle, "span");

        let mut styles = MemoryStyles::new();
        styles.set(outer, "position", "relative");
        styles.set(middle, "position", "static");

        let found = positioned_ancestor(&styles, doc.element(inner));
        assert_eq!(found.map(|n| n.id()), Some(outer));
    }

    #[test]
    fn positioned_ancestor_none_without_relative_chain() {
        let mut doc = Document::new("body");
        let div = doc.append_child(doc.root_id(), "div");

        let styles = MemoryStyles::new();
        assert!(positioned_ancestor(&styles, doc.element(div)).is_none());
    }
}
