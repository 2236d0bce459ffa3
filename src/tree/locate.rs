//! tree::locate
//!
//! Nearest-preceding-sibling search.
//!
//! # Design
//!
//! The search answers: starting just before `start`, which is the nearest
//! node in backward document order - previous siblings first, then the
//! last descendant of the parent's previous sibling, and so on upward -
//! whose tag equals the target?
//!
//! The walk carries a `(node, verified)` pair. A node arrives "verified"
//! when the walk just moved onto it and still owes it a tag check; the
//! start node itself is never verified, so it cannot match. When a node's
//! previous sibling matches directly, it is returned without moving onto
//! it, which keeps that sibling from being tag-checked twice.
//!
//! The search is naturally tail-recursive; it is written as the
//! equivalent explicit loop, so stack use stays constant no matter how
//! deep or wide the tree is.

use super::TreeNode;

/// Find the nearest node preceding `start` in document order whose tag
/// equals `tag`.
///
/// Returns `None` when `start` is absent or no preceding node of that tag
/// is reachable through the sibling/ancestor chain. The tree is never
/// mutated.
///
/// # Example
///
/// ```
/// use pagework::tree::{nearest_preceding_sibling, Document};
///
/// let mut doc = Document::new("body");
/// let heading = doc.append_child(doc.root_id(), "h2");
/// let para = doc.append_child(doc.root_id(), "p");
/// let found = nearest_preceding_sibling(Some(doc.element(para)), "h2");
/// assert_eq!(found.map(|n| n.id()), Some(heading));
/// ```
pub fn nearest_preceding_sibling<N: TreeNode>(start: Option<N>, tag: &str) -> Option<N> {
    let mut current = start?;
    let mut verified = false;

    loop {
        if verified && current.tag() == tag {
            return Some(current);
        }

        if let Some(prev) = current.previous_sibling() {
            if prev.tag() == tag {
                return Some(prev);
            }
            current = prev;
            verified = true;
        } else if let Some(uncle) = current.parent().and_then(|p| p.previous_sibling()) {
            // Jump up and over to the end of the preceding subtree.
            // An empty preceding subtree ends the walk: arriving at an
            // absent node is terminal.
            match uncle.last_child() {
                Some(last) => {
                    current = last;
                    verified = true;
                }
                None => return None,
            }
        } else {
            return None;
        }
    }
}
