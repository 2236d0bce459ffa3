//! tree::dom
//!
//! A minimal arena-backed element tree.
//!
//! # Design
//!
//! Nodes live in a flat `Vec`; [`ElementId`] indexes into it and
//! [`Element`] pairs an id with a borrow of the whole tree, giving the
//! cheap `Copy` handle that [`TreeNode`] traversal expects. The tree is
//! construction-only: children are appended in document order and never
//! moved or removed, so ids stay valid for the tree's lifetime.

use super::TreeNode;

/// Index of an element within its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Stored element data.
#[derive(Debug)]
struct ElementData {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// An element tree with a single root.
///
/// # Example
///
/// ```
/// use pagework::tree::{Document, TreeNode};
///
/// let mut doc = Document::new("body");
/// let section = doc.append_child(doc.root_id(), "section");
/// let heading = doc.append_child(section, "h2");
///
/// assert_eq!(doc.element(heading).tag(), "h2");
/// assert_eq!(doc.element(heading).parent().map(|p| p.id()), Some(section));
/// ```
#[derive(Debug)]
pub struct Document {
    elements: Vec<ElementData>,
}

impl Document {
    /// Create a document whose root has the given tag.
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            elements: vec![ElementData {
                tag: root_tag.into(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root element's id.
    pub fn root_id(&self) -> ElementId {
        ElementId(0)
    }

    /// A handle to the root element.
    pub fn root(&self) -> Element<'_> {
        self.element(self.root_id())
    }

    /// Append a new child with the given tag after `parent`'s existing
    /// children, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_child(&mut self, parent: ElementId, tag: impl Into<String>) -> ElementId {
        assert!(parent.0 < self.elements.len(), "unknown parent element");

        let id = ElementId(self.elements.len());
        self.elements.push(ElementData {
            tag: tag.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.elements[parent.0].children.push(id);
        id
    }

    /// A handle to the element with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    pub fn element(&self, id: ElementId) -> Element<'_> {
        assert!(id.0 < self.elements.len(), "unknown element id");
        Element { doc: self, id }
    }

    fn data(&self, id: ElementId) -> &ElementData {
        &self.elements[id.0]
    }
}

/// A cheap read-only handle to one element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    id: ElementId,
}

impl<'a> Element<'a> {
    /// This element's id.
    pub fn id(&self) -> ElementId {
        self.id
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .finish()
    }
}

impl TreeNode for Element<'_> {
    fn tag(&self) -> &str {
        &self.doc.data(self.id).tag
    }

    fn previous_sibling(&self) -> Option<Self> {
        let parent = self.doc.data(self.id).parent?;
        let siblings = &self.doc.data(parent).children;
        let position = siblings.iter().position(|&c| c == self.id)?;
        let prev = *siblings.get(position.checked_sub(1)?)?;
        Some(self.doc.element(prev))
    }

    fn parent(&self) -> Option<Self> {
        self.doc
            .data(self.id)
            .parent
            .map(|parent| self.doc.element(parent))
    }

    fn last_child(&self) -> Option<Self> {
        self.doc
            .data(self.id)
            .children
            .last()
            .map(|&child| self.doc.element(child))
    }
}
