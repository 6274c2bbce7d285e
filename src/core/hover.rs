use super::constants::{INTERACTIVE_GROUP_CLASS, INTERACTIVE_ROLES, INTERACTIVE_TAGS};

/// Minimal description of a hovered node and its ancestor chain, detached
/// from any rendering tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub tag: String,
    pub role: Option<String>,
    pub class_names: Vec<String>,
    pub parent: Option<Box<NodeDescriptor>>,
}

impl NodeDescriptor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_names.push(class.into());
        self
    }

    pub fn with_parent(mut self, parent: NodeDescriptor) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Self first, then each ancestor up to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    #[inline]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_names.iter().any(|c| c == class)
    }

    fn is_interactive_self(&self) -> bool {
        let tag_match = INTERACTIVE_TAGS
            .iter()
            .any(|t| self.tag.eq_ignore_ascii_case(t));
        let role_match = self.role.as_deref().map_or(false, |r| {
            let r = r.trim();
            INTERACTIVE_ROLES.iter().any(|want| r.eq_ignore_ascii_case(want))
        });
        tag_match || role_match || self.has_class(INTERACTIVE_GROUP_CLASS)
    }
}

pub struct Ancestors<'a> {
    next: Option<&'a NodeDescriptor>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a NodeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

/// True when the node or any ancestor is a link, a button, carries an
/// interactive role, or carries the interactive group class.
pub fn is_interactive(target: &NodeDescriptor) -> bool {
    target.ancestors().any(NodeDescriptor::is_interactive_self)
}
