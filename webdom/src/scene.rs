//! Retained-mode scene graph for imperatively drawn content (charts).
//!
//! A `Scene` is a canvas handle owned by one component. The component creates,
//! updates and removes primitives inside its lifecycle hooks; the declarative
//! render pass only converts the current scene into elements.
//!
//! Attribute updates can carry a transition. The scene stores the target
//! value and remembers where the transition started, so a renderer (or a test)
//! can ask for the interpolated value at any elapsed time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use crate::element::{Content, Element};
use crate::transitions::{interpolate, TransitionConfig};

/// Identifier of a node inside one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// A primitive attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// A transition in flight on one node.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTransition {
    /// Values the transitioned attributes had when it started.
    pub from: BTreeMap<String, AttrValue>,
    pub config: TransitionConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub tag: String,
    pub classes: Vec<String>,
    /// Target attribute values.
    pub attrs: BTreeMap<String, AttrValue>,
    pub text: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub transition: Option<ActiveTransition>,
}

impl SceneNode {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            parent,
            transition: None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    nodes: HashMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new node under `parent`, or as a root when `parent` is None.
    ///
    /// Appending under a node that does not exist creates a root.
    pub fn append(&mut self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let parent = parent.filter(|p| self.nodes.contains_key(p));
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }
        self.nodes.insert(id, SceneNode::new(tag, parent));
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// All nodes carrying `class`, in no particular order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.has_class(class))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&id)
            && !node.has_class(class)
        {
            node.classes.push(class.to_string());
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.text = Some(text.into());
        }
    }

    /// Set an attribute immediately, cancelling any transition on it.
    pub fn set(&mut self, id: NodeId, name: &str, value: impl Into<AttrValue>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.attrs.insert(name.to_string(), value.into());
            if let Some(transition) = &mut node.transition {
                transition.from.remove(name);
                if transition.from.is_empty() {
                    node.transition = None;
                }
            }
        }
    }

    /// Move attributes to new values over `config`.
    ///
    /// Starts from the current target values; a transition already running on
    /// the node is interrupted. Attributes without a current value jump.
    pub fn transition(
        &mut self,
        id: NodeId,
        values: Vec<(&str, AttrValue)>,
        config: TransitionConfig,
    ) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };

        let mut from = BTreeMap::new();
        for (name, value) in values {
            if let Some(previous) = node.attrs.insert(name.to_string(), value) {
                from.insert(name.to_string(), previous);
            }
        }

        node.transition = if from.is_empty() {
            None
        } else {
            Some(ActiveTransition { from, config })
        };
    }

    /// Attribute value `elapsed` into the node's transition.
    ///
    /// Numbers are interpolated; text switches to the target at completion.
    pub fn value_at(&self, id: NodeId, name: &str, elapsed: Duration) -> Option<AttrValue> {
        let node = self.nodes.get(&id)?;
        let target = node.attrs.get(name)?;

        let Some(transition) = &node.transition else {
            return Some(target.clone());
        };
        let Some(from) = transition.from.get(name) else {
            return Some(target.clone());
        };

        let progress = transition.config.progress(elapsed);
        match (from, target) {
            (AttrValue::Number(a), AttrValue::Number(b)) => {
                Some(AttrValue::Number(interpolate(*a, *b, progress)))
            }
            _ if progress >= 1.0 => Some(target.clone()),
            _ => Some(from.clone()),
        }
    }

    /// Complete every running transition.
    pub fn settle(&mut self) {
        for node in self.nodes.values_mut() {
            node.transition = None;
        }
    }

    pub fn has_transitions(&self) -> bool {
        self.nodes.values().any(|n| n.transition.is_some())
    }

    /// Remove a node and its subtree. Returns false if it did not exist.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };

        match node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent) => parent.children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }

        for child in node.children {
            self.remove_subtree(child);
        }
        true
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }

    /// Remove all children of a node, keeping the node.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = match self.nodes.get_mut(&id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    /// Convert a subtree into elements using target attribute values.
    pub fn to_element(&self, id: NodeId) -> Option<Element> {
        let node = self.nodes.get(&id)?;
        let mut element = Element::new(node.tag.clone());
        for class in &node.classes {
            element = element.class(class.clone());
        }
        for (name, value) in &node.attrs {
            element = element.attr(name.clone(), value.to_string());
        }
        if let Some(text) = &node.text {
            element = element.content(Content::Text(text.clone()));
        }
        for child in &node.children {
            if let Some(child_element) = self.to_element(*child) {
                element = element.child(child_element);
            }
        }
        Some(element)
    }
}
