mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element carrying `class`, in document order.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_class(root, class, &mut found);
    found
}

fn collect_by_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_by_class(child, class, found);
    }
}

/// Collect every element with the given tag, in document order.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    if element.tag == tag {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_by_tag(child, tag, found);
    }
}
