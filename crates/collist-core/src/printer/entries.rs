//! Lazy depth-first walk over a collection tree.

use std::fmt;

use crate::collection::{CollectionNode, RequestItem};

/// Appended after each folder name when building a prefix.
pub const PATH_SEPARATOR: &str = " / ";

/// Method shown for requests that do not name one (Postman's default).
pub const DEFAULT_METHOD: &str = "GET";

/// One request leaf, with the folder path that leads to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Ancestor folder names, each followed by [`PATH_SEPARATOR`].
    pub prefix: String,
    pub name: &'a str,
    pub method: Option<&'a str>,
    pub url: &'a str,
}

impl<'a> Entry<'a> {
    fn new(prefix: &str, request: &'a RequestItem) -> Self {
        Self {
            prefix: prefix.to_string(),
            name: &request.name,
            method: request.method(),
            url: request.url(),
        }
    }

    /// Renders the line with the HTTP method in front.
    pub fn with_method(&self) -> WithMethod<'_, 'a> {
        WithMethod(self)
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} -> {}", self.prefix, self.name, self.url)
    }
}

pub struct WithMethod<'e, 'a>(&'e Entry<'a>);

impl fmt::Display for WithMethod<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.0.method.unwrap_or(DEFAULT_METHOD);
        write!(f, "{} {}", method.to_ascii_uppercase(), self.0)
    }
}

struct Frame<'a> {
    nodes: std::slice::Iter<'a, CollectionNode>,
    prefix: String,
}

/// Iterator over request leaves in depth-first pre-order.
///
/// Uses an explicit stack of frames instead of recursion; nesting depth only
/// costs heap.
pub struct Entries<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Entries<'a> {
    pub fn new(nodes: &'a [CollectionNode], prefix: &str) -> Self {
        Self {
            stack: vec![Frame {
                nodes: nodes.iter(),
                prefix: prefix.to_string(),
            }],
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(node) = frame.nodes.next() else {
                self.stack.pop();
                continue;
            };
            match node {
                CollectionNode::Folder(folder) => {
                    let prefix = format!("{}{}{}", frame.prefix, folder.name, PATH_SEPARATOR);
                    self.stack.push(Frame {
                        nodes: folder.item.iter(),
                        prefix,
                    });
                }
                CollectionNode::Request(request) => {
                    return Some(Entry::new(&frame.prefix, request));
                }
                CollectionNode::Unclassified => {
                    tracing::debug!("skipping unclassified node under {:?}", frame.prefix);
                }
            }
        }
    }
}

/// Request leaves of `nodes`, in document order.
pub fn entries(nodes: &[CollectionNode]) -> Entries<'_> {
    Entries::new(nodes, "")
}
