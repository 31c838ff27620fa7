//! Node counts for a collection tree.

use std::fmt;

use crate::collection::CollectionNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub folders: usize,
    pub requests: usize,
    /// Nodes that were neither folder nor request.
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} requests in {} folders", self.requests, self.folders)?;
        if self.skipped > 0 {
            write!(f, " ({} unrecognized nodes skipped)", self.skipped)?;
        }
        Ok(())
    }
}

pub fn summarize(nodes: &[CollectionNode]) -> Summary {
    let mut summary = Summary::default();
    let mut stack: Vec<&CollectionNode> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        match node {
            CollectionNode::Folder(folder) => {
                summary.folders += 1;
                stack.extend(folder.item.iter());
            }
            CollectionNode::Request(_) => summary.requests += 1,
            CollectionNode::Unclassified => summary.skipped += 1,
        }
    }
    summary
}
