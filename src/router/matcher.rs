use super::target::{Params, Target};
use super::{Node, NodeId, NodeKind, Router};

use http::Method;
use smallvec::SmallVec;
use tracing::{debug, trace};

impl Router {
    /// Resolves `(path, method)` against the tree.
    ///
    /// Leading, trailing and duplicate slashes are ignored. A trailing
    /// segment satisfying the identifier format is detached first and only
    /// matches a registered `"<segment>/:id"` member route; it surfaces as
    /// [`Target::id`], not as a named param. `None` is a normal outcome,
    /// not an error.
    pub fn resolve<'a>(&'a self, path: &'a str, method: &Method) -> Option<Target<'a>> {
        let mut segments: SmallVec<[&str; 8]> =
            path.split('/').filter(|s| !s.is_empty()).collect();

        let id = match segments.last() {
            Some(&last) if (self.id_format)(last) => {
                segments.pop();
                Some(last)
            }
            _ => None,
        };

        let last = match segments.len().checked_sub(1) {
            Some(i) => i,
            None => return None,
        };

        let mut children: &[NodeId] = &self.roots;
        let mut matched: Option<&Node> = None;

        for (i, &seg) in segments.iter().enumerate() {
            let found = if i == last && id.is_some() {
                self.find_child(children, |n| {
                    member_pattern_eq(&n.segment, seg)
                        && matches!(&n.kind, NodeKind::Route(m) if m == method)
                })
            } else {
                self.find_child(children, |n| {
                    n.segment.as_ref() == seg
                        && match &n.kind {
                            NodeKind::Namespace => true,
                            NodeKind::Route(m) => m == method,
                        }
                })
            };

            match found {
                Some(node) => {
                    children = &node.children;
                    matched = Some(node);
                }
                None => {
                    trace!(path, %method, "no matching route");
                    return None;
                }
            }
        }

        let node = matched?;
        let target = node.target.as_deref()?;
        let (handler, action) = target.split_once('#')?;

        let mut values = segments;
        if let Some(id) = id {
            values.push(id);
        }
        let params = Params::collect(&node.segment, &values, id.is_some());

        debug!(path, %method, handler, action, "route resolved");
        Some(Target {
            handler,
            action,
            params,
            id,
        })
    }

    fn find_child(&self, children: &[NodeId], pred: impl Fn(&Node) -> bool) -> Option<&Node> {
        // first structural match wins, in insertion order
        children.iter().map(|&c| &self.nodes[c]).find(|&n| pred(n))
    }
}

fn member_pattern_eq(pattern: &str, segment: &str) -> bool {
    match pattern.strip_prefix(segment) {
        Some(rest) => rest == "/:id",
        None => false,
    }
}
