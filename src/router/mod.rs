mod display;
mod error;
mod matcher;
mod registrar;
mod target;

pub use self::error::RouterError;
pub use self::registrar::{Action, Resources, RouteOptions};
pub use self::target::{Params, Target};

use http::Method;

type NodeId = usize;

#[derive(Debug)]
struct Node {
    segment: Box<str>,
    kind: NodeKind,
    children: Vec<NodeId>,
    target: Option<Box<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Namespace,
    Route(Method),
}

/// Route tree built by the registration DSL and resolved per request.
///
/// Nodes live in an arena; namespace scoping during registration is a stack
/// of parent indices, so insertion never re-parses a joined path string.
#[derive(Debug)]
pub struct Router {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    scope: Vec<NodeId>,
    id_format: fn(&str) -> bool,
}

impl Router {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            scope: Vec::new(),
            id_format: hex_id,
        }
    }

    /// A router recognizing trailing resource identifiers by `id_format`
    /// instead of the default 24-hex-character check.
    pub fn with_id_format(id_format: fn(&str) -> bool) -> Self {
        Self {
            id_format,
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.scope.clear();
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Default identifier format: 24 hexadecimal characters, case-insensitive.
pub fn hex_id(segment: &str) -> bool {
    segment.len() == 24 && segment.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::hex_id;

    #[test]
    fn hex_id_format() {
        assert!(hex_id("507f1f77bcf86cd799439011"));
        assert!(hex_id("507F1F77BCF86CD799439011"));

        assert!(!hex_id("507f1f77bcf86cd79943901"));
        assert!(!hex_id("507f1f77bcf86cd7994390111"));
        assert!(!hex_id("507f1f77bcf86cd79943901z"));
        assert!(!hex_id(""));
    }
}
