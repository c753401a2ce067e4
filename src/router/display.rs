use super::{NodeId, NodeKind, Router};

use std::fmt;

// Renders the registered tree, namespaces first as grouping headers:
//
// ├── NAMESPACE api
// │   ├── GET tags => tags#index
// │   └── GET tags/:id => tags#show
// └── GET profile => users#show
impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &id) in self.roots.iter().enumerate() {
            self.fmt_node(f, id, "", i + 1 == self.roots.len())?;
        }
        Ok(())
    }
}

impl Router {
    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        last: bool,
    ) -> fmt::Result {
        let node = &self.nodes[id];
        let branch = if last { "└── " } else { "├── " };

        match &node.kind {
            NodeKind::Namespace => writeln!(f, "{}{}NAMESPACE {}", prefix, branch, node.segment)?,
            NodeKind::Route(method) => writeln!(
                f,
                "{}{}{} {} => {}",
                prefix,
                branch,
                method,
                node.segment,
                node.target.as_deref().unwrap_or("")
            )?,
        }

        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        for (i, &child) in node.children.iter().enumerate() {
            self.fmt_node(f, child, &child_prefix, i + 1 == node.children.len())?;
        }
        Ok(())
    }
}
