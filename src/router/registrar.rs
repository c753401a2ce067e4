use super::error::RouterError;
use super::{Node, NodeId, NodeKind, Router};

use http::Method;
use tracing::debug;

/// The standard REST action set expanded by [`Router::resources`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Index,
    Show,
    Create,
    Update,
    Destroy,
    New,
    Edit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Index,
        Action::Show,
        Action::Create,
        Action::Update,
        Action::Destroy,
        Action::New,
        Action::Edit,
    ];
}

/// Options for [`Router::resources`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Resources<'a> {
    only: Option<&'a [Action]>,
    alias: Option<&'a str>,
}

impl<'a> Resources<'a> {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only(actions: &'a [Action]) -> Self {
        Self {
            only: Some(actions),
            alias: None,
        }
    }

    /// Public path segment to match instead of the resource name. The name
    /// still identifies the handler in the target string.
    pub fn alias(mut self, alias: &'a str) -> Self {
        self.alias = Some(alias);
        self
    }
}

/// Options for the per-verb registration methods.
#[derive(Debug, Clone, Copy)]
pub struct RouteOptions<'a> {
    to: &'a str,
    alias: Option<&'a str>,
}

impl<'a> RouteOptions<'a> {
    pub fn to(to: &'a str) -> Self {
        Self { to, alias: None }
    }

    /// Public path to match instead of the registration path.
    pub fn alias(mut self, alias: &'a str) -> Self {
        self.alias = Some(alias);
        self
    }
}

impl<'a> From<&'a str> for RouteOptions<'a> {
    fn from(to: &'a str) -> Self {
        Self::to(to)
    }
}

macro_rules! define_verb {
    ($name:tt, $try_name:tt, $method:tt) => {
        pub fn $name<'a>(&mut self, path: &str, opts: impl Into<RouteOptions<'a>>) -> &mut Self {
            if let Err(e) = self.try_route(Method::$method, path, opts.into()) {
                panic!("{}: pattern = {:?}", e, path);
            }
            self
        }

        pub fn $try_name<'a>(
            &mut self,
            path: &str,
            opts: impl Into<RouteOptions<'a>>,
        ) -> Result<&mut Self, RouterError> {
            self.try_route(Method::$method, path, opts.into())
        }
    };
}

impl Router {
    /// Groups the routes registered by `body` under `name`.
    ///
    /// Namespace nodes never answer a request themselves; nesting depth is
    /// unbounded.
    pub fn namespace(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        match self.try_namespace(name, body) {
            Ok(r) => r,
            Err(e) => panic!("{}: namespace = {:?}", e, name),
        }
    }

    pub fn try_namespace(
        &mut self,
        name: &str,
        body: impl FnOnce(&mut Self),
    ) -> Result<&mut Self, RouterError> {
        let id = self.attach(name, NodeKind::Namespace, None)?;
        self.scope.push(id);
        body(self);
        self.scope.pop();
        Ok(self)
    }

    /// Expands `name` into the RESTful route set, filtered by `opts`.
    pub fn resources(&mut self, name: &str, opts: Resources<'_>) -> &mut Self {
        match self.try_resources(name, opts) {
            Ok(r) => r,
            Err(e) => panic!("{}: resources = {:?}", e, name),
        }
    }

    pub fn try_resources(
        &mut self,
        name: &str,
        opts: Resources<'_>,
    ) -> Result<&mut Self, RouterError> {
        let public = opts.alias.unwrap_or(name);
        let actions = opts.only.unwrap_or(&Action::ALL);

        for &action in actions {
            let (method, pattern, target) = match action {
                Action::Index => (Method::GET, public.to_owned(), format!("{}#index", name)),
                Action::Show => (
                    Method::GET,
                    format!("{}/:id", public),
                    format!("{}#show", name),
                ),
                Action::Create => (Method::POST, public.to_owned(), format!("{}#create", name)),
                Action::Update => (
                    Method::PUT,
                    format!("{}/:id", public),
                    format!("{}#update", name),
                ),
                Action::Destroy => (
                    Method::DELETE,
                    format!("{}/:id", public),
                    format!("{}#destroy", name),
                ),
                Action::New => (
                    Method::GET,
                    format!("{}/new", public),
                    format!("{}#new", name),
                ),
                Action::Edit => (
                    Method::GET,
                    format!("{}/:id/edit", public),
                    format!("{}#edit", name),
                ),
            };
            self.attach(&pattern, NodeKind::Route(method), Some(&target))?;
        }
        Ok(self)
    }

    pub fn try_route(
        &mut self,
        method: Method,
        path: &str,
        opts: RouteOptions<'_>,
    ) -> Result<&mut Self, RouterError> {
        let pattern = opts.alias.unwrap_or(path);
        self.attach(pattern, NodeKind::Route(method), Some(opts.to))?;
        Ok(self)
    }

    define_verb!(get, try_get, GET);
    define_verb!(post, try_post, POST);
    define_verb!(put, try_put, PUT);
    define_verb!(patch, try_patch, PATCH);
    define_verb!(delete, try_delete, DELETE);
}

impl Router {
    fn attach(
        &mut self,
        segment: &str,
        kind: NodeKind,
        target: Option<&str>,
    ) -> Result<NodeId, RouterError> {
        if segment.is_empty() || segment.split('/').any(|p| p.is_empty()) {
            return Err(RouterError::EmptySegment);
        }

        if let Some(t) = target {
            match t.split_once('#') {
                Some((handler, action)) if !handler.is_empty() && !action.is_empty() => {}
                _ => return Err(RouterError::BadTarget(t.to_owned())),
            }
        }

        let parent = self.scope.last().copied();

        let duplicate = {
            let siblings = match parent {
                Some(p) => &self.nodes[p].children,
                None => &self.roots,
            };
            siblings.iter().any(|&c| {
                let n = &self.nodes[c];
                n.segment.as_ref() == segment && n.kind == kind
            })
        };
        if duplicate {
            return Err(RouterError::Duplicate(segment.to_owned()));
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            segment: segment.into(),
            kind,
            children: Vec::new(),
            target: target.map(Into::into),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }

        debug!(segment, "route registered");
        Ok(id)
    }
}
