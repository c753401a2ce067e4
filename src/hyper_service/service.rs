use super::controller::{BoxController, Controller, ControllerSet};
use super::params::OwnedParams;
use super::{BoxError, BoxFuture, Request, Response};
use crate::router::Router;

use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use tracing::debug;

/// Dispatch layer: resolves each request against a shared immutable route
/// tree, looks up the named controller and invokes the action. Cloning is
/// cheap; clones share the tree and registry.
pub struct RouterService {
    inner: Arc<Inner>,
}

struct Inner {
    router: Router,
    controllers: ControllerSet,
    fallback: BoxController,
}

impl Clone for RouterService {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl RouterService {
    /// Registration must be complete before the service is built; the tree
    /// is shared read-only afterwards.
    pub fn new(router: Router, controllers: ControllerSet) -> Self {
        Self::with_fallback(router, controllers, not_found)
    }

    pub fn with_fallback(
        router: Router,
        controllers: ControllerSet,
        fallback: impl Controller + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                router,
                controllers,
                fallback: Box::new(fallback),
            }),
        }
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let inner = self.inner.clone();
        let method = req.method().clone();
        let path = req.uri().path();

        let (controller, action, params) = match inner.router.resolve(path, &method) {
            Some(target) => match inner.controllers.find(target.handler) {
                Some(controller) => (
                    controller,
                    target.action.to_owned(),
                    OwnedParams::new(path, &target),
                ),
                None => {
                    debug!(handler = target.handler, "no controller registered");
                    (&inner.fallback, String::new(), OwnedParams::empty())
                }
            },
            None => (&inner.fallback, String::new(), OwnedParams::empty()),
        };

        controller.call(action, req, params)
    }
}

async fn not_found(
    _action: String,
    _req: Request,
    _params: OwnedParams,
) -> Result<Response, http::Error> {
    let res = hyper::Response::builder()
        .status(404)
        .header("content-type", "application/json")
        .body(hyper::Body::from(r#"{"error":"Not found"}"#))?;
    Ok(res)
}
