use super::params::OwnedParams;
use super::{BoxError, BoxFuture, Future, Request, Response, StdError};

use std::collections::HashMap;

/// One handler from the registry: receives the decoded action name and
/// dispatches it internally.
pub trait Controller {
    fn call(
        &self,
        action: String,
        req: Request,
        params: OwnedParams,
    ) -> BoxFuture<'static, Result<Response, BoxError>>;
}

pub type BoxController = Box<dyn Controller + Send + Sync>;

impl Controller for BoxController {
    fn call(
        &self,
        action: String,
        req: Request,
        params: OwnedParams,
    ) -> BoxFuture<'static, Result<Response, BoxError>> {
        Controller::call(&**self, action, req, params)
    }
}

impl<F, E, Fut> Controller for F
where
    F: Fn(String, Request, OwnedParams) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(
        &self,
        action: String,
        req: Request,
        params: OwnedParams,
    ) -> BoxFuture<'static, Result<Response, BoxError>> {
        let fut = (self)(action, req, params);
        Box::pin(async move {
            match fut.await {
                Ok(r) => Ok(r),
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}

/// Handler registry: maps the handler names produced by the router to
/// statically known controllers, populated once at startup.
#[derive(Default)]
pub struct ControllerSet {
    map: HashMap<Box<str>, BoxController>,
}

impl ControllerSet {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn register(
        &mut self,
        name: &str,
        controller: impl Controller + Send + Sync + 'static,
    ) -> &mut Self {
        self.map.insert(name.into(), Box::new(controller));
        self
    }

    pub fn find(&self, name: &str) -> Option<&BoxController> {
        self.map.get(name)
    }
}
