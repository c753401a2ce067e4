#![deny(unsafe_code)]

mod router;

#[cfg(feature = "hyper-service")]
mod hyper_service;

pub use self::router::{hex_id, Action, Params, Resources, RouteOptions, Router, RouterError, Target};

pub use http::Method;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{BoxController, Controller, ControllerSet, OwnedParams, RouterService};
