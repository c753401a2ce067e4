#![forbid(unsafe_code)]

mod controller;
mod params;
mod service;

pub use self::controller::{BoxController, Controller, ControllerSet};
pub use self::params::OwnedParams;
pub use self::service::RouterService;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

type Request = hyper::Request<hyper::Body>;
type Response = hyper::Response<hyper::Body>;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;
