//! Gangway - run connect-style handlers on a futures middleware chain.
//!
//! A connect-style handler takes `(request, response, done)` and signals
//! completion by invoking `done`. A chain middleware takes a [`Context`] and
//! returns a future. [`ConnectMiddleware`] bridges the first convention into
//! the second: the completion callback settles a one-shot cell, and the chain
//! advances only when the handler signalled success.

#![deny(unsafe_code)]
#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    missing_debug_implementations
)]

pub mod connect;

pub mod context;

pub mod error;

pub mod handler;

pub mod kind;

pub mod logger;

pub mod middleware;

pub mod request;

pub mod response;

#[doc(inline)]
pub use crate::{
    connect::{Connect, ConnectMiddleware, Done, Hangup},
    context::Context,
    error::{Error, Result},
    handler::{into_dyn_handler, into_middleware, DynHandler, Handler},
    kind::{is_generator, HandlerKind, Tagged},
    logger::Logger,
    middleware::Middleware,
    request::Request,
    response::{json, IntoResponse, Response},
};
