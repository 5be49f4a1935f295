//! Bridges connect-style handlers onto the middleware chain.
//!
//! Thanks to repos:
//!     * https://github.com/senchalabs/connect
//!     * https://github.com/vkurchatkin/koa-connect/blob/master/index.js

use futures::channel::oneshot;
use futures::future::BoxFuture;
use std::{
    error, fmt,
    sync::{Arc, Mutex},
};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::middleware::Middleware;
use crate::request::Request;
use crate::response::Response;

/// A connect-style handler: `(request, response, done)`.
///
/// The handler is called synchronously with borrowed request and response
/// handles and must eventually settle the [`Done`] it was given - either
/// inline or later from another task it moved the handle into.
pub trait Connect: Send + Sync + 'static {
    fn call(&self, req: &mut Request, res: &mut Response, done: Done);
}

impl<F> Connect for F
where
    F: Fn(&mut Request, &mut Response, Done) + Send + Sync + 'static,
{
    fn call(&self, req: &mut Request, res: &mut Response, done: Done) {
        (self)(req, res, done)
    }
}

type Signal = oneshot::Sender<Result<()>>;

/// One-shot completion handle handed to a [`Connect`] handler.
///
/// The first settlement wins; `resolve` and `reject` after that are no-ops.
#[derive(Clone)]
pub struct Done {
    tx: Arc<Mutex<Option<Signal>>>,
}

impl Done {
    /// Create a handle together with the receiving end the bridge waits on.
    pub fn pair() -> (Done, oneshot::Receiver<Result<()>>) {
        let (tx, rx) = oneshot::channel();
        (
            Done {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    /// Signal success. The chain advances.
    pub fn resolve(&self) {
        self.settle(Ok(()));
    }

    /// Signal failure with `err`, forwarded verbatim as the rejection reason.
    pub fn reject(&self, err: impl Into<Error>) {
        self.settle(Err(err.into()));
    }

    fn settle(&self, outcome: Result<()>) {
        if let Some(tx) = self.tx.lock().unwrap().take() {
            let _ = tx.send(outcome);
        }
    }
}

impl fmt::Debug for Done {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Done").finish()
    }
}

/// Rejection reason used when a handler drops its [`Done`] without
/// settling it.
#[derive(Debug)]
pub struct Hangup;

impl fmt::Display for Hangup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connect handler went away without signalling completion")
    }
}

impl error::Error for Hangup {}

enum Provider {
    Direct(Arc<dyn Connect>),
    Factory(Box<dyn Fn() -> Box<dyn Connect> + Send + Sync>),
}

/// Middleware that runs a connect-style handler.
///
/// Register the handler itself with [`new`](ConnectMiddleware::new), or a
/// zero-argument factory with [`factory`](ConnectMiddleware::factory); a
/// factory is invoked once per dispatch to obtain the handler. Which of the
/// two applies is fixed here, at wrap time.
///
/// On success the downstream outcome is adopted as-is; on failure the chain
/// is never advanced.
pub struct ConnectMiddleware {
    provider: Provider,
}

impl ConnectMiddleware {
    pub fn new(handler: impl Connect) -> Self {
        Self {
            provider: Provider::Direct(Arc::new(handler)),
        }
    }

    pub fn factory(make: impl Fn() -> Box<dyn Connect> + Send + Sync + 'static) -> Self {
        Self {
            provider: Provider::Factory(Box::new(make)),
        }
    }
}

impl<State: Send + Sync + 'static> Middleware<Context<State>> for ConnectMiddleware {
    fn call<'a>(&'a self, mut cx: Context<State>) -> BoxFuture<'a, Result> {
        Box::pin(async move {
            let (done, signal) = Done::pair();

            log::trace!("connect: {} {}", cx.method(), cx.path());

            match &self.provider {
                Provider::Direct(handler) => {
                    let (req, res) = cx.parts_mut();
                    handler.call(req, res, done);
                }
                Provider::Factory(make) => {
                    let handler = make();
                    let (req, res) = cx.parts_mut();
                    handler.call(req, res, done);
                }
            }

            match signal.await {
                Ok(Ok(())) => cx.next().await,
                Ok(Err(err)) => Err(err),
                Err(oneshot::Canceled) => Err(Hangup.into()),
            }
        })
    }
}

impl fmt::Debug for ConnectMiddleware {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ConnectMiddleware").finish()
    }
}
