use futures::future::BoxFuture;
use std::time::Instant;

use crate::context::Context;
use crate::error::Result;
use crate::middleware::Middleware;

/// Logs each dispatch: a trace line going in, an info or error line on the
/// way out.
#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<State: Send + Sync + 'static> Middleware<Context<State>> for Logger {
    fn call<'a>(&'a self, cx: Context<State>) -> BoxFuture<'a, Result> {
        Box::pin(async move {
            let start = Instant::now();
            let path = cx.path().to_owned();
            let method = cx.method().as_str().to_owned();
            log::trace!("IN => {} {}", method, path);
            let res = cx.next().await;
            match &res {
                Ok(res) => log::info!(
                    "{} {} {} {}ms",
                    method,
                    path,
                    res.status().as_str(),
                    start.elapsed().as_millis()
                ),
                Err(err) => log::error!(
                    "{} {} {} {}ms",
                    method,
                    path,
                    err,
                    start.elapsed().as_millis()
                ),
            }
            res
        })
    }
}
