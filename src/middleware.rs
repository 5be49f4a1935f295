//! Middleware traits
//!
//! Thanks to repos:
//!     * https://github.com/koajs/compose/blob/master/index.js
//!     * https://github.com/senchalabs/connect
//!     * https://github.com/rustasync/tide/blob/master/tide-core/src/middleware.rs

use futures::future::BoxFuture;

use crate::error::Result;

pub trait Middleware<Context, Output = Result>: Send + Sync {
    fn call<'a>(&'a self, cx: Context) -> BoxFuture<'a, Output>;
}

impl<Context, Output, F> Middleware<Context, Output> for F
where
    F: Send + Sync + 'static + Fn(Context) -> BoxFuture<'static, Output>,
{
    fn call<'a>(&'a self, cx: Context) -> BoxFuture<'a, Output> {
        (self)(cx)
    }
}
