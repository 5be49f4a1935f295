//! Handler traits
//!
//! Plain async functions terminate a chain; these helpers erase their
//! concrete types so they can be stored as middleware.

use futures::future::{BoxFuture, Future, FutureExt};

use crate::error::Result;
use crate::middleware::Middleware;
use crate::response::IntoResponse;

pub trait Handler<Context>: Send + Sync + 'static {
    type Fut: Future<Output = Result> + Send + 'static;

    fn call(&self, cx: Context) -> Self::Fut;
}

impl<Context, F, Fut> Handler<Context> for F
where
    F: Send + Sync + 'static + Fn(Context) -> Fut,
    Fut: Future + Send + 'static,
    Fut::Output: IntoResponse + Send + 'static,
{
    type Fut = BoxFuture<'static, Result>;

    fn call(&self, cx: Context) -> Self::Fut {
        let fut = (self)(cx);
        Box::pin(async move { Ok(fut.await.into_response()) })
    }
}

pub type DynHandler<Context> =
    dyn (Fn(Context) -> BoxFuture<'static, Result>) + 'static + Send + Sync;

pub fn into_dyn_handler<Context>(f: impl Handler<Context>) -> Box<DynHandler<Context>> {
    Box::new(move |cx| f.call(cx).boxed())
}

pub fn into_middleware<Context>(f: impl Handler<Context>) -> impl Middleware<Context>
where
    Context: Send + 'static,
{
    let f = into_dyn_handler(f);
    Box::new(move |cx| (f)(cx))
}
