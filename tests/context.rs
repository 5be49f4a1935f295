use futures::executor::block_on;
use futures::future::BoxFuture;
use http::StatusCode;
use hyper::Method;
use std::sync::{Arc, Mutex};

use gangway::{Context, Middleware, Request, Result};

#[derive(Debug)]
struct State {}

fn request(uri: &str) -> Request {
    hyper::Request::builder()
        .uri(uri)
        .body(hyper::Body::empty())
        .unwrap()
}

#[test]
fn context_accessors() {
    let cx = Context::new(
        Arc::new(State {}),
        request("https://crates.io/search?q=web"),
        Vec::new(),
    );

    assert_eq!(cx.method(), &Method::GET);
    assert_eq!(cx.path(), "/search");
    assert_eq!(cx.query_string(), "q=web");
}

#[test]
fn an_empty_chain_yields_the_response() {
    let cx = Context::new(Arc::new(State {}), request("http://localhost/"), Vec::new());

    let res = block_on(cx.next()).unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[test]
fn middleware_runs_in_registration_order() {
    fn wrapping(
        name: &'static str,
        order: Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn Middleware<Context<State>>> {
        Arc::new(move |cx: Context<State>| -> BoxFuture<'static, Result> {
            let order = order.clone();
            Box::pin(async move {
                order.lock().unwrap().push(name);
                let res = cx.next().await;
                order.lock().unwrap().push(name);
                res
            })
        })
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let cx = Context::new(
        Arc::new(State {}),
        request("http://localhost/"),
        vec![wrapping("a", order.clone()), wrapping("b", order.clone())],
    );

    block_on(cx.next()).unwrap();

    assert_eq!(*order.lock().unwrap(), ["a", "b", "b", "a"]);
}
