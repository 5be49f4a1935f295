use http::header::CONTENT_TYPE;
use http::status::StatusCode;
use hyper::Body;

/// An HTTP response with a streaming body.
pub type Response = hyper::Response<Body>;

pub trait IntoResponse: Send + Sized {
    fn into_response(self) -> Response;
}

impl IntoResponse for () {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        http::Response::builder()
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(Body::from(self))
            .unwrap()
    }
}

impl IntoResponse for &'_ str {
    fn into_response(self) -> Response {
        self.to_string().into_response()
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        http::Response::builder()
            .status(self)
            .body(Body::empty())
            .unwrap()
    }
}

impl<T> IntoResponse for http::Response<T>
where
    T: Send + Into<Body>,
{
    fn into_response(self) -> Response {
        self.map(Into::into)
    }
}

pub fn json<T>(t: &T) -> Response
where
    T: serde::Serialize,
{
    let res = http::Response::builder();

    match serde_json::to_vec(t) {
        Ok(v) => res
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(v)),
        Err(e) => {
            log::error!("{}", e);
            res.status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::empty())
        }
    }
    .unwrap()
}
