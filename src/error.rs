use std::{error, fmt, result};

use crate::response::Response;

pub type Result<T = Response, E = Error> = result::Result<T, E>;

/// A type-erased rejection reason.
///
/// Wraps whatever error value a handler signalled, verbatim. No
/// classification or translation happens here; the original value stays
/// reachable through [`inner`](Error::inner) and
/// [`downcast_ref`](Error::downcast_ref).
pub struct Error {
    e: Box<dyn error::Error + Send + Sync>,
}

impl Error {
    pub fn new(e: impl error::Error + Send + Sync + 'static) -> Self {
        Self { e: Box::new(e) }
    }

    pub fn inner(&self) -> &(dyn error::Error + Send + Sync) {
        self.e.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn error::Error + Send + Sync> {
        self.e
    }

    pub fn downcast_ref<T: error::Error + 'static>(&self) -> Option<&T> {
        self.e.downcast_ref::<T>()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.e, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", &self.e)
    }
}

/// `Error` for any error type
///
/// Note: `Error` itself does not implement `std::error::Error`, otherwise
/// this impl would overlap the reflexive `From`.
impl<T: error::Error + Send + Sync + 'static> From<T> for Error {
    fn from(e: T) -> Error {
        Error::new(e)
    }
}
