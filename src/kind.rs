//! Handler kinds
//!
//! Dynamic runtimes can ask a function value how it was declared; here the
//! declaration kind is an explicit tag assigned when the handler is
//! registered.

/// How a handler was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// A plain function.
    Ordinary,
    /// Declared with generator semantics: yields a lazy, pausable sequence.
    Generator,
    /// Declared as an async function.
    Async,
}

impl HandlerKind {
    pub fn is_generator(self) -> bool {
        self == HandlerKind::Generator
    }
}

/// A handler together with its declaration kind.
#[derive(Debug, Clone)]
pub struct Tagged<H> {
    kind: HandlerKind,
    inner: H,
}

impl<H> Tagged<H> {
    pub fn new(kind: HandlerKind, inner: H) -> Self {
        Self { kind, inner }
    }

    pub fn ordinary(inner: H) -> Self {
        Self::new(HandlerKind::Ordinary, inner)
    }

    pub fn generator(inner: H) -> Self {
        Self::new(HandlerKind::Generator, inner)
    }

    pub fn asynchronous(inner: H) -> Self {
        Self::new(HandlerKind::Async, inner)
    }

    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    pub fn get(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

/// Whether `handler` is present and was declared with generator semantics.
///
/// An absent handler is never a generator; the tag is not read in that case.
pub fn is_generator<H>(handler: Option<&Tagged<H>>) -> bool {
    match handler {
        Some(tagged) => tagged.kind().is_generator(),
        None => false,
    }
}
