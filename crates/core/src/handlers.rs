//! Function-shaped contracts.
//!
//! Each trait is blanket-implemented for the matching closure signature, so
//! plain functions and closures satisfy them without wrapper types.

use async_trait::async_trait;
use std::future::Future;

/// Receives events of type `T`.
pub trait EventHandler<T> {
    fn handle(&self, event: T);
}

impl<T, F> EventHandler<T> for F
where
    F: Fn(T),
{
    fn handle(&self, event: T) {
        self(event)
    }
}

/// A deferred computation producing `T`. May be run more than once.
#[async_trait]
pub trait AsyncOperation<T>: Send + Sync {
    async fn run(&self) -> T;
}

#[async_trait]
impl<T, F, Fut> AsyncOperation<T> for F
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send + 'static,
{
    async fn run(&self) -> T {
        self().await
    }
}

/// Accepts or rejects a value.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> bool;
}

impl<T, F> Validator<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn validate(&self, value: &T) -> bool {
        self(value)
    }
}
