//! Loading state for a single backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page fetch writes into an `RwSignal<Remote<T>>`. Views switch on the
//! variant to show a spinner, an error banner with retry, or the data. Fetches
//! are fire-and-forget; a retry simply starts another one.
//!
//! Fetches that depend on a user selection (a newcomer, a buddy, a
//! leaderboard tab) go through [`spawn_keyed_fetch`]. The result carries the
//! key it was requested for, and an answer that arrives after the selection
//! moved on is discarded instead of being shown against the new selection.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;
use models::ApiError;

/// Lifecycle of one fetched value.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready(T),
    /// Human-readable failure, shown verbatim in the error banner.
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply `f` to a loaded value in place; other states are untouched.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

/// A fetched value tagged with the selection it was requested for.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyed<K, T> {
    pub key: K,
    pub value: T,
}

/// Whether an answer for `requested` still belongs to the `current` selection.
pub fn answers_selection<K: PartialEq>(requested: &K, current: Option<&K>) -> bool {
    current == Some(requested)
}

impl<K: PartialEq, T> Remote<Keyed<K, T>> {
    /// This state as seen from `current`. A loaded value for any other key
    /// reads as [`Remote::Idle`].
    #[must_use]
    pub fn for_selection(self, current: Option<&K>) -> Self {
        match self {
            Self::Ready(keyed) if !answers_selection(&keyed.key, current) => Self::Idle,
            other => other,
        }
    }
}

/// Mark `target` as loading and resolve it from `fetch`.
///
/// On the server the future is dropped unpolled and `target` stays loading
/// until the browser hydrates and fetches for real.
pub fn spawn_fetch<T, F>(target: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Remote::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            log::warn!("fetch failed: {err}");
        }
        let _ = target.try_set(Remote::from_result(result));
    });

    #[cfg(not(feature = "hydrate"))]
    drop(fetch);
}

/// Like [`spawn_fetch`], but for a value requested for `key`.
///
/// `current` reports the selection when the answer lands; if it no longer
/// equals `key` the answer is dropped and `target` is left to the newer fetch.
pub fn spawn_keyed_fetch<K, T, F, C>(target: RwSignal<Remote<Keyed<K, T>>>, key: K, current: C, fetch: F)
where
    K: PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
    C: Fn() -> Option<K> + 'static,
{
    target.set(Remote::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if !answers_selection(&key, current().as_ref()) {
            log::debug!("discarding answer for a previous selection");
            return;
        }
        if let Err(err) = &result {
            log::warn!("fetch failed: {err}");
        }
        let _ = target.try_set(Remote::from_result(result.map(|value| Keyed { key, value })));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, current);
        drop(fetch);
    }
}
