//! Wires the console's tickets to a debounce timer and a [`FabricSearch`].
//!
//! The driver never spawns anything itself. Operations that schedule work
//! hand back a future and the caller spawns it on whatever executor it runs
//! (`dioxus::prelude::spawn` in the app, a `LocalSet` in tests).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use shared_types::QueryPatch;

use crate::client::FabricSearch;
use crate::console::{BuyerConsole, MergeOutcome, Ticket};
use crate::debounce::Debouncer;

/// Shared, single-threaded access to a [`BuyerConsole`].
///
/// The app implements this over a reactive signal so that every mutation
/// re-renders; tests use a plain `Rc<RefCell<_>>`.
pub trait ConsoleStore: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> R;
    fn read<R>(&self, f: impl FnOnce(&BuyerConsole) -> R) -> R;

    /// Like [`update`](Self::update), but returns `None` instead of panicking
    /// when the console is borrowed elsewhere or already dropped.
    fn try_update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> Option<R>;
}

impl ConsoleStore for Rc<RefCell<BuyerConsole>> {
    fn update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read<R>(&self, f: impl FnOnce(&BuyerConsole) -> R) -> R {
        f(&self.borrow())
    }

    fn try_update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut console| f(&mut console))
    }
}

/// Gives a ticket back to the console if the task holding it is dropped
/// before it settles.
struct Release<C: ConsoleStore> {
    store: C,
    ticket: Option<Ticket>,
}

impl<C: ConsoleStore> Release<C> {
    /// The task settled on its own.
    fn disarm(&mut self) {
        self.ticket = None;
    }
}

impl<C: ConsoleStore> Drop for Release<C> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.store.try_update(|console| console.abandon(ticket));
        }
    }
}

pub struct SearchDriver<C, S> {
    store: C,
    search: Rc<S>,
    debouncer: Rc<RefCell<Debouncer>>,
}

impl<C: Clone, S> Clone for SearchDriver<C, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            search: self.search.clone(),
            debouncer: self.debouncer.clone(),
        }
    }
}

impl<C, S> SearchDriver<C, S>
where
    C: ConsoleStore,
    S: FabricSearch + 'static,
{
    pub fn new(store: C, search: S, debounce: Duration) -> Self {
        Self {
            store,
            search: Rc::new(search),
            debouncer: Rc::new(RefCell::new(Debouncer::new(debounce))),
        }
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    /// Apply a query edit. Returns the debounced fetch to spawn, if any.
    pub fn update_query(&self, patch: QueryPatch) -> Option<LocalBoxFuture<'static, ()>> {
        match self.store.update(|console| console.update_query(patch)) {
            Some(ticket) => Some(self.arm(ticket)),
            None => {
                self.debouncer.borrow_mut().cancel();
                None
            }
        }
    }

    /// Request the next page. Returns the debounced fetch to spawn, if any.
    pub fn load_more(&self) -> Option<LocalBoxFuture<'static, ()>> {
        self.store
            .update(|console| console.load_more())
            .map(|ticket| self.arm(ticket))
    }

    /// Drop any scheduled fetch that has not fired yet.
    pub fn cancel_pending(&self) {
        self.debouncer.borrow_mut().cancel();
        self.store.update(|console| console.cancel_pending());
    }

    fn arm(&self, ticket: Ticket) -> LocalBoxFuture<'static, ()> {
        let store = self.store.clone();
        let search = self.search.clone();
        let mut release = Release {
            store: store.clone(),
            ticket: Some(ticket),
        };

        let task = async move {
            let Some(request) = store.update(|console| console.fire(ticket)) else {
                return;
            };
            let result = search.find_fabrics(&request.params).await;
            let outcome = store.update(|console| console.complete(request, result));
            release.disarm();
            if let MergeOutcome::Applied = outcome {
                store.read(|console| {
                    tracing::debug!(
                        items = console.items().len(),
                        total = console.total(),
                        has_more = console.has_more(),
                        "fabric search merged"
                    )
                });
            }
        };

        self.debouncer.borrow_mut().schedule(task).boxed_local()
    }
}
