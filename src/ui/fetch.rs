//! Keyed fetch tasks for views.
//!
//! Every mounted view owns one [`FetchSlot`]. Each fetch it starts is tagged
//! with a [`FetchTicket`] (mount id + epoch) and reports back on the shared
//! event channel. Only the ticket currently in flight may settle the slot, so
//! results from superseded fetches or from unmounted views are dropped.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::ApiError;
use crate::catalog::{Product, ProductPage};

static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one fetch issued by one mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    mount: u64,
    epoch: u64,
}

impl FetchTicket {
    pub fn mount(&self) -> u64 {
        self.mount
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Result of a catalog call, as delivered to the UI loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Page(Result<ProductPage, ApiError>),
    Product(Result<Option<Product>, ApiError>),
}

#[derive(Debug)]
pub struct FetchEvent {
    pub ticket: FetchTicket,
    pub outcome: FetchOutcome,
}

pub type FetchSender = mpsc::UnboundedSender<FetchEvent>;
pub type FetchReceiver = mpsc::UnboundedReceiver<FetchEvent>;

pub fn channel() -> (FetchSender, FetchReceiver) {
    mpsc::unbounded_channel()
}

/// The fetch state owned by a single mounted view.
///
/// Dropping the slot aborts the task in flight.
#[derive(Debug)]
pub struct FetchSlot {
    mount: u64,
    epoch: u64,
    in_flight: Option<FetchTicket>,
    task: Option<JoinHandle<()>>,
}

impl FetchSlot {
    pub fn new() -> Self {
        Self {
            mount: NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
            in_flight: None,
            task: None,
        }
    }

    /// Starts `fetch`, superseding whatever was in flight.
    pub fn spawn<F>(&mut self, tx: &FetchSender, fetch: F) -> FetchTicket
    where
        F: Future<Output = FetchOutcome> + Send + 'static,
    {
        self.cancel();
        self.epoch += 1;
        let ticket = FetchTicket {
            mount: self.mount,
            epoch: self.epoch,
        };
        tracing::debug!(mount = ticket.mount, epoch = ticket.epoch, "fetch started");

        let tx = tx.clone();
        self.task = Some(tokio::spawn(async move {
            let outcome = fetch.await;
            if tx.send(FetchEvent { ticket, outcome }).is_err() {
                tracing::trace!("fetch result dropped (receiver gone)");
            }
        }));
        self.in_flight = Some(ticket);
        ticket
    }

    /// Accepts `ticket` if it is the fetch in flight, clearing the slot.
    ///
    /// Returns `false` for stale or foreign tickets; the caller must then
    /// leave its state untouched.
    pub fn settle(&mut self, ticket: FetchTicket) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(
                mount = ticket.mount,
                epoch = ticket.epoch,
                current_mount = self.mount,
                current_epoch = self.epoch,
                "discarding stale fetch result"
            );
            return false;
        }
        self.in_flight = None;
        self.task = None;
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn mount(&self) -> u64 {
        self.mount
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.in_flight = None;
    }
}

impl Default for FetchSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FetchSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
