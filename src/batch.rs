//! Concurrent batch dispatch.
//!
//! [`HttpClientMultiple`] owns a list of independent builders and sends them
//! all at once, driving every send concurrently and returning only when each
//! of them has finished. There is no throttling, cancellation or error
//! aggregation: each builder keeps its own error slot, to be inspected after
//! [`HttpClientMultiple::send_all`] returns.

use std::panic::AssertUnwindSafe;
use std::time::Instant;

use futures::future::join_all;
use futures::FutureExt;
use log::{error, info};

use crate::client::HttpClient;

/// An ordered batch of request builders.
#[derive(Debug, Default)]
pub struct HttpClientMultiple {
    clients: Vec<HttpClient>,
}

impl HttpClientMultiple {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a builder.
    pub fn add(&mut self, client: HttpClient) -> &mut Self {
        self.clients.push(client);
        self
    }

    /// Replaces every builder in the batch.
    pub fn set_clients(&mut self, clients: Vec<HttpClient>) -> &mut Self {
        self.clients = clients;
        self
    }

    /// Builders in insertion order.
    pub fn clients(&self) -> &[HttpClient] {
        &self.clients
    }

    /// Mutable access to the builders, e.g. to reconfigure before a resend.
    pub fn clients_mut(&mut self) -> &mut [HttpClient] {
        &mut self.clients
    }

    /// Consumes the batch, returning its builders in insertion order.
    pub fn into_clients(self) -> Vec<HttpClient> {
        self.clients
    }

    /// Number of builders.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Builders whose error slot is set, with their position in the batch.
    pub fn failed(&self) -> impl Iterator<Item = (usize, &HttpClient)> {
        self.clients
            .iter()
            .enumerate()
            .filter(|(_, client)| client.error().is_some())
    }

    /// Sends every builder concurrently and waits for all of them.
    ///
    /// The sends are driven in place, so the builders stay in insertion order
    /// and remain owned by the batch for the whole dispatch. If this future is
    /// dropped early (a caller's timeout, a `select!`), every builder is still
    /// in the batch: the ones that finished carry their outcome, the
    /// interrupted ones are back in `Draft` with their previous response and
    /// error slot. A panic inside one send is re-raised here once every other
    /// send has finished.
    pub async fn send_all(&mut self) -> &mut Self {
        if self.clients.is_empty() {
            return self;
        }

        let started = Instant::now();
        let outcomes = join_all(
            self.clients
                .iter_mut()
                .map(|client| AssertUnwindSafe(client.send()).catch_unwind()),
        )
        .await;

        let mut panic_payload = None;
        for (i, outcome) in outcomes.into_iter().enumerate() {
            if let Err(payload) = outcome {
                error!("Batch request {i} panicked during send");
                panic_payload.get_or_insert(payload);
            }
        }
        if let Some(payload) = panic_payload {
            std::panic::resume_unwind(payload);
        }

        info!(
            "Batch of {} request(s) finished in {:.3}s, {} failed",
            self.clients.len(),
            started.elapsed().as_secs_f64(),
            self.failed().count()
        );
        self
    }
}
