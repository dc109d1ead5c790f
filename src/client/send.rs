//! Dispatching a materialized request.

use std::time::Instant;

use log::debug;

use super::response::Response;
use super::{BuilderState, HttpClient};
use crate::error_handling::{categorize_transport_error, HttpClientError};

impl HttpClient {
    /// Sends the request and buffers the full response body.
    ///
    /// Materializes first when the builder is not `Ready`, and stops there if
    /// that fails. Whatever the outcome of the exchange, the builder is back in
    /// `Draft` afterwards and can be reconfigured and sent again.
    ///
    /// Owns the error slot: a completed exchange clears it, an engine or body
    /// read failure replaces it and discards the previous response. Nothing is
    /// returned as `Err`; check [`HttpClient::error`] after every send.
    pub async fn send(&mut self) -> &mut Self {
        if !self.is_ready() {
            self.materialize();
        }
        let materialized = match std::mem::take(&mut self.state) {
            BuilderState::Ready(materialized) => materialized,
            BuilderState::Draft => return self,
        };

        let method = materialized.request.method().clone();
        let url = materialized.request.url().clone();
        debug!("Sending {method} {url}");
        let started = Instant::now();

        let response = match materialized.client.execute(materialized.request).await {
            Ok(response) => response,
            Err(e) => {
                debug!(
                    "{method} {url} failed after {:.3}s ({})",
                    started.elapsed().as_secs_f64(),
                    categorize_transport_error(&e)
                );
                self.response = None;
                self.settle(Err(HttpClientError::Transport(e)));
                return self;
            }
        };

        let status = response.status();
        let version = response.version();
        let final_url = response.url().clone();
        let headers = response.headers().clone();

        match response.bytes().await {
            Ok(body) => {
                debug!(
                    "{method} {url} -> {status} in {:.3}s ({} bytes)",
                    started.elapsed().as_secs_f64(),
                    body.len()
                );
                self.response = Some(Response {
                    status,
                    version,
                    url: final_url,
                    headers,
                    body,
                });
                self.settle(Ok(()));
            }
            Err(e) => {
                self.response = None;
                self.settle(Err(HttpClientError::Body(e)));
            }
        }
        self
    }
}
