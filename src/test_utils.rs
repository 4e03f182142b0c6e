// SPDX-License-Identifier: MPL-2.0
//! Test doubles shared by unit tests.

use crate::application::port::{Delivery, UploadRequest, WebhookTransport};
use std::sync::{Arc, Mutex};

/// Transport that records every request and replies with a fixed delivery.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    reply: Delivery,
    requests: Arc<Mutex<Vec<UploadRequest>>>,
}

impl RecordingTransport {
    pub fn replying(reply: Delivery) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<UploadRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

impl WebhookTransport for RecordingTransport {
    async fn send(&self, request: UploadRequest) -> Delivery {
        self.requests.lock().expect("lock poisoned").push(request);
        self.reply.clone()
    }
}
