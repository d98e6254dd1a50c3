// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client-side per-action request limiter
//!
//! Each action gets a fixed one-second window. Once `limit` requests have
//! started inside the window, further callers sleep until it rolls over.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

const WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct ActionRateLimiter {
    limit: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl ActionRateLimiter {
    /// `None` when `limit` is zero, meaning unlimited
    pub fn new(limit: u32) -> Option<Self> {
        (limit > 0).then(|| Self {
            limit,
            windows: Mutex::new(HashMap::new()),
        })
    }

    /// Wait until `action` may send another request
    pub async fn acquire(&self, action: &str) {
        loop {
            let wait = {
                let mut windows = self.windows.lock().await;
                let now = Instant::now();
                let window = windows.entry(action.to_string()).or_insert(Window {
                    started: now,
                    count: 0,
                });
                if now.duration_since(window.started) >= WINDOW {
                    window.started = now;
                    window.count = 0;
                }
                if window.count < self.limit {
                    window.count += 1;
                    return;
                }
                WINDOW.saturating_sub(now.duration_since(window.started))
            };
            tracing::debug!(action, wait_ms = wait.as_millis() as u64, "client rate limit reached");
            tokio::time::sleep(wait).await;
        }
    }
}
