// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tencentcloud_pagination::{OffsetPaged, PagedResponse, collect_all, collect_all_concurrent};

#[derive(Debug, Clone, Default)]
struct ListRequest {
    offset: Option<i64>,
    limit: Option<i64>,
}

impl OffsetPaged for ListRequest {
    fn set_page(&mut self, offset: i64, limit: i64) {
        self.offset = Some(offset);
        self.limit = Some(limit);
    }
}

struct ListResponse {
    total: Option<i64>,
    items: Vec<i64>,
}

impl PagedResponse for ListResponse {
    type Item = i64;

    fn total_count(&self) -> Option<i64> {
        self.total
    }

    fn into_items(self) -> Vec<i64> {
        self.items
    }
}

/// Serves `0..size` with an optional TotalCount
#[derive(Clone)]
struct Backend {
    size: i64,
    report_total: bool,
    calls: Arc<AtomicUsize>,
    fail_at: Option<i64>,
}

impl Backend {
    fn new(size: i64) -> Self {
        Self {
            size,
            report_total: true,
            calls: Arc::new(AtomicUsize::new(0)),
            fail_at: None,
        }
    }

    async fn fetch(&self, req: ListRequest) -> Result<ListResponse, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let offset = req.offset.unwrap();
        let limit = req.limit.unwrap();
        if self.fail_at == Some(offset) {
            return Err(format!("page at {offset} failed"));
        }
        // Later pages answer faster so out-of-order completion is exercised.
        tokio::time::sleep(Duration::from_millis((self.size - offset).max(0) as u64)).await;
        let end = (offset + limit).min(self.size);
        Ok(ListResponse {
            total: self.report_total.then_some(self.size),
            items: (offset..end.max(offset)).collect(),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[tokio::test]
async fn test_collect_all_walks_every_page() {
    let backend = Backend::new(25);
    let items = collect_all(&ListRequest::default(), 10, |req| backend.fetch(req))
        .await
        .unwrap();
    assert_eq!(items, (0..25).collect::<Vec<_>>());
    assert_eq!(backend.calls(), 3);
}

#[tokio::test]
async fn test_collect_all_stops_at_total_count() {
    // exact multiple of the page size: TotalCount avoids an empty extra call
    let backend = Backend::new(20);
    let items = collect_all(&ListRequest::default(), 10, |req| backend.fetch(req))
        .await
        .unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn test_collect_all_without_total_count() {
    let mut backend = Backend::new(20);
    backend.report_total = false;
    let items = collect_all(&ListRequest::default(), 10, |req| backend.fetch(req))
        .await
        .unwrap();
    assert_eq!(items.len(), 20);
    // the third, empty page ends the walk
    assert_eq!(backend.calls(), 3);
}

#[tokio::test]
async fn test_collect_all_empty() {
    let backend = Backend::new(0);
    let items = collect_all(&ListRequest::default(), 10, |req| backend.fetch(req))
        .await
        .unwrap();
    assert!(items.is_empty());
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_collect_all_propagates_error() {
    let mut backend = Backend::new(30);
    backend.fail_at = Some(10);
    let err = collect_all(&ListRequest::default(), 10, |req| backend.fetch(req))
        .await
        .unwrap_err();
    assert_eq!(err, "page at 10 failed");
}

#[tokio::test]
async fn test_concurrent_keeps_page_order() {
    let backend = Backend::new(95);
    let items = collect_all_concurrent(&ListRequest::default(), 10, 4, |req| backend.fetch(req))
        .await
        .unwrap();
    assert_eq!(items, (0..95).collect::<Vec<_>>());
    assert_eq!(backend.calls(), 10);
}

#[tokio::test]
async fn test_concurrent_single_page() {
    let backend = Backend::new(3);
    let items = collect_all_concurrent(&ListRequest::default(), 10, 4, |req| backend.fetch(req))
        .await
        .unwrap();
    assert_eq!(items, vec![0, 1, 2]);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_concurrent_first_error_aborts() {
    let mut backend = Backend::new(50);
    backend.fail_at = Some(30);
    let err = collect_all_concurrent(&ListRequest::default(), 10, 2, |req| backend.fetch(req))
        .await
        .unwrap_err();
    assert_eq!(err, "page at 30 failed");
}

#[tokio::test]
async fn test_concurrent_falls_back_without_total() {
    let mut backend = Backend::new(25);
    backend.report_total = false;
    let items = collect_all_concurrent(&ListRequest::default(), 10, 4, |req| backend.fetch(req))
        .await
        .unwrap();
    assert_eq!(items, (0..25).collect::<Vec<_>>());
}
