// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Offset/limit pagination for `Describe*` actions
//!
//! Most list actions take `Offset`/`Limit` and answer with a `TotalCount`
//! plus one page of items. The helpers here walk every page of such an
//! action given a closure that performs one call.
//!
//! ```ignore
//! let instances = collect_all(&request, 100, |page| async move {
//!     client.describe_instances(&page).await
//! })
//! .await?;
//! ```

use std::future::Future;

use futures_util::{StreamExt, TryStreamExt, stream};

/// A request that accepts `Offset` and `Limit`
pub trait OffsetPaged: Clone {
    fn set_page(&mut self, offset: i64, limit: i64);
}

/// A response holding one page of items
pub trait PagedResponse {
    type Item;

    /// Total number of items across all pages, when the action reports it
    fn total_count(&self) -> Option<i64>;

    fn into_items(self) -> Vec<Self::Item>;
}

fn page_of<Req: OffsetPaged>(request: &Req, offset: i64, limit: i64) -> Req {
    let mut page = request.clone();
    page.set_page(offset, limit);
    page
}

/// Fetch pages one after another starting at offset 0
///
/// Stops on a short or empty page, or once `TotalCount` items have been
/// collected. `page_size` below 1 is treated as 1.
pub async fn collect_all<Req, Resp, E, F, Fut>(
    request: &Req,
    page_size: i64,
    mut fetch: F,
) -> Result<Vec<Resp::Item>, E>
where
    Req: OffsetPaged,
    Resp: PagedResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp, E>>,
{
    let page_size = page_size.max(1);
    let mut items = Vec::new();
    let mut offset = 0;

    loop {
        let response = fetch(page_of(request, offset, page_size)).await?;
        let total = response.total_count();
        let batch = response.into_items();
        let fetched = batch.len() as i64;
        items.extend(batch);
        offset += fetched;

        tracing::trace!(offset, fetched, ?total, "fetched page");

        if fetched < page_size {
            break;
        }
        if let Some(total) = total
            && offset >= total
        {
            break;
        }
    }

    Ok(items)
}

/// Fetch the first page, then the remaining pages with up to
/// `max_concurrency` calls in flight
///
/// Items come back in page order. The first failed page aborts the walk.
/// Actions that do not report `TotalCount` fall back to sequential paging.
pub async fn collect_all_concurrent<Req, Resp, E, F, Fut>(
    request: &Req,
    page_size: i64,
    max_concurrency: usize,
    fetch: F,
) -> Result<Vec<Resp::Item>, E>
where
    Req: OffsetPaged,
    Resp: PagedResponse,
    F: Fn(Req) -> Fut,
    Fut: Future<Output = Result<Resp, E>>,
{
    let page_size = page_size.max(1);
    let first = fetch(page_of(request, 0, page_size)).await?;
    let total = first.total_count();
    let mut items = first.into_items();
    let fetched = items.len() as i64;

    if fetched < page_size {
        return Ok(items);
    }
    let Some(total) = total else {
        let mut rest = collect_all(&RestFrom::new(request, fetched), page_size, |page| {
            fetch(page.inner)
        })
        .await?;
        items.append(&mut rest);
        return Ok(items);
    };

    let offsets: Vec<i64> = (fetched..total)
        .step_by(usize::try_from(page_size).unwrap_or(usize::MAX))
        .collect();
    tracing::debug!(total, pages = offsets.len() + 1, "fetching remaining pages concurrently");

    let pages: Vec<Resp> = stream::iter(
        offsets
            .into_iter()
            .map(|offset| fetch(page_of(request, offset, page_size))),
    )
    .buffered(max_concurrency.max(1))
    .try_collect()
    .await?;

    for page in pages {
        items.extend(page.into_items());
    }
    Ok(items)
}

/// Shifts every offset of the wrapped request by a fixed amount
#[derive(Clone)]
struct RestFrom<Req> {
    inner: Req,
    base: i64,
}

impl<Req: OffsetPaged> RestFrom<Req> {
    fn new(request: &Req, base: i64) -> Self {
        Self {
            inner: request.clone(),
            base,
        }
    }
}

impl<Req: OffsetPaged> OffsetPaged for RestFrom<Req> {
    fn set_page(&mut self, offset: i64, limit: i64) {
        self.inner.set_page(self.base + offset, limit);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Req {
        offset: i64,
        limit: i64,
    }

    impl OffsetPaged for Req {
        fn set_page(&mut self, offset: i64, limit: i64) {
            self.offset = offset;
            self.limit = limit;
        }
    }

    #[test]
    fn test_rest_from_shifts_offset() {
        let mut rest = RestFrom::new(&Req::default(), 10);
        rest.set_page(5, 5);
        assert_eq!(rest.inner.offset, 15);
        assert_eq!(rest.inner.limit, 5);
    }
}
