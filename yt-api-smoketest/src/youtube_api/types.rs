//! Paging machinery shared by the list endpoints.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

/// One page of results plus the continuation token for the page after it.
pub type Page<T> = (VecDeque<T>, Option<String>);

type PendingPage<'a, F, T> = Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + Send + 'a>>;

/// A stream over a cursor-paginated YouTube list endpoint.
///
/// Items are yielded one at a time. The next page is only requested once the
/// current one has been drained, so a consumer that stops early (for example
/// after reaching a result ceiling) never triggers another request. The stream
/// ends after the first page without a `nextPageToken`, or right after
/// yielding the first error.
pub struct PagedStream<'a, T, F> {
    /// Items of the last fetched page not yet handed out.
    buffered: VecDeque<T>,
    /// The request for the next page. It owns the fetcher and hands it back
    /// together with the page, so no two page requests ever coexist.
    in_flight: Option<PendingPage<'a, F, T>>,
    /// Set once the last page arrived or a fetch failed.
    exhausted: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Creates a stream whose pages come from `fetcher`.
    ///
    /// `fetcher` is called with `None` for the first page and with the
    /// previous page's continuation token afterwards.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
    {
        let first = async move {
            let page = fetcher(None).await?;
            Ok((fetcher, page))
        };
        Self {
            buffered: VecDeque::new(),
            in_flight: Some(Box::pin(first)),
            exhausted: false,
        }
    }
}

impl<T: Unpin, F> Unpin for PagedStream<'_, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        // A finished page refills `buffered` and goes around again.
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }
            if self.exhausted {
                return Poll::Ready(None);
            }
            let Some(pending) = self.in_flight.as_mut() else {
                // no page pending means the last one already arrived
                self.exhausted = true;
                return Poll::Ready(None);
            };
            match pending.as_mut().poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    // the fetcher went down with the failed future; no retry
                    self.in_flight = None;
                    self.exhausted = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(Ok((fetcher, (items, next_token)))) => {
                    // an empty page with a token just loops into the next fetch
                    self.buffered.extend(items);
                    match next_token {
                        Some(token) => {
                            // queued, but not polled until the buffer drains
                            self.in_flight = Some(Box::pin(async move {
                                let page = fetcher(Some(token)).await?;
                                Ok((fetcher, page))
                            }));
                        }
                        None => {
                            self.in_flight = None;
                            self.exhausted = true;
                        }
                    }
                }
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// Not every list endpoint returns this (`videoCategories.list` does not), so
/// callers receive it as an `Option`.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    ///
    /// This is an approximation for search results.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

/// The `totalResults` a list response reported, if it carried `pageInfo` at all.
pub fn total_results(page_info: Option<&PageInfo>) -> Option<u32> {
    page_info.map(|p| p.total_results)
}

/// Freebase/Wikipedia topics associated with a channel or video.
///
/// Shared by the `channels` and `videos` resources.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicDetails {
    pub topic_ids: Option<Vec<String>>,
    /// Wikipedia URLs describing the content.
    pub topic_categories: Option<Vec<String>>,
}
