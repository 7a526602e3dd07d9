use std::collections::VecDeque;

use tracing::debug;

use crate::client::MetricDescriptorApi;
use crate::errors::Result;
use crate::proto::{ListMetricDescriptorsRequest, MetricDescriptor};

/// Pull-based sequence over the paginated `ListMetricDescriptors` call.
///
/// Each call to [`next`](DescriptorPager::next) yields a descriptor, the error
/// that ended the listing, or `None` once the backend reports no further pages.
/// Pages are fetched only when the buffered one has been drained. After an
/// error the pager is exhausted.
pub struct DescriptorPager<'a, A: ?Sized> {
    api: &'a mut A,
    parent: String,
    buffered: VecDeque<MetricDescriptor>,
    // None once the last page has been fetched or a fetch failed
    next_page_token: Option<String>,
    pages_fetched: usize,
}

impl<'a, A> DescriptorPager<'a, A>
where
    A: MetricDescriptorApi + ?Sized,
{
    /// `parent` is the project resource, `projects/{project}`.
    pub fn new(api: &'a mut A, parent: String) -> Self {
        Self {
            api,
            parent,
            buffered: VecDeque::new(),
            next_page_token: Some(String::new()),
            pages_fetched: 0,
        }
    }

    pub async fn next(&mut self) -> Option<Result<MetricDescriptor>> {
        loop {
            if let Some(descriptor) = self.buffered.pop_front() {
                return Some(Ok(descriptor));
            }

            let page_token = self.next_page_token.take()?;
            let request = ListMetricDescriptorsRequest {
                name: self.parent.clone(),
                page_token,
                ..Default::default()
            };

            match self.api.list_metric_descriptors(request).await {
                Ok(page) => {
                    self.pages_fetched += 1;
                    debug!(
                        page = self.pages_fetched,
                        descriptors = page.metric_descriptors.len(),
                        "fetched metric descriptor page"
                    );
                    self.buffered.extend(page.metric_descriptors);
                    if !page.next_page_token.is_empty() {
                        self.next_page_token = Some(page.next_page_token);
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}
