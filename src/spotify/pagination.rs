use futures::{Stream, stream};
use serde::de::DeserializeOwned;

use super::catalog::CatalogService;
use crate::{error::Result, types::Page};

struct Cursor<T> {
    items: std::vec::IntoIter<T>,
    was_empty: bool,
    next: Option<String>,
}

impl<T> From<Page<T>> for Cursor<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            was_empty: page.items.is_empty(),
            items: page.items.into_iter(),
            next: page.next,
        }
    }
}

/// Turns a first page into a lazy stream over every item of the listing.
///
/// Items come out in page order, then in order within each page. The next
/// page is requested only after the last item of the current one has been
/// pulled. The stream ends when a page has no items (even if it carries a
/// continuation link), when a page has no continuation link, or when the
/// continuation yields no page. A failed
/// request is yielded as the final item.
pub fn paginate<'a, C, T>(catalog: &'a C, first: Page<T>) -> impl Stream<Item = Result<T>> + 'a
where
    C: CatalogService,
    T: DeserializeOwned + Send + 'a,
{
    stream::try_unfold(Some(Cursor::from(first)), move |state| advance(catalog, state))
}

async fn advance<C, T>(catalog: &C, state: Option<Cursor<T>>) -> Result<Option<(T, Option<Cursor<T>>)>>
where
    C: CatalogService,
    T: DeserializeOwned + Send,
{
    let Some(mut cursor) = state else {
        return Ok(None);
    };

    loop {
        if let Some(item) = cursor.items.next() {
            return Ok(Some((item, Some(cursor))));
        }

        if cursor.was_empty || cursor.next.is_none() {
            return Ok(None);
        }

        match catalog.next_page(cursor.next.as_deref()).await? {
            Some(page) => cursor = Cursor::from(page),
            None => return Ok(None),
        }
    }
}
