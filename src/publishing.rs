//! Publishing operations.
//!
//! Each operation mutates the record in memory through its
//! [`Draftable`](crate::record::Draftable) behavior, then persists it through
//! the store. Store failures propagate unchanged; there are no retries.

use crate::date::DateInput;
use crate::error::Result;
use crate::record::{Draftable, Publishable};
use crate::store::RecordStore;

/// Set the publication date and persist.
///
/// An explicit date always overwrites, including re-scheduling a record that
/// is already published.
pub fn publish_at<R, S>(store: &mut S, record: &mut R, date: impl Into<DateInput>) -> Result<()>
where
    R: Publishable,
    S: RecordStore<R>,
{
    record.set_published_at(date)?;
    store.save(record)
}

/// Set the published flag and persist.
///
/// Publishing a record that is already published keeps its original
/// timestamp; publishing a draft stamps the current time.
pub fn publish<R, S>(store: &mut S, record: &mut R, published: bool) -> Result<()>
where
    R: Publishable,
    S: RecordStore<R>,
{
    record.set_published(published);
    store.save(record)
}

/// Revert to draft and persist.
pub fn draft<R, S>(store: &mut S, record: &mut R) -> Result<()>
where
    R: Publishable,
    S: RecordStore<R>,
{
    publish(store, record, false)
}

/// Schedule publication for `date` and persist.
///
/// A date in the past publishes the record immediately; visibility is only
/// ever the comparison of `published_at` against the clock.
pub fn schedule<R, S>(store: &mut S, record: &mut R, date: impl Into<DateInput>) -> Result<()>
where
    R: Publishable,
    S: RecordStore<R>,
{
    publish_at(store, record, date)
}
