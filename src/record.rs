//! Record capabilities and draftable behavior.
//!
//! [`Publishable`] is the capability a record type opts into: stable identity
//! plus access to its `published_at` column. [`Draftable`] layers the
//! draft/publish rules on top and is blanket-implemented, so implementing
//! [`Publishable`] is all a record type needs to do.
//!
//! The mutators here are in-memory only. Persisting variants live in
//! [`crate::publishing`] and route through a [`crate::store::RecordStore`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clock;
use crate::date::DateInput;
use crate::error::Result;

/// Identity for stored records.
pub trait Record {
    fn id(&self) -> Uuid;
}

/// Access to a record's publication timestamp.
///
/// `None` means a permanent draft; `Some(t)` makes the record visible from
/// `t` onward. No other record state influences visibility.
pub trait Publishable: Record {
    fn published_at(&self) -> Option<DateTime<Utc>>;

    fn published_at_mut(&mut self) -> &mut Option<DateTime<Utc>>;
}

/// Draft/publish state rules, blanket-implemented for every [`Publishable`].
pub trait Draftable: Publishable {
    /// Whether the record is visible as of `now`.
    fn is_published_as_of(&self, now: DateTime<Utc>) -> bool {
        self.published_at().is_some_and(|at| at <= now)
    }

    /// Whether the record is visible right now.
    fn is_published(&self) -> bool {
        self.is_published_as_of(clock::now())
    }

    /// Exact complement of [`is_published_as_of`](Draftable::is_published_as_of).
    fn is_draft_as_of(&self, now: DateTime<Utc>) -> bool {
        !self.is_published_as_of(now)
    }

    fn is_draft(&self) -> bool {
        self.is_draft_as_of(clock::now())
    }

    /// Set `published_at` from whatever date shape the caller has.
    ///
    /// An explicit set always overwrites, including re-scheduling a record
    /// that is already published. Relative expressions anchor at the current
    /// clock reading. In-memory only; nothing is persisted.
    fn set_published_at(&mut self, date: impl Into<DateInput>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let resolved = date.into().resolve(clock::now())?;
        *self.published_at_mut() = resolved;
        Ok(self)
    }

    /// Set the published flag.
    ///
    /// `false` clears `published_at`. `true` stamps the current time onto a
    /// draft; a record that is already published keeps its original
    /// timestamp, so re-publishing is a no-op.
    fn set_published(&mut self, published: bool) -> &mut Self
    where
        Self: Sized,
    {
        let now = clock::now();
        if !published {
            *self.published_at_mut() = None;
        } else if self.is_draft_as_of(now) {
            *self.published_at_mut() = Some(now);
        }
        self
    }
}

impl<T: Publishable> Draftable for T {}
