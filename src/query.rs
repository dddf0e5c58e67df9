//! Publication-aware queries.
//!
//! Filtering is explicit and composable rather than registered as a hidden
//! global hook: a fresh [`Query`] hides drafts, and callers opt out with
//! [`Query::with_drafts`] or invert the filter with [`Query::only_drafts`].
//!
//! Extra [`Condition`]s AND onto the query. The only-drafts view keeps its
//! "no timestamp OR future timestamp" pair grouped as one logical unit, so
//! additional conditions never bleed into the OR.

use chrono::{DateTime, Utc};

use crate::clock;
use crate::error::Result;
use crate::record::{Draftable, Publishable};
use crate::store::RecordStore;

/// A predicate over a record's `published_at` column.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    PublishedAtIsNull,
    PublishedAtIsNotNull,
    /// `published_at` set and `<= t`.
    PublishedAtAtOrBefore(DateTime<Utc>),
    /// `published_at` set and `> t`.
    PublishedAtAfter(DateTime<Utc>),
    /// OR group; matches when any member matches.
    Any(Vec<Condition>),
}

impl Condition {
    pub fn matches<R: Publishable>(&self, record: &R) -> bool {
        match self {
            Condition::PublishedAtIsNull => record.published_at().is_none(),
            Condition::PublishedAtIsNotNull => record.published_at().is_some(),
            Condition::PublishedAtAtOrBefore(t) => {
                record.published_at().is_some_and(|at| at <= *t)
            }
            Condition::PublishedAtAfter(t) => record.published_at().is_some_and(|at| at > *t),
            Condition::Any(members) => members.iter().any(|c| c.matches(record)),
        }
    }
}

/// Which records the query may see before extra conditions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    /// Hide drafts: `published_at` set and not in the future.
    Published,
    /// No publication filtering.
    All,
    /// Exactly the records the default view hides.
    DraftsOnly,
}

/// A composable query over a record store.
#[derive(Debug, Clone)]
pub struct Query {
    visibility: Visibility,
    conditions: Vec<Condition>,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// A query with the default visibility filter: published records only.
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Published,
            conditions: Vec::new(),
        }
    }

    /// Drop the default visibility filter; drafts included.
    pub fn with_drafts(mut self) -> Self {
        self.visibility = Visibility::All;
        self
    }

    /// Restrict to records that are not currently published: no
    /// `published_at`, or one in the future. Replaces the default filter.
    pub fn only_drafts(mut self) -> Self {
        self.visibility = Visibility::DraftsOnly;
        self
    }

    /// AND an extra condition onto the query.
    pub fn and_where(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Evaluate against a single record as of `now`.
    pub fn matches<R: Publishable>(&self, record: &R, now: DateTime<Utc>) -> bool {
        let visible = match self.visibility {
            Visibility::Published => record.is_published_as_of(now),
            Visibility::All => true,
            Visibility::DraftsOnly => record.is_draft_as_of(now),
        };
        visible && self.conditions.iter().all(|c| c.matches(record))
    }

    /// Run the query against a store.
    ///
    /// The clock is read once; every comparison in this call sees the same
    /// instant.
    pub fn fetch<R, S>(&self, store: &S) -> Result<Vec<R>>
    where
        R: Publishable,
        S: RecordStore<R>,
    {
        let now = clock::now();
        Ok(store
            .list()?
            .into_iter()
            .filter(|record| self.matches(record, now))
            .collect())
    }
}
