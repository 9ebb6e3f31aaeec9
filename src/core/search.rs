//! Destination search box resolution.
//!
//! A submission carries the free-text query and the optional category filter.
//! Text always wins over the filter; the filter is only used when the query
//! is blank.

use crate::catalog::{Catalog, DestinationRecord};
use crate::notification::Notification;
use crate::routes::Route;
use crate::timer::OneShotTimer;

/// Pause between the not-found notification and the redirect to contact.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// What the search box holds at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub query: String,
    /// Selected value of the category filter control, if any.
    pub type_filter: Option<String>,
}

impl SearchInput {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            type_filter: None,
        }
    }

    pub fn with_type_filter(mut self, kind: impl Into<String>) -> Self {
        self.type_filter = Some(kind.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query matched a catalog record.
    Detail(&'static DestinationRecord),
    /// Query matched nothing. `query` is trimmed but keeps its case.
    NotFound { query: String },
    /// Blank query with a category selected.
    FilterByType(String),
    /// Blank query and no category: nothing to do.
    Idle,
}

impl SearchOutcome {
    /// Immediate navigation target. `NotFound` navigates to contact only after
    /// the notification delay, so it has no immediate route.
    pub fn route(&self) -> Option<Route> {
        match self {
            SearchOutcome::Detail(rec) => Some(Route::detail(rec.id)),
            SearchOutcome::FilterByType(kind) => Some(Route::listing(kind.clone())),
            SearchOutcome::NotFound { .. } | SearchOutcome::Idle => None,
        }
    }

    pub fn not_found_message(&self) -> Option<String> {
        match self {
            SearchOutcome::NotFound { query } => Some(format!(
                "We don't have \"{query}\" listed yet, but we will contact you soon!"
            )),
            _ => None,
        }
    }
}

/// Resolves a search submission against the catalog.
pub fn resolve(catalog: &Catalog, input: &SearchInput) -> SearchOutcome {
    let query = input.query.trim();
    if query.is_empty() {
        return match input.type_filter.as_deref().map(str::trim) {
            Some(kind) if !kind.is_empty() => SearchOutcome::FilterByType(kind.to_string()),
            _ => SearchOutcome::Idle,
        };
    }

    match find_destination(catalog, query) {
        Some(rec) => {
            tracing::debug!(query, id = rec.id, "search matched destination");
            SearchOutcome::Detail(rec)
        }
        None => {
            tracing::debug!(query, "search matched nothing");
            SearchOutcome::NotFound {
                query: query.to_string(),
            }
        }
    }
}

/// First record, in catalog order, whose id equals, title equals
/// (case-insensitively) or location contains the normalized query.
pub fn find_destination(catalog: &Catalog, query: &str) -> Option<&'static DestinationRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    catalog.iter().find(|d| {
        d.id == needle
            || d.title.to_lowercase() == needle
            || d.location.to_lowercase().contains(&needle)
    })
}

/// Page side effects of a search submission.
pub trait SearchEffects {
    fn navigate(&self, route: &Route);
    fn notify(&self, notification: Notification);
}

/// The hero search box. Matches and category filters navigate at once; a
/// query with no match shows a notification first and arms `timer` for the
/// redirect to contact.
#[derive(Debug)]
pub struct SearchBox<T> {
    redirect_delay_ms: u32,
    timer: T,
    redirect: Option<Route>,
}

impl<T: OneShotTimer> SearchBox<T> {
    pub fn new(redirect_delay_ms: u32, timer: T) -> Self {
        Self {
            redirect_delay_ms,
            timer,
            redirect: None,
        }
    }

    pub fn submit<E: SearchEffects>(
        &mut self,
        catalog: &Catalog,
        input: &SearchInput,
        effects: &E,
    ) -> SearchOutcome {
        let outcome = resolve(catalog, input);
        if let Some(route) = outcome.route() {
            effects.navigate(&route);
        } else if let Some(message) = outcome.not_found_message() {
            effects.notify(Notification::info(message));
            self.redirect = Some(Route::Contact);
            self.timer.cancel();
            self.timer.schedule(self.redirect_delay_ms);
        }
        outcome
    }

    /// Called when the timer fires. Yields the pending redirect once.
    pub fn fire(&mut self) -> Option<Route> {
        self.redirect.take()
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect.is_some()
    }
}
