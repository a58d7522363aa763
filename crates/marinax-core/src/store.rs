// ── Generic resource store ──
//
// One store per mounted collection screen. Owns the collection state and
// the per-operation busy flags for its lifetime, and publishes snapshots
// through `watch` channels so consumers render reactively. Pages supply
// only the resource type; all fetch/mutate/notify mechanics live here.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use marinax_api::ApiClient;

use crate::error::CoreError;
use crate::model::Resource;
use crate::notify::Notifier;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ── Filters ──────────────────────────────────────────────────────────

/// A single filter constraint. Absence of a key means "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    Number(i64),
}

impl FilterValue {
    fn to_query(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Current filter constraints, in insertion order.
pub type FilterSet = IndexMap<String, FilterValue>;

// ── Collection state ─────────────────────────────────────────────────

/// Snapshot of one collection screen's data.
///
/// `items` keeps server order; the store never re-sorts client-side.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    pub items: Vec<Arc<T>>,
    /// Total matching rows across all pages.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub filters: FilterSet,
}

impl<T> CollectionState<T> {
    fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size,
            filters: FilterSet::new(),
        }
    }
}

// ── Operation flags ──────────────────────────────────────────────────

/// The four request kinds a store performs, each with its own busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

struct Flags {
    loading: watch::Sender<bool>,
    creating: watch::Sender<bool>,
    updating: watch::Sender<bool>,
    deleting: watch::Sender<bool>,
}

impl Flags {
    fn new() -> Self {
        Self {
            loading: watch::Sender::new(false),
            creating: watch::Sender::new(false),
            updating: watch::Sender::new(false),
            deleting: watch::Sender::new(false),
        }
    }

    fn for_op(&self, op: Operation) -> &watch::Sender<bool> {
        match op {
            Operation::Fetch => &self.loading,
            Operation::Create => &self.creating,
            Operation::Update => &self.updating,
            Operation::Delete => &self.deleting,
        }
    }
}

/// Raises a busy flag and clears it on drop, so a flag can never stay
/// stuck in-flight no matter how the operation path exits.
struct FlagGuard<'a>(&'a watch::Sender<bool>);

impl<'a> FlagGuard<'a> {
    fn raise(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

// ── Store ────────────────────────────────────────────────────────────

/// Data-access layer for one paginated server collection.
///
/// Operations are triggered one at a time by user action; the busy flags
/// exist so callers can disable triggers while a request is in flight.
/// Independent stores share nothing and may run concurrently. A store
/// whose screen unmounts calls [`detach`](Self::detach); a detached store
/// applies no late-arriving response.
pub struct ResourceStore<T: Resource> {
    api: Arc<ApiClient>,
    notifier: Notifier,
    state: watch::Sender<CollectionState<T>>,
    flags: Flags,
    cancel: CancellationToken,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(api: Arc<ApiClient>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            state: watch::Sender::new(CollectionState::new(DEFAULT_PAGE_SIZE)),
            flags: Flags::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_page_size(self, page_size: u32) -> Self {
        self.state.send_modify(|s| s.page_size = page_size.max(1));
        self
    }

    /// Start on the given page (1-based). Construction-time only; use
    /// [`set_page`](Self::set_page) once the store is live.
    pub fn with_page(self, page: u32) -> Self {
        self.state.send_modify(|s| s.page = page.max(1));
        self
    }

    /// Start with the given filters, validated against `T::FILTER_KEYS`.
    pub fn with_filters(self, filters: FilterSet) -> Result<Self, CoreError> {
        for key in filters.keys() {
            if !T::FILTER_KEYS.contains(&key.as_str()) {
                return Err(unknown_filter_key::<T>(key));
            }
        }
        self.state.send_modify(|s| s.filters = filters);
        Ok(self)
    }

    // ── State access ─────────────────────────────────────────────────

    /// Current snapshot (cheap: items are `Arc`s).
    pub fn state(&self) -> CollectionState<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<T>> {
        self.state.subscribe()
    }

    pub fn items(&self) -> Vec<Arc<T>> {
        self.state.borrow().items.clone()
    }

    /// Look up an item in the last-known page by id.
    pub fn find(&self, id: &str) -> Option<Arc<T>> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Whether the given operation currently has a request outstanding.
    pub fn is_busy(&self, op: Operation) -> bool {
        *self.flags.for_op(op).borrow()
    }

    /// Subscribe to one operation's busy flag.
    pub fn subscribe_flag(&self, op: Operation) -> watch::Receiver<bool> {
        self.flags.for_op(op).subscribe()
    }

    /// Stop applying responses; called when the owning screen unmounts.
    pub fn detach(&self) {
        self.cancel.cancel();
    }

    pub fn is_detached(&self) -> bool {
        self.cancel.is_cancelled()
    }

    // ── Fetch ────────────────────────────────────────────────────────

    /// Fetch the current page with the current filters.
    ///
    /// On failure the previous `items` stay untouched -- stale data over
    /// a blank screen -- and the failure is surfaced as an error notice.
    /// No automatic retry.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        let _busy = FlagGuard::raise(&self.flags.loading);

        let (page, page_size, query) = {
            let s = self.state.borrow();
            (s.page, s.page_size, filter_query(&s.filters))
        };

        match self.api.list::<T>(T::NAME, page, page_size, &query).await {
            Ok(fetched) => {
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.state.send_modify(|s| {
                    s.items = fetched.items.into_iter().map(Arc::new).collect();
                    s.total = fetched.total;
                });
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.report_failure(&format!("Failed to load {}", T::NAME), &err);
                Err(err)
            }
        }
    }

    /// Merge filters in, reset to the first page, and fetch exactly once.
    ///
    /// Unknown keys are rejected before any request is made.
    pub async fn set_filters(&self, partial: FilterSet) -> Result<(), CoreError> {
        for key in partial.keys() {
            if !T::FILTER_KEYS.contains(&key.as_str()) {
                return Err(unknown_filter_key::<T>(key));
            }
        }

        self.state.send_modify(|s| {
            s.filters.extend(partial);
            s.page = 1;
        });
        self.refresh().await
    }

    /// Drop all filters and fetch the first page.
    pub async fn clear_filters(&self) -> Result<(), CoreError> {
        self.state.send_modify(|s| {
            s.filters.clear();
            s.page = 1;
        });
        self.refresh().await
    }

    /// Move to the given page (1-based) and fetch it.
    pub async fn set_page(&self, page: u32) -> Result<(), CoreError> {
        self.state.send_modify(|s| s.page = page.max(1));
        self.refresh().await
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create a record, then refetch the current page.
    ///
    /// Refetch rather than append: server-assigned fields (id, timestamps)
    /// stay correct and `total` reflects the server's count.
    pub async fn create(&self, draft: &T::Draft) -> Result<(), CoreError> {
        let _busy = FlagGuard::raise(&self.flags.creating);

        match self.api.create::<T, _>(T::NAME, draft).await {
            Ok(created) => {
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                let body = created
                    .as_ref()
                    .map(|record| format!("id {}", record.id()))
                    .unwrap_or_default();
                self.notifier.success(format!("{} created", T::LABEL), body);

                // A failed refetch surfaces its own notice; the create
                // itself already succeeded.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.report_failure(
                    &format!("Failed to create {}", lower(T::LABEL)),
                    &err,
                );
                Err(err)
            }
        }
    }

    /// Update a record, replacing the matching row in place.
    ///
    /// Row position is preserved. When the server does not echo the
    /// updated record the row is left as-is until the next refresh.
    pub async fn update(&self, id: &str, patch: &T::Patch) -> Result<(), CoreError> {
        let _busy = FlagGuard::raise(&self.flags.updating);

        match self.api.update::<T, _>(T::NAME, id, patch).await {
            Ok(echoed) => {
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.replace_row(id, echoed);
                self.notifier
                    .success(format!("{} updated", T::LABEL), format!("id {id}"));
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.report_failure(
                    &format!("Failed to update {}", lower(T::LABEL)),
                    &err,
                );
                Err(err)
            }
        }
    }

    /// Delete a record, removing its row and decrementing `total`.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let _busy = FlagGuard::raise(&self.flags.deleting);

        match self.api.delete(T::NAME, id).await {
            Ok(()) => {
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.state.send_modify(|s| {
                    s.items.retain(|item| item.id() != id);
                    s.total = s.total.saturating_sub(1);
                });
                self.notifier
                    .success(format!("{} deleted", T::LABEL), format!("id {id}"));
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.report_failure(
                    &format!("Failed to delete {}", lower(T::LABEL)),
                    &err,
                );
                Err(err)
            }
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn replace_row(&self, id: &str, echoed: Option<T>) {
        if let Some(record) = echoed {
            self.state.send_modify(|s| {
                if let Some(slot) = s.items.iter_mut().find(|item| item.id() == id) {
                    *slot = Arc::new(record);
                }
            });
        }
    }

    /// Transport and server-reported failures surface identically to the
    /// caller; only the log level differs.
    fn report_failure(&self, title: &str, err: &CoreError) {
        if err.is_transport() {
            warn!(resource = T::NAME, error = %err, "transport failure");
        } else {
            debug!(resource = T::NAME, error = %err, "server rejected request");
        }
        self.notifier.error(title, err.to_string());
    }
}

// ── Approval workflow ────────────────────────────────────────────────

impl<T: crate::model::Moderated> ResourceStore<T> {
    /// Approve a pending record, replacing its row with the server's copy.
    pub async fn approve(&self, id: &str) -> Result<(), CoreError> {
        let _busy = FlagGuard::raise(&self.flags.updating);

        match self.api.approve::<T>(T::NAME, id).await {
            Ok(echoed) => {
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.replace_row(id, echoed);
                self.notifier
                    .success(format!("{} approved", T::LABEL), format!("id {id}"));
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.report_failure(
                    &format!("Failed to approve {}", lower(T::LABEL)),
                    &err,
                );
                Err(err)
            }
        }
    }

    /// Reject a pending record with a reason shown to its owner.
    pub async fn reject(&self, id: &str, reason: &str) -> Result<(), CoreError> {
        let _busy = FlagGuard::raise(&self.flags.updating);

        match self.api.reject::<T>(T::NAME, id, reason).await {
            Ok(echoed) => {
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.replace_row(id, echoed);
                self.notifier
                    .success(format!("{} rejected", T::LABEL), format!("id {id}"));
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
                self.report_failure(
                    &format!("Failed to reject {}", lower(T::LABEL)),
                    &err,
                );
                Err(err)
            }
        }
    }
}

fn unknown_filter_key<T: Resource>(key: &str) -> CoreError {
    CoreError::Validation {
        field: key.to_owned(),
        message: format!(
            "unknown filter for {} (expected one of: {})",
            T::NAME,
            T::FILTER_KEYS.join(", ")
        ),
    }
}

fn filter_query(filters: &FilterSet) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(key, value)| (key.clone(), value.to_query()))
        .collect()
}

fn lower(label: &str) -> String {
    label.to_lowercase()
}
