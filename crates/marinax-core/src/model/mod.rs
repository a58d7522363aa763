// ── Domain model ──
//
// Typed records for every collection the Marine-Axis admin panel manages.
// Each listable type implements [`Resource`], which is all the generic
// store needs: the wire collection name, the accepted filter keys, and
// the create/update payload types.

use serde::Serialize;
use serde::de::DeserializeOwned;

mod admin;
mod booking;
mod content;
mod fleet;
mod job;
mod provider;
mod supporting;

pub use admin::{Admin, AdminDraft, AdminPatch};
pub use booking::{Booking, BookingPatch, Contract, ContractDraft, ContractPatch};
pub use content::{Blog, BlogDraft, BlogPatch, Category, CategoryDraft, CategoryPatch};
pub use fleet::{Project, ProjectDraft, ProjectPatch, Vessel, VesselDraft, VesselPatch};
pub use job::{Job, JobDraft, JobPatch};
pub use provider::{Provider, ProviderDraft, ProviderPatch};
pub use supporting::{ApprovalStatus, DashboardSummary, SiteSettings, SiteSettingsPatch};

/// A named server-side collection with uniform CRUD semantics.
///
/// Implementors are plain data records; all listing, filtering, and
/// mutation mechanics live in [`ResourceStore`](crate::store::ResourceStore).
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Wire collection name ("admins", "jobs", ...).
    const NAME: &'static str;

    /// Human-readable singular label, capitalized ("Job").
    const LABEL: &'static str;

    /// Filter keys the server accepts for this collection. Fixed at
    /// compile time; the store rejects anything else before a request
    /// is made.
    const FILTER_KEYS: &'static [&'static str];

    /// Payload for creating a new record.
    type Draft: Serialize + Send + Sync;

    /// Partial payload for updating an existing record.
    type Patch: Serialize + Send + Sync;

    /// Server-assigned identifier.
    fn id(&self) -> &str;
}

/// Collections whose records pass through the staff approval workflow.
///
/// Gives the store `approve`/`reject` on top of plain CRUD.
pub trait Moderated: Resource {}

