//! Data-access and access-control layer between `marinax-api` and UI
//! consumers (CLI today, anything that renders lists tomorrow).
//!
//! This crate owns the two pieces every Marine-Axis admin surface is
//! built from:
//!
//! - **[`ResourceStore<T>`]** — Generic data-access layer for one
//!   paginated server collection. Fetches with the current page and
//!   filter set, performs create/update/delete (and approve/reject for
//!   moderated collections), and publishes collection snapshots plus
//!   per-operation busy flags through `tokio::sync::watch` channels.
//!   Failed fetches keep the previous items -- stale data beats a blank
//!   screen -- and every failure surfaces as a notice, never a panic.
//!
//! - **[`AccessGate`]** — The decision point that allows, denies, or
//!   redirects based on the current [`Principal`] and a required role
//!   set. Requirements come from one declarative policy table
//!   ([`Feature`]), shared by command dispatch and navigation filtering.
//!
//! Around them: [`Session`] (login/logout/silent restore, owner of the
//! principal and the client's token slot), [`Notifier`] (fire-and-forget
//! notices), the typed domain [`model`], and client-side [`validate`]
//! checks that never reach the network.

pub mod access;
pub mod accounts;
pub mod error;
pub mod model;
pub mod notify;
pub mod session;
pub mod site;
pub mod store;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use access::{visible_features, AccessDecision, AccessGate, Feature, Principal, Role};
pub use accounts::AdminDirectory;
pub use error::CoreError;
pub use notify::{Notice, Notifier, Severity};
pub use session::{ProfilePatch, Session};
pub use store::{CollectionState, FilterSet, FilterValue, Operation, ResourceStore};

// The transport's principal-kind enum doubles as the login-surface
// selector for gates, so it is part of this crate's vocabulary. The
// client and its transport config are re-exported so consumers wire up
// a session without depending on `marinax-api` directly.
pub use marinax_api::{ApiClient, PrincipalKind, TlsMode, TransportConfig};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Admin,
    AdminDraft,
    AdminPatch,
    ApprovalStatus,
    Blog,
    BlogDraft,
    BlogPatch,
    Booking,
    BookingPatch,
    Category,
    CategoryDraft,
    CategoryPatch,
    Contract,
    ContractDraft,
    ContractPatch,
    DashboardSummary,
    Job,
    JobDraft,
    JobPatch,
    Project,
    ProjectDraft,
    ProjectPatch,
    Provider,
    ProviderDraft,
    ProviderPatch,
    Resource,
    SiteSettings,
    SiteSettingsPatch,
    Vessel,
    VesselDraft,
    VesselPatch,
};
