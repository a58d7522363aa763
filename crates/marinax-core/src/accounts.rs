// ── Staff account management ──
//
// Wraps the generic store for the "admins" collection with the one
// cross-cutting safety rule of the panel: the signed-in account can
// never delete itself, no matter what the server would allow.

use crate::error::CoreError;
use crate::model::Admin;
use crate::notify::Notifier;
use crate::session::Session;
use crate::store::ResourceStore;

/// Store for staff accounts with the self-delete guard applied.
pub struct AdminDirectory {
    store: ResourceStore<Admin>,
    session: Session,
    notifier: Notifier,
}

impl AdminDirectory {
    pub fn new(session: Session, notifier: Notifier) -> Self {
        let store = ResourceStore::new(session.api().clone(), notifier.clone());
        Self {
            store,
            session,
            notifier,
        }
    }

    /// The underlying store, for listing and non-destructive mutations.
    pub fn store(&self) -> &ResourceStore<Admin> {
        &self.store
    }

    /// Delete a staff account, refusing to touch the acting principal's
    /// own account. The refusal happens before any request leaves the
    /// process and surfaces as a blocking error notice.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        if let Some(principal) = self.session.principal() {
            let own_row = self
                .store
                .find(id)
                .is_some_and(|admin| admin.email.eq_ignore_ascii_case(&principal.email));

            if own_row || id == principal.id {
                self.notifier.error(
                    "Action blocked",
                    "You cannot delete the account you are signed in with",
                );
                return Err(CoreError::OwnAccountDeletion);
            }
        }

        self.store.delete(id).await
    }
}
