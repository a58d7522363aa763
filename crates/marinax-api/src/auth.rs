use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Which kind of principal is signing in.
///
/// Staff (platform admins) and service providers have separate accounts,
/// separate login endpoints, and separate profile endpoints. The right
/// surface is chosen by the caller -- never guessed from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// Platform staff (admin / superadmin accounts).
    Staff,
    /// Service provider accounts.
    Provider,
}

impl PrincipalKind {
    /// The login endpoint path for this principal kind.
    pub fn login_path(&self) -> &'static str {
        match self {
            Self::Staff => "auth/admin/login",
            Self::Provider => "auth/provider/login",
        }
    }

    /// The logout endpoint path for this principal kind.
    pub fn logout_path(&self) -> &'static str {
        match self {
            Self::Staff => "auth/admin/logout",
            Self::Provider => "auth/provider/logout",
        }
    }

    /// The current-principal (profile) endpoint path.
    ///
    /// Used for silent session restore and profile updates.
    pub fn profile_path(&self) -> &'static str {
        match self {
            Self::Staff => "auth/admin/me",
            Self::Provider => "auth/provider/me",
        }
    }
}

impl std::fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staff => f.write_str("staff"),
            Self::Provider => f.write_str("provider"),
        }
    }
}

/// Email + password credentials for either login surface.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}
