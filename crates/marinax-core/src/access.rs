// ── Role-based access control ──
//
// The gate that decides whether a guarded surface renders, denies, or
// redirects to a login. Role requirements live in one declarative policy
// table ([`Feature::required_roles`]) consumed by both command dispatch
// and navigation filtering, so a screen's guard and its menu entry can
// never drift apart.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use marinax_api::PrincipalKind;

/// Permission tier attached to a principal. Closed set.
///
/// The wire spells this lowercase; the deprecated `super_admin` spelling
/// is accepted on input and never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(alias = "super_admin")]
    Superadmin,
    Provider,
}

impl Role {
    /// Parse a wire/config role string, tolerating the legacy spelling.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "superadmin" | "super_admin" => Some(Self::Superadmin),
            "provider" => Some(Self::Provider),
            _ => None,
        }
    }
}

/// The authenticated actor, created on login and cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub kind: PrincipalKind,
    pub name: Option<String>,
}

/// Outcome of evaluating a gate against the current principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the guarded surface unchanged.
    Authorized,
    /// No usable principal -- send the caller to this surface's login.
    Unauthenticated { surface: PrincipalKind },
    /// Authenticated but missing a required role. Rendered as a denial
    /// state, visibly distinct from loading or not-found. Never a
    /// redirect, never a toast.
    Forbidden { required: Vec<Role> },
}

/// A guard for one protected surface.
///
/// `required` empty means authentication alone suffices -- the default
/// for most screens. Only sensitive features (account management, system
/// settings) attach a role set.
#[derive(Debug, Clone)]
pub struct AccessGate {
    surface: PrincipalKind,
    required: Vec<Role>,
}

impl AccessGate {
    /// Gate for the staff/admin surface.
    pub fn staff() -> Self {
        Self {
            surface: PrincipalKind::Staff,
            required: Vec::new(),
        }
    }

    /// Gate for the service-provider surface.
    pub fn provider() -> Self {
        Self {
            surface: PrincipalKind::Provider,
            required: Vec::new(),
        }
    }

    /// Gate for a feature, with requirements from the central policy.
    pub fn for_feature(feature: Feature) -> Self {
        Self {
            surface: feature.surface(),
            required: feature.required_roles().to_vec(),
        }
    }

    /// Restrict this gate to the given roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.required = roles.into_iter().collect();
        self
    }

    pub fn surface(&self) -> PrincipalKind {
        self.surface
    }

    pub fn required_roles(&self) -> &[Role] {
        &self.required
    }

    /// Decide whether the guarded surface renders.
    ///
    /// A principal signed in on the other surface counts as
    /// unauthenticated here: the caller is pointed at the login that
    /// matches this gate rather than being shown a denial.
    pub fn evaluate(&self, principal: Option<&Principal>) -> AccessDecision {
        let Some(principal) = principal.filter(|p| p.kind == self.surface) else {
            return AccessDecision::Unauthenticated {
                surface: self.surface,
            };
        };

        if self.required.is_empty() || self.required.contains(&principal.role) {
            AccessDecision::Authorized
        } else {
            AccessDecision::Forbidden {
                required: self.required.clone(),
            }
        }
    }
}

// ── Central feature policy ───────────────────────────────────────────

/// Every guarded feature of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Feature {
    Dashboard,
    Admins,
    Providers,
    Jobs,
    Categories,
    Blogs,
    Bookings,
    Contracts,
    Vessels,
    Projects,
    Settings,
    Profile,
}

impl Feature {
    /// Roles required beyond authentication. Empty for most features;
    /// staff-account management and system settings are superadmin-only.
    pub fn required_roles(self) -> &'static [Role] {
        match self {
            Self::Admins | Self::Settings => &[Role::Superadmin],
            _ => &[],
        }
    }

    /// Which login surface guards this feature. The whole admin panel is
    /// staff-side; provider self-service screens live elsewhere.
    pub fn surface(self) -> PrincipalKind {
        PrincipalKind::Staff
    }
}

/// Features the given principal may see, in declaration order.
///
/// Drives navigation filtering: a menu renders exactly the entries whose
/// gates authorize, so visibility and the route guard share one source.
pub fn visible_features(principal: Option<&Principal>) -> Vec<Feature> {
    Feature::iter()
        .filter(|feature| {
            AccessGate::for_feature(*feature).evaluate(principal) == AccessDecision::Authorized
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn staff(role: Role) -> Principal {
        Principal {
            id: "u1".into(),
            email: "staff@marine-axis.io".into(),
            role,
            kind: PrincipalKind::Staff,
            name: None,
        }
    }

    #[test]
    fn admin_is_forbidden_where_superadmin_is_required() {
        let gate = AccessGate::staff().with_roles([Role::Superadmin]);
        let decision = gate.evaluate(Some(&staff(Role::Admin)));
        assert_eq!(
            decision,
            AccessDecision::Forbidden {
                required: vec![Role::Superadmin]
            }
        );
    }

    #[test]
    fn missing_principal_is_unauthenticated_even_without_role_requirements() {
        let gate = AccessGate::staff();
        assert_eq!(
            gate.evaluate(None),
            AccessDecision::Unauthenticated {
                surface: PrincipalKind::Staff
            }
        );
    }

    #[test]
    fn superadmin_passes_a_multi_role_requirement() {
        let gate = AccessGate::staff().with_roles([Role::Superadmin, Role::Admin]);
        assert_eq!(
            gate.evaluate(Some(&staff(Role::Superadmin))),
            AccessDecision::Authorized
        );
    }

    #[test]
    fn authentication_alone_suffices_for_an_open_gate() {
        let gate = AccessGate::staff();
        assert_eq!(
            gate.evaluate(Some(&staff(Role::Admin))),
            AccessDecision::Authorized
        );
    }

    #[test]
    fn wrong_surface_redirects_to_the_gates_own_login() {
        let provider = Principal {
            id: "p1".into(),
            email: "dock@harbor.example".into(),
            role: Role::Provider,
            kind: PrincipalKind::Provider,
            name: None,
        };
        let gate = AccessGate::staff();
        assert_eq!(
            gate.evaluate(Some(&provider)),
            AccessDecision::Unauthenticated {
                surface: PrincipalKind::Staff
            }
        );
    }

    #[test]
    fn role_parse_accepts_legacy_spelling() {
        assert_eq!(Role::parse("superadmin"), Some(Role::Superadmin));
        assert_eq!(Role::parse("super_admin"), Some(Role::Superadmin));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("captain"), None);
    }

    #[test]
    fn role_serde_round_trip_never_emits_legacy_spelling() {
        let json = serde_json::to_string(&Role::Superadmin).unwrap();
        assert_eq!(json, "\"superadmin\"");

        let parsed: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(parsed, Role::Superadmin);
    }

    #[test]
    fn navigation_matches_route_guards() {
        let admin_nav = visible_features(Some(&staff(Role::Admin)));
        assert!(admin_nav.contains(&Feature::Jobs));
        assert!(!admin_nav.contains(&Feature::Admins));
        assert!(!admin_nav.contains(&Feature::Settings));

        let superadmin_nav = visible_features(Some(&staff(Role::Superadmin)));
        assert!(superadmin_nav.contains(&Feature::Admins));
        assert!(superadmin_nav.contains(&Feature::Settings));

        assert!(visible_features(None).is_empty());
    }
}
