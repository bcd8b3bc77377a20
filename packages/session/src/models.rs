//! Session data model: roles, the signed-in identity, and the state tuple.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role attached to every account.
///
/// Exactly one per identity, fixed for the lifetime of a session — the
/// backend encodes it into the token, so changing roles means signing in
/// again. `Student` is the registration default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl Role {
    /// The backend's wire name for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
            Role::Admin => "Admin",
        }
    }

    /// Parse a wire name back into a role.
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "Student" => Some(Role::Student),
            "Instructor" => Some(Role::Instructor),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in principal as reported by the backend.
///
/// Exists if and only if a non-expired credential is held; the store keeps
/// the two in lockstep. The backend names the identifier `_id`, so that is
/// the serialized form; `id` is accepted on the way in as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// The session tuple: identity, credential, and the readiness flag.
///
/// `ready` is `false` only during the startup revalidation window; it flips
/// to `true` exactly once and stays there. [`SessionStore`](crate::SessionStore)
/// is the sole mutator — everything else reads snapshots and the projections
/// below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub credential: Option<String>,
    pub ready: bool,
}

impl SessionState {
    /// Whether an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Role of the current identity, if any.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn is_student(&self) -> bool {
        self.role() == Some(Role::Student)
    }

    pub fn is_instructor(&self) -> bool {
        self.role() == Some(Role::Instructor)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_name("Janitor"), None);
    }

    #[test]
    fn identity_accepts_both_id_spellings() {
        let mongo: Identity =
            serde_json::from_str(r#"{"_id":"u1","email":"a@b.com","role":"Admin"}"#).unwrap();
        let plain: Identity =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.com","role":"Admin"}"#).unwrap();
        assert_eq!(mongo, plain);
        assert_eq!(mongo.role, Role::Admin);
    }

    #[test]
    fn identity_ignores_extra_wire_fields() {
        let identity: Identity = serde_json::from_str(
            r#"{"_id":"u2","email":"s@b.com","role":"Student","created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(identity.id, "u2");
    }

    #[test]
    fn empty_state_is_unauthenticated_and_not_ready() {
        let state = SessionState::default();
        assert!(!state.ready);
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), None);
        assert!(!state.is_student() && !state.is_instructor() && !state.is_admin());
    }
}
