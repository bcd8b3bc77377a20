//! Role-based access decisions for protected views.

use crate::models::{Role, SessionState};

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the protected view.
    Allow,
    /// No identity; send the viewer to the login page.
    RedirectToLogin,
    /// Signed in, but the role is not in the required set.
    Forbidden,
}

/// Decide whether a view restricted to `required` may render for `session`.
///
/// An empty `required` set admits any authenticated identity. Callers must
/// not ask before `session.ready` — until initialization resolves there is
/// no answer and the view keeps its loading state.
///
/// Pure and stateless; safe to call repeatedly.
pub fn evaluate(session: &SessionState, required: &[Role]) -> Decision {
    debug_assert!(
        session.ready,
        "access evaluated before the session finished initializing"
    );
    let Some(identity) = &session.identity else {
        return Decision::RedirectToLogin;
    };
    if required.is_empty() || required.contains(&identity.role) {
        Decision::Allow
    } else {
        Decision::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    fn signed_in(role: Role) -> SessionState {
        SessionState {
            identity: Some(Identity {
                id: "1".to_string(),
                email: "a@b.com".to_string(),
                role,
            }),
            credential: Some("tok".to_string()),
            ready: true,
        }
    }

    fn signed_out() -> SessionState {
        SessionState {
            ready: true,
            ..SessionState::default()
        }
    }

    #[test]
    fn absent_identity_always_redirects() {
        let requirements: [&[Role]; 4] = [
            &[],
            &[Role::Student],
            &[Role::Admin, Role::Instructor],
            &[Role::Student, Role::Instructor, Role::Admin],
        ];
        for required in requirements {
            assert_eq!(evaluate(&signed_out(), required), Decision::RedirectToLogin);
        }
    }

    #[test]
    fn empty_requirement_admits_any_identity() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            assert_eq!(evaluate(&signed_in(role), &[]), Decision::Allow);
        }
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            evaluate(&signed_in(Role::Admin), &[Role::Admin, Role::Instructor]),
            Decision::Allow
        );
        assert_eq!(
            evaluate(&signed_in(Role::Student), &[Role::Student]),
            Decision::Allow
        );
    }

    #[test]
    fn non_matching_role_is_forbidden_never_allowed() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            let others: Vec<Role> = [Role::Student, Role::Instructor, Role::Admin]
                .into_iter()
                .filter(|other| *other != role)
                .collect();
            assert_eq!(evaluate(&signed_in(role), &others), Decision::Forbidden);
        }
    }
}
