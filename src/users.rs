use crate::domain::UserProfile;

/// Source of user data for suppressed addresses. Classification only looks at
/// the profile it is handed, so swapping in a real lookup (CRM export, auth
/// database) changes the report without touching the decision table.
pub trait UserDirectory {
    fn profile_for(&self, index: usize, email: &str) -> UserProfile;
}

/// Fabricated profiles for when no real user data is joined in: a synthetic
/// id derived from the record's position, an "investor" role, no login
/// timestamp, and `has_logged_in = false` for everyone.
pub struct PlaceholderDirectory;

impl UserDirectory for PlaceholderDirectory {
    fn profile_for(&self, index: usize, _email: &str) -> UserProfile {
        UserProfile {
            user_id: format!("U{}", 1000 + index),
            role: "investor".to_string(),
            last_login: None,
            has_logged_in: false,
            login_allowed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_profiles_are_sequential_and_logged_out() {
        let directory = PlaceholderDirectory;
        let first = directory.profile_for(0, "a@example.com");
        let third = directory.profile_for(2, "b@example.com");
        assert_eq!(first.user_id, "U1000");
        assert_eq!(third.user_id, "U1002");
        assert!(!first.has_logged_in);
        assert!(first.last_login.is_none());
        assert!(first.login_allowed);
        assert_eq!(first.role, "investor");
    }
}
