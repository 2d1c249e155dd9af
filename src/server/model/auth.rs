//! Roles, role sets and token claims.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Application role carried in `user.app_roles` and token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    Staff,
    Member,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Member => "member",
        }
    }

    /// Parses a lowercase role tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "admin" => Some(Self::Admin),
            "staff" => Some(Self::Staff),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

/// The roles held by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new(roles: &[Role]) -> Self {
        Self(roles.iter().copied().collect())
    }

    /// Builds a role set from tags, rejecting the first unknown tag.
    ///
    /// # Returns
    /// - `Ok(RoleSet)` - Every tag was recognized
    /// - `Err(String)` - The unknown tag
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Self, String> {
        tags.iter()
            .map(|tag| Role::parse(tag.as_ref()).ok_or_else(|| tag.as_ref().to_string()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    /// Builds a role set from tags, skipping unknown ones.
    pub fn from_tags_lossy<S: AsRef<str>>(tags: &[S]) -> Self {
        Self(tags.iter().filter_map(|tag| Role::parse(tag.as_ref())).collect())
    }

    #[cfg(test)]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Whether this set holds at least one of `required`.
    ///
    /// An empty `required` list is satisfied by any set, including an empty one.
    pub fn intersects(&self, required: &[Role]) -> bool {
        required.is_empty() || required.iter().any(|role| self.0.contains(role))
    }

    pub fn to_tags(&self) -> Vec<String> {
        self.0.iter().map(|role| role.as_str().to_string()).collect()
    }
}

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: user id as a string.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub app_roles: Vec<String>,
    /// Issued-at (Unix seconds).
    pub iat: i64,
    /// Expiration (Unix seconds).
    pub exp: i64,
    pub iss: String,
    /// User's token version at issuance.
    pub ver: i32,
}

impl Claims {
    /// User id from `sub`, if it is numeric.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn roles(&self) -> RoleSet {
        RoleSet::from_tags_lossy(&self.app_roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_any_required_role() {
        let roles = RoleSet::new(&[Role::Staff]);

        assert!(roles.intersects(&[Role::Admin, Role::Staff]));
        assert!(!roles.intersects(&[Role::Admin]));
    }

    #[test]
    fn empty_requirement_is_always_met() {
        assert!(RoleSet::default().intersects(&[]));
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_eq!(
            RoleSet::from_tags(&["admin", "janitor"]),
            Err("janitor".to_string())
        );
    }

    #[test]
    fn tags_are_sorted_and_deduplicated() {
        let roles = RoleSet::from_tags(&["member", "admin", "admin"]).unwrap();
        assert_eq!(roles.to_tags(), vec!["admin", "member"]);
    }
}
