use std::{collections::BTreeSet, fmt, str::FromStr};

use super::errors::AuthError;
use crate::errors::ServiceError;

/// What a caller is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Read records.
    User,
    /// Create, update and delete records.
    Admin,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::User => "user",
            Capability::Admin => "admin",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "role_user" => Ok(Capability::User),
            "admin" | "role_admin" => Ok(Capability::Admin),
            other => Err(AuthError::UnknownCapability(other.to_string())),
        }
    }
}

/// The caller of one request. Capabilities are independent: `admin` does not imply `user`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    subject: Option<String>,
    capabilities: BTreeSet<Capability>,
}

impl Principal {
    pub fn new(subject: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self { subject: Some(subject.into()), capabilities: capabilities.into_iter().collect() }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.capabilities.iter().copied()
    }

    pub fn has(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }

    pub fn require(&self, cap: Capability) -> Result<(), ServiceError> {
        if self.has(cap) {
            Ok(())
        } else {
            tracing::debug!(subject = ?self.subject, capability = %cap, "capability missing");
            Err(ServiceError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("admin".parse::<Capability>().unwrap(), Capability::Admin);
        assert_eq!("ROLE_USER".parse::<Capability>().unwrap(), Capability::User);
        assert!(matches!("ROLE_DRIVER".parse::<Capability>(), Err(AuthError::UnknownCapability(_))));
    }

    #[test]
    fn anonymous_has_nothing() {
        let p = Principal::anonymous();
        assert_eq!(p.subject(), None);
        assert!(matches!(p.require(Capability::User), Err(ServiceError::Forbidden)));
    }

    #[test]
    fn admin_does_not_imply_user() {
        let p = Principal::new("root@ucsb.edu", [Capability::Admin]);
        assert!(p.require(Capability::Admin).is_ok());
        assert!(p.require(Capability::User).is_err());
    }
}
