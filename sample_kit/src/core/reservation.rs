//! Reservation ownership and cancellation rules.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

static NEXT_USER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token allocated once per [`User::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    fn next() -> Self {
        UserId(NEXT_USER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

/// A user entity.
///
/// Equality is identity: two users built with identical attributes are
/// distinct, while a clone is a handle to the same user.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    is_admin: bool,
}

impl User {
    pub fn new(is_admin: bool) -> Self {
        Self {
            id: UserId::next(),
            is_admin,
        }
    }

    pub fn regular() -> Self {
        Self::new(false)
    }

    pub fn admin() -> Self {
        Self::new(true)
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[derive(Debug, Clone, Default)]
pub struct Reservation {
    made_by: Option<User>,
}

impl Reservation {
    pub fn new(made_by: Option<User>) -> Self {
        Self { made_by }
    }

    pub fn made_by(&self) -> Option<&User> {
        self.made_by.as_ref()
    }

    pub fn set_made_by(&mut self, made_by: Option<User>) {
        self.made_by = made_by;
    }

    /// Admins may cancel any reservation, including one with no owner.
    /// Otherwise only the user who made it may.
    pub fn can_be_cancelled_by(&self, candidate: Option<&User>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        if candidate.is_admin() {
            return true;
        }
        self.made_by() == Some(candidate)
    }
}
