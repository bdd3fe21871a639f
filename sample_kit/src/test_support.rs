//! Test-only builders for stacks and reservations.

use crate::core::reservation::{Reservation, User};
use crate::core::stack::Stack;

/// Stack with `values` pushed in order (last value on top).
pub fn stack_of(values: &[i32]) -> Stack<i32> {
    values.iter().copied().collect()
}

/// A fresh user together with a reservation they made.
pub fn owned_reservation(is_admin: bool) -> (User, Reservation) {
    let owner = User::new(is_admin);
    let reservation = Reservation::new(Some(owner.clone()));
    (owner, reservation)
}

/// Regular user, admin, and a second regular user, all distinct.
pub fn cast() -> (User, User, User) {
    (User::regular(), User::admin(), User::regular())
}
