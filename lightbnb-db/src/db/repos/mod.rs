//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; never opens connections itself
//! - Binds every value as a parameter
//! - Propagates database errors instead of logging and dropping them

pub mod users;
pub mod reservations;
pub mod properties;

pub use users::{UserRepo, User};
pub use reservations::{ReservationRepo, Reservation, GuestReservation};
pub use properties::{PropertyRepo, Property, PropertyListing};
