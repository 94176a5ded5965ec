//! Typed stores over the rental schema
//!
//! Each store holds a pool handle and maps one domain operation to one
//! parameterized statement. Failures carry table and operation context;
//! absence is `Option`, never a swallowed error.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyStore;
pub use reservations::ReservationStore;
pub use users::UserStore;
