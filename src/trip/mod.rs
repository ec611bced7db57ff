//! Trip domain types
//!
//! The transient trip request, its option enums, and the pure stage
//! machine derived from it.

mod request;
mod stage;

pub use request::{Accommodation, Budget, MAX_DURATION_DAYS, MIN_DURATION_DAYS, MIN_MEMBER_COUNT, Transit, TripRequest};
pub use stage::Stage;
