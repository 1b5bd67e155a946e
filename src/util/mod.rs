mod coerce;
pub use coerce::{as_int, maybe_int, truthy, MaybeInt};
