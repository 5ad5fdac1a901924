pub mod slot;
pub mod time_of_day;
pub mod weekday;

pub use slot::{ScopeKey, Slot, SlotFilter, SlotInput};
pub use time_of_day::TimeOfDay;
pub use weekday::Weekday;
