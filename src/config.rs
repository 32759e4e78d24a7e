//! Application-level configuration constants.

// Person-count selector bounds
pub const DEFAULT_PERSON_COUNT: usize = 1;
pub const MAX_PERSON_COUNT: usize = 50;
