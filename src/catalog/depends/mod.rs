pub mod filename;
pub mod format;
pub mod health;
pub mod timeslot;
