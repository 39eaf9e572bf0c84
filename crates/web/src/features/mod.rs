pub mod categories;
pub mod contestants;
pub mod events;
pub mod judges;
pub mod public;
pub mod reports;
pub mod scoring;
