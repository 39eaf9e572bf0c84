pub mod report;
pub mod submission;
pub mod tabulation;
