pub mod category;
pub mod contestant;
pub mod event;
pub mod judge;
pub mod ranking;
pub mod report;
pub mod score;
