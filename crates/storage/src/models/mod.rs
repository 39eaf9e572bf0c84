mod category;
mod contestant;
mod event;
mod judge;
mod score;

pub use category::Category;
pub use contestant::Contestant;
pub use event::{Event, EventSnapshot};
pub use judge::Judge;
pub use score::Score;
