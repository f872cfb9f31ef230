pub mod priority_queue;
pub mod recency_cache;

pub use priority_queue::{Entry, PriorityQueue};
pub use recency_cache::{Access, RecencyCache};
