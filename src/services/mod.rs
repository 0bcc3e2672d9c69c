// Service exports
pub mod cache;
pub mod memory;
pub mod postgres;
pub mod store;

pub use cache::{CachedProfileStore, CacheStats};
pub use memory::{InMemoryStore, RecordedAction};
pub use postgres::PostgresStore;
pub use store::{MatchActionStore, ProfileStore, StoreError};
