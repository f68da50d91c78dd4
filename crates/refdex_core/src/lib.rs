//! Core logic for refdex: read-only access to the research store,
//! markdown index rendering, and store statistics.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod stats;

pub use export::index::render_index;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{parse_authors, ItemRecord, ItemType};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};
pub use stats::{collect_stats, IndexStats};
