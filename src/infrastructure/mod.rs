pub mod persistence;
pub mod repositories;

pub use persistence::{Database, SqliteDocumentStore};
pub use repositories::InMemoryDocumentStore;
