//! In-memory storage backend.

mod repository;

pub use repository::InMemoryVisitRepository;
