//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! Agents plug into the game loop through [`Agent`], user interfaces listen
//! through [`MoveObserver`], and value tables are stored through
//! [`SnapshotRepository`] implementations in the adapters module.

pub mod agent;
pub mod observer;
pub mod repository;

pub use agent::Agent;
pub use observer::MoveObserver;
pub use repository::SnapshotRepository;
