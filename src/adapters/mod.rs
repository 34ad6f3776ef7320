//! Adapters implementing domain ports.
//!
//! This module contains storage implementations of the traits defined in the
//! ports module.

pub mod in_memory_repository;
pub mod msgpack_repository;

pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
