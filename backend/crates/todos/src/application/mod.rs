//! Application Layer

pub mod manage;

pub use manage::TodoUseCase;
