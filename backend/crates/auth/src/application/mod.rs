//! Application Layer - Use cases and services

pub mod config;
pub mod login;
pub mod profile;
pub mod register;
pub mod token;

pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use profile::{ChangePasswordInput, ProfileUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
