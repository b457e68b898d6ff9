//! Domain Layer

pub mod entity {
    pub mod todo;
}

pub mod repository;
