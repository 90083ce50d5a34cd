mod dto;
mod entity;
mod error;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::*;
pub use error::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;
