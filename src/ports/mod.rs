// src/ports/mod.rs

pub use abstract_factory::AbstractFactory;
pub use creator::Creator;
pub use product::{Product, ProductA, ProductB};

pub mod abstract_factory;
pub mod creator;
pub mod product;
