// src/factories/mod.rs

mod concrete_creator;
mod concrete_factory;

pub use concrete_creator::ConcreteCreator;
pub use concrete_factory::ConcreteFactory;
