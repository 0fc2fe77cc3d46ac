// src/factories/concrete_factory.rs

use crate::ports::AbstractFactory;
use crate::{ConcreteProductA, ConcreteProductB};
use std::fmt;

/// Abstract factory variants.
///
/// Each variant is bound to one member of every product family, so the
/// products it hands out always belong together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteFactory {
    Factory1,
    Factory2,
}

impl ConcreteFactory {
    /// Every variant, in declaration order.
    pub const ALL: [ConcreteFactory; 2] = [ConcreteFactory::Factory1, ConcreteFactory::Factory2];

    /// Returns the variant name.
    pub fn name(&self) -> &'static str {
        match self {
            ConcreteFactory::Factory1 => "ConcreteFactory1",
            ConcreteFactory::Factory2 => "ConcreteFactory2",
        }
    }
}

impl AbstractFactory for ConcreteFactory {
    type ProductA = ConcreteProductA;
    type ProductB = ConcreteProductB;

    /// Creates the product A bound to this factory.
    ///
    /// # Returns
    /// * `ConcreteProductA::A1` - for `Factory1`
    /// * `ConcreteProductA::A2` - for `Factory2`
    fn create_product_a(&self) -> ConcreteProductA {
        tracing::debug!(factory = self.name(), "creating product A");
        match self {
            ConcreteFactory::Factory1 => ConcreteProductA::A1,
            ConcreteFactory::Factory2 => ConcreteProductA::A2,
        }
    }

    /// Creates the product B bound to this factory.
    ///
    /// # Returns
    /// * `ConcreteProductB::B1` - for `Factory1`
    /// * `ConcreteProductB::B2` - for `Factory2`
    fn create_product_b(&self) -> ConcreteProductB {
        tracing::debug!(factory = self.name(), "creating product B");
        match self {
            ConcreteFactory::Factory1 => ConcreteProductB::B1,
            ConcreteFactory::Factory2 => ConcreteProductB::B2,
        }
    }
}

impl fmt::Display for ConcreteFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
