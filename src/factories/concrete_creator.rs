// src/factories/concrete_creator.rs

use crate::ConcreteProduct;
use crate::ports::Creator;
use std::fmt;

/// Factory method creators.
///
/// Only the factory method differs between variants; `some_operation`
/// comes from the [`Creator`] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteCreator {
    Creator1,
    Creator2,
}

impl ConcreteCreator {
    /// Every variant, in declaration order.
    pub const ALL: [ConcreteCreator; 2] = [ConcreteCreator::Creator1, ConcreteCreator::Creator2];

    /// Returns the variant name.
    pub fn name(&self) -> &'static str {
        match self {
            ConcreteCreator::Creator1 => "ConcreteCreator1",
            ConcreteCreator::Creator2 => "ConcreteCreator2",
        }
    }
}

impl Creator for ConcreteCreator {
    type Product = ConcreteProduct;

    fn factory_method(&self) -> ConcreteProduct {
        tracing::debug!(creator = self.name(), "running factory method");
        match self {
            ConcreteCreator::Creator1 => ConcreteProduct::Product1,
            ConcreteCreator::Creator2 => ConcreteProduct::Product2,
        }
    }
}

impl fmt::Display for ConcreteCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_method_mapping() {
        assert_eq!(
            ConcreteCreator::Creator1.factory_method(),
            ConcreteProduct::Product1
        );
        assert_eq!(
            ConcreteCreator::Creator2.factory_method(),
            ConcreteProduct::Product2
        );
    }

    #[test]
    fn test_some_operation_composes_product_label() {
        assert_eq!(
            ConcreteCreator::Creator1.some_operation(),
            "Creator: The same creator's code has just worked with: {Result of the ConcreateProduct1}"
        );
        assert!(
            ConcreteCreator::Creator2
                .some_operation()
                .contains("{Result of the ConcreateProduct2}")
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ConcreteCreator::Creator1.to_string(), "ConcreteCreator1");
        assert_eq!(ConcreteCreator::Creator2.name(), "ConcreteCreator2");
    }
}
