use crate::ports::{Product, ProductA, ProductB};
use std::fmt;

/// Members of the first product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteProductA {
    A1,
    A2,
}

impl ConcreteProductA {
    pub fn label(&self) -> &'static str {
        match self {
            ConcreteProductA::A1 => "The result of the Concrete ProductA1",
            ConcreteProductA::A2 => "The result of the Concrete ProductA2",
        }
    }
}

impl ProductA for ConcreteProductA {
    fn useful_function_a(&self) -> String {
        self.label().to_string()
    }
}

impl fmt::Display for ConcreteProductA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Members of the second product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteProductB {
    B1,
    B2,
}

impl ConcreteProductB {
    pub fn label(&self) -> &'static str {
        match self {
            ConcreteProductB::B1 => "The result of the Concrete ProductB1",
            ConcreteProductB::B2 => "The result of the Concrete ProductB2",
        }
    }
}

impl ProductB for ConcreteProductB {
    fn useful_function_b(&self) -> String {
        self.label().to_string()
    }
}

impl fmt::Display for ConcreteProductB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Products handed out by the factory method creators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteProduct {
    Product1,
    Product2,
}

impl ConcreteProduct {
    // "Concreate" is the label as it has always been printed.
    pub fn label(&self) -> &'static str {
        match self {
            ConcreteProduct::Product1 => "{Result of the ConcreateProduct1}",
            ConcreteProduct::Product2 => "{Result of the ConcreateProduct2}",
        }
    }
}

impl Product for ConcreteProduct {
    fn operation(&self) -> String {
        self.label().to_string()
    }
}

impl fmt::Display for ConcreteProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_a_labels() {
        assert_eq!(
            ConcreteProductA::A1.useful_function_a(),
            "The result of the Concrete ProductA1"
        );
        assert_eq!(
            ConcreteProductA::A2.useful_function_a(),
            "The result of the Concrete ProductA2"
        );
    }

    #[test]
    fn test_product_b_labels() {
        assert_eq!(
            ConcreteProductB::B1.useful_function_b(),
            "The result of the Concrete ProductB1"
        );
        assert_eq!(
            ConcreteProductB::B2.useful_function_b(),
            "The result of the Concrete ProductB2"
        );
    }

    #[test]
    fn test_factory_method_product_labels() {
        assert_eq!(
            ConcreteProduct::Product1.operation(),
            "{Result of the ConcreateProduct1}"
        );
        assert_eq!(
            ConcreteProduct::Product2.operation(),
            "{Result of the ConcreateProduct2}"
        );
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(ConcreteProductA::A2.to_string(), ConcreteProductA::A2.label());
        assert_eq!(ConcreteProductB::B1.to_string(), ConcreteProductB::B1.label());
        assert_eq!(
            ConcreteProduct::Product2.to_string(),
            ConcreteProduct::Product2.label()
        );
    }
}
