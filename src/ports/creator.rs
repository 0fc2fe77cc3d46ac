use crate::ports::Product;

const SOME_OPERATION_PREFIX: &str = "Creator: The same creator's code has just worked with: ";

/// Creator of the factory method pattern.
///
/// Implementors only supply [`Creator::factory_method`]; the work that uses
/// the product lives in [`Creator::some_operation`].
pub trait Creator {
    type Product: Product;

    fn factory_method(&self) -> Self::Product;

    /// Builds a product, uses it and returns a description of the result.
    ///
    /// The product is dropped before this returns.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        tracing::trace!("creator obtained product from factory method");
        format!("{}{}", SOME_OPERATION_PREFIX, product.operation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Product for Echo {
        fn operation(&self) -> String {
            "{echo}".to_string()
        }
    }

    struct EchoCreator;

    impl Creator for EchoCreator {
        type Product = Echo;

        fn factory_method(&self) -> Echo {
            Echo
        }
    }

    #[test]
    fn test_some_operation_uses_factory_method() {
        assert_eq!(
            EchoCreator.some_operation(),
            "Creator: The same creator's code has just worked with: {echo}"
        );
    }
}
