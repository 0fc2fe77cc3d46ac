use crate::ports::{ProductA, ProductB};

/// Produces one product of each family.
///
/// Products are returned by value, so the caller owns them and they are
/// dropped at the end of the caller's scope. Creation never fails.
pub trait AbstractFactory {
    type ProductA: ProductA;
    type ProductB: ProductB;

    fn create_product_a(&self) -> Self::ProductA;

    fn create_product_b(&self) -> Self::ProductB;
}
