/// First product family of the abstract factory.
///
/// Every factory produces exactly one member of this family.
pub trait ProductA {
    fn useful_function_a(&self) -> String;
}

/// Second product family of the abstract factory.
pub trait ProductB {
    fn useful_function_b(&self) -> String;
}

/// Product returned by a [`Creator`](crate::ports::Creator)'s factory method.
pub trait Product {
    fn operation(&self) -> String;
}
