use crate::PatternResult;
use crate::ports::{AbstractFactory, Creator, ProductA, ProductB};
use std::io::Write;

/// Exercises one product of each family and writes their results.
///
/// Works with any factory; both products are dropped before returning.
///
/// # Arguments
/// * `factory` - Factory to build the products with
/// * `out` - Sink receiving one line per product
///
/// # Returns
/// * `Ok(())` - Both lines were written
/// * `Err(PatternError)` - Writing to `out` failed
pub fn abstract_factory_client<F, W>(factory: &F, out: &mut W) -> PatternResult<()>
where
    F: AbstractFactory + ?Sized,
    W: Write + ?Sized,
{
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    writeln!(out, "{}", product_a.useful_function_a())?;
    writeln!(out, "{}", product_b.useful_function_b())?;

    Ok(())
}

/// Runs the creator's business operation without knowing its concrete type.
pub fn factory_method_client<C, W>(creator: &C, out: &mut W) -> PatternResult<()>
where
    C: Creator + ?Sized,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "I am not aware of the creator's class, but I can still work correctly with it! "
    )?;
    writeln!(out, "{}", creator.some_operation())?;

    Ok(())
}
