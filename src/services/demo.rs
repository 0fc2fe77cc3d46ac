use crate::PatternResult;
use crate::factories::{ConcreteCreator, ConcreteFactory};
use crate::services::client::{abstract_factory_client, factory_method_client};
use std::io::Write;

/// Runs the abstract factory client against every factory variant.
pub fn run_abstract_factory_demo<W: Write + ?Sized>(out: &mut W) -> PatternResult<()> {
    writeln!(out, "The app is launched.")?;

    for (factory, ordinal) in ConcreteFactory::ALL.iter().zip(["first", "second"]) {
        tracing::debug!(factory = factory.name(), "running abstract factory client");
        writeln!(
            out,
            "Client: Testing client code with the {} factory type: ",
            ordinal
        )?;
        abstract_factory_client(factory, out)?;
    }

    out.flush()?;
    Ok(())
}

/// Runs the factory method client against every creator variant.
pub fn run_factory_method_demo<W: Write + ?Sized>(out: &mut W) -> PatternResult<()> {
    for creator in ConcreteCreator::ALL {
        tracing::debug!(creator = creator.name(), "running factory method client");
        writeln!(out, "App Launched with the {}. ", creator)?;
        factory_method_client(&creator, out)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}
