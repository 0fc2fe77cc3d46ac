pub mod client;
pub mod demo;

pub use client::{abstract_factory_client, factory_method_client};
pub use demo::{run_abstract_factory_demo, run_factory_method_demo};
