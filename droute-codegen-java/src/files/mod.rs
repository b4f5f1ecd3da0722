//! Files emitted by the Java generator.

mod router_module;

pub use router_module::RouterModuleClass;
