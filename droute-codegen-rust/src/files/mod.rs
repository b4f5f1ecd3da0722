//! Files emitted by the Rust generator.

mod route_module;

pub use route_module::RouteModuleRs;
