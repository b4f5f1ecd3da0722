//! Language generator abstractions.

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, write_generated};
