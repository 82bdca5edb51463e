// Tue Jan 13 2026 - Alex

pub mod compiler;
pub mod error;
pub mod template;

pub use compiler::{compile, TemplateCompiler};
pub use error::TemplateError;
pub use template::{Template, TemplateElement};
pub(crate) use template::{get_scalar, put_scalar};
