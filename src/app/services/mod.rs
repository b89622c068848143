pub mod template_resolver;

pub use template_resolver::{SubstitutionContext, contribution, resolve_files};
