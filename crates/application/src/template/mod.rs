//! URI template expansion
//!
//! Parses RFC 6570 style templates (`{id}`, `{?foo,bar}`, `{+path}`, ...)
//! and expands them with scalar parameters.
//!
//! # Usage
//!
//! ```
//! use urltpl_application::template::expand;
//! use urltpl_domain::TemplateParams;
//!
//! let params = TemplateParams::new().with("id", 123);
//! let url = expand("https://x.test/test/{id}", &params).unwrap();
//! assert_eq!(url, "https://x.test/test/123");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{UriTemplate, expand};
pub use parser::{Expression, Modifier, Operator, TemplatePart, VarSpec, is_valid_varname};
