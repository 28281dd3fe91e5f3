//! Templates and messages used when writing listings into documents

mod code;
mod messages;
mod template;

pub use code::{CodeTemplate, Line, Listing, CODE_TEMPLATE};
pub use messages::{English, Localize, Variables, SIMPLIFIED_CODE};
pub use template::Template;
