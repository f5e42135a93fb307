pub mod tags;
pub mod url_validator;

pub use tags::{clean_tags, parse_tags};
pub use url_validator::{UrlValidationError, normalize_url, validation_error_message};
