//! REST error values for HTTP response bodies

pub mod category;
pub mod decode;
pub mod rest_error;

pub use category::Category;
pub use decode::DecodeError;
pub use rest_error::RestError;
