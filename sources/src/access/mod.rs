pub use archive::*;
pub use http::*;

mod archive;
mod http;
