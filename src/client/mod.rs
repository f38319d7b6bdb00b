mod error;
mod http;

pub use error::ClientError;
pub use http::HttpClient;
