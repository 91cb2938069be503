mod config;
pub use config::{ClientConfig, DEFAULT_BASE_URL};

mod error;
pub use error::ClientError;

mod http;
pub use http::HttpTechApi;
