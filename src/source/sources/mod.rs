mod file;
mod http;

pub use file::FileDeckSource;
pub use http::HttpDeckSource;
