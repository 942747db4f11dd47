pub mod api;
pub mod error;
pub mod store;
pub mod types;

pub use api::AuthApi;
pub use error::{ApiError, ApiResult};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::RequestTokenGrant;
