//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
mod tokens;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use refresh::{RefreshOutput, RefreshUseCase};
pub use register::{RegisterInput, RegisterUseCase, SessionOutput};
