// ABOUTME: Course Manager session library
// ABOUTME: Signed-in user context, pluggable cookie-style persistence, and the login flow

pub mod context;
pub mod error;
pub mod login;
pub mod session;
pub mod storage;

// Re-export main types
pub use context::AuthContext;
pub use error::{AuthError, AuthResult};
pub use login::{LoginForm, LoginPage};
pub use session::{SameSite, Session, SessionCookie};
pub use storage::{CookieFileStore, MemorySessionStore, SessionStore};
