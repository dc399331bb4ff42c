//! Authentication
//!
//! Server side: an in-memory account directory and bearer token table
//! behind `/api/auth/*`. Client side: session storage, the route guard and
//! the login flow used by the CLI.

pub mod accounts;
pub mod error;
pub mod guard;
pub mod login;
pub mod session;
pub mod tokens;

pub use accounts::{hash_password, Account, AccountDirectory};
pub use error::{AuthError, AuthResult, SessionError};
pub use guard::{check as check_route, has_session, GuardDecision};
pub use login::{
    submit_login, AuthApi, HttpAuthApi, LoginError, LoginOutcome, LoginRequest, LoginResponse,
    Navigator, SessionInfo, DEFAULT_LOGIN_ERROR,
};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, IS_LOGGED_IN_KEY, TOKEN_KEY};
pub use tokens::{IssuedToken, TokenStore, DEFAULT_TOKEN_TTL_MINUTES, MAX_TOKEN_TTL_MINUTES};
