//! Authentication: session guard, login/logout and session creation.

mod guard;
mod login;
mod session;

pub use guard::{Access, AuthState, SessionGuard, LOGIN_PATH};
pub use login::{login, logout, LoginForm, LOGIN_FAILED};
pub use session::AuthResponse;
pub(crate) use session::start_session;
