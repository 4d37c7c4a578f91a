//! The real session: Twinfield logon over the session web service.
//!
//! Deriving a `Login` only validates the credentials and prepares the
//! HTTP client. The logon request itself happens on the first client
//! request; the session id and cluster it returns are cached until
//! [`Login::invalidate`] is called.

mod logon;
mod session;

pub use logon::LogonState;
pub use session::Login;
