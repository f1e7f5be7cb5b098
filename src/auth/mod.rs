//! Authentication against the shipping API.
//!
//! [`HttpAuthGateway`] talks to the `/auth/*` endpoints and [`AuthSession`]
//! keeps the signed-in user and token between calls.

mod gateway;
mod model;
mod session;

pub use gateway::{AuthGateway, HttpAuthGateway};
pub use model::{AuthToken, Credentials, Gender, RegistrationRequest, UserProfile, UserUpdate};
pub use session::{AuthSession, PersistedSession};
