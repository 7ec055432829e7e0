//! Core domain models and business logic for the Zpluse portal
//!
//! Everything in here is target-independent: it compiles for the server
//! render, the browser bundle and native unit tests alike. Browser-only
//! glue (transport, storage) lives in `ui`.

pub mod api_client;
pub mod auth_client;
pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod forms;
pub mod guard;
pub mod http;
pub mod live_class;
pub mod lms;
pub mod role;
pub mod route;
pub mod session;
pub mod shortlist;
pub mod toast;

pub use api_client::{ApiClient, RequestOptions};
pub use auth_client::{HostedAuth, MemoryPersistence, SessionPersistence};
pub use config::ClientConfig;
pub use directory::{College, CompareSelection, SortKey, ToggleOutcome};
pub use error::{ApiError, AuthError};
pub use guard::GuardState;
pub use role::Role;
pub use session::{AuthChangeEvent, AuthState, Session, SessionStore, User};
pub use toast::{Toast, ToastKind, ToastQueue};
