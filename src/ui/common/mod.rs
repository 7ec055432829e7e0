//! Common reusable UI components
//!
//! This module provides commonly used UI components that are shared across
//! the public pages and the dashboards.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;
pub mod tabs;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::{BackendUnavailable, EmptyState, ErrorMessage, SuccessMessage};
pub use modal::Modal;
pub use spinner::{FullPageSpinner, InlineSpinner, SkeletonGrid, Spinner, SpinnerSize};
pub use tabs::{TabItem, TabPanel, Tabs};
