pub mod api;
pub mod auth;
pub mod colleges;
pub mod common;
pub mod icon;
pub mod layout;
pub mod markdown;
pub mod pages;
pub mod storage;
pub mod theme;
pub mod toast;
pub mod transport;

pub use icon::{Icon, icons};
pub use layout::{DashboardLayout, PublicLayout};
pub use toast::ToastContainer;
