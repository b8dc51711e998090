#[cfg(feature = "desktop")]
pub mod app;
pub mod app_context;
#[cfg(feature = "desktop")]
pub mod display;
#[cfg(feature = "desktop")]
pub mod pages;
#[cfg(feature = "desktop")]
pub mod staff_service;

#[cfg(feature = "desktop")]
pub use app::*;
pub use app_context::StaffContext;
