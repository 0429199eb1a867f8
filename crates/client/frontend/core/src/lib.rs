//! Frontend-agnostic pieces of the CamTelligence dashboard.
//!
//! Holds configuration, page routing, the view model and the background
//! services that keep it fresh. Rendering lives in the concrete frontends.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod page;
pub mod services;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, PollingConfig};
pub use event::{DashboardUpdate, EventImpact};
pub use frontend::Frontend;
pub use page::Page;
pub use services::{PollHandle, Poller, ViewModelUpdater};
pub use view_model::ViewModel;
