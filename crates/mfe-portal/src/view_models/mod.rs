pub mod create_mfe_view_model;
pub mod dashboard_view_model;
pub mod key_bindings_view_model;
pub mod status_bar;

pub use create_mfe_view_model::{CreateMfeViewModel, FieldRowViewModel, StepRowViewModel, StepState};
pub use dashboard_view_model::{DashboardViewModel, DeploymentRow, StatCard};
pub use key_bindings_view_model::KeyBindingsPanelViewModel;
pub use status_bar::{StatusBarViewModel, ToastViewModel};
