// State management module.
// List view state, collaborator interfaces, and notifications.

pub mod collab;
pub mod list_view;
pub mod loading;
pub mod toasts;

pub use collab::{Confirm, ListNavigator, Notifier};
pub use list_view::{ListViewState, ModelTab, RowTarget};
pub use loading::LoadingState;
pub use toasts::{MAX_TOAST_SECONDS, ToastLevel, Toasts};
