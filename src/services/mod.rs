// Tmeon services
// Stateless helpers used by the window controller and the UI layer.

pub mod address;
pub mod dialogs;
pub mod download_gatekeeper;
pub mod menu;
