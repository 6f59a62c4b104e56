mod countries;
mod demos;
mod home;
mod play;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use countries::CountriesView;
pub use demos::{HelloView, LayoutView, StyleView};
pub use home::HomeView;
pub use play::PlayView;
pub use state::{ViewError, ViewState, view_state_from_resource};
