mod contact;
mod home;

pub use contact::ContactView;
pub use home::HomeView;

use crate::core::Route;

/// The one mounted page view; dropping it releases everything it acquired.
pub enum View {
    Home(HomeView),
    Contact(ContactView),
}

impl View {
    pub fn route(&self) -> Route {
        match self {
            View::Home(_) => Route::Home,
            View::Contact(_) => Route::Contact,
        }
    }
}
