pub mod config;
pub mod constants;
pub mod contact;
pub mod follower;
pub mod frame_loop;
pub mod hover;
pub mod reveal;
pub mod route;
pub mod submit;

pub use config::*;
pub use constants::*;
pub use contact::*;
pub use follower::*;
pub use frame_loop::*;
pub use hover::*;
pub use reveal::*;
pub use route::*;
pub use submit::*;

// Page templates bundled as string constants
pub static HOME_HTML: &str = include_str!("../../templates/home.html");
pub static CONTACT_HTML: &str = include_str!("../../templates/contact.html");
