//! Pages
//!
//! One component per route.

mod home;
mod create_point;
mod success;

pub use home::Home;
pub use create_point::CreatePoint;
pub use success::Success;
