//! Front-end navigation: a static route table mapping paths to components.

pub mod components;
pub mod router;

pub use router::{bookmarker_routes, configure, RouteTable};
