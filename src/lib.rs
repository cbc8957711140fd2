//! route-sketch core
//!
//! State machine for drawing polyline routes on a map: click to place
//! points, double-click to finish a route, then select or delete routes from
//! a list. Rendering is left to the host.

pub mod traits;
pub mod polyline;
pub mod route;
pub mod ids;
pub mod session;
pub mod interaction;
pub mod controller;
pub mod view;
