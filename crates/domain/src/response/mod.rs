//! HTTP Response domain types

mod spec;

pub use spec::{ResponseSpec, RouteInfo, StatusCode};
