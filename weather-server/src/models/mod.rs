//! Request, response and event envelope types

pub mod request;
pub mod response;
pub mod event;

pub use request::*;
pub use response::*;
pub use event::*;
