//! Session domain module.
//!
//! `QuerySession` is the only mutable state of the client. It is a plain data
//! structure so it can be tested without a controller or a network.

mod model;

pub use model::{QuerySession, RequestTicket};
