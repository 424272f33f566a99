pub mod query_session_controller;
pub mod request_dispatcher;

pub use query_session_controller::{QuerySessionController, SubmitOutcome};
pub use request_dispatcher::RequestDispatcher;
