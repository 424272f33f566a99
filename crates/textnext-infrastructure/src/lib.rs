pub mod config_service;
pub mod http_transport;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::http_transport::ReqwestTransport;
