//! Client library for the Nexmo Numbers and Verify REST APIs.
//!
//! Every endpoint is split into a pure request builder and a pure response
//! parser (see [`Endpoint`]), so the mapping can be exercised without a live
//! [`Transport`](transport::Transport). The clients in [`numbers`] and
//! [`verify`] glue those halves to a transport.

pub mod config;
mod endpoint;
pub mod error;
pub mod numbers;
mod request;
pub mod transport;
pub mod verify;

pub use config::{Credentials, HttpConfig};
pub use endpoint::Endpoint;
pub use error::{ClientError, ResponseParseError};
pub use numbers::NumbersClient;
pub use request::{ApiHost, ApiRequest};
pub use verify::VerifyClient;
