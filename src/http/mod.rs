//! Throw execution: one timed HTTP GET per call.
mod client;
mod throw;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ClientOptions, ReqwestTransport, ReqwestTransportFactory, build_client};
pub use throw::{Throw, throw};
pub use transport::{Transport, TransportFactory, TransportResponse};
