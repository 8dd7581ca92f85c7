//! Client library for the BaseSpace REST API.
//!
//! Every response from the platform is wrapped in an envelope. [BaseApi]
//! checks the envelope's `ResponseStatus` and converts its `Response` to a
//! model, either a single object ([BaseApi::request]) or the items of a list
//! ([BaseApi::request_list]).

pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod models;
pub mod params;
pub mod transport;
pub mod types;

mod client;

pub use client::base::BaseApi;
pub use client::basespace::BaseSpaceApi;
pub use client::billing::BillingApi;
pub use config::ClientConfig;
pub use envelope::{ResourcePage, ResponseStatus};
pub use errors::{
    OAuthError, RequestError, ServerResponseError, TransportError, UnknownParameterError,
};
pub use params::{HeaderParams, ParamValue, QueryParameters, QueryParams};
pub use transport::{ApiRequest, HttpTransport, Transport};
