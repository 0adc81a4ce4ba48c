//! Outbound side of a submission: payload encoding and the HTTP transport

pub mod api;
pub mod encoder;

pub use api::{AnalysisBackend, HttpBackend, RawResponse};
pub use encoder::{encode, MultipartPayload, PartBody, PayloadPart};
