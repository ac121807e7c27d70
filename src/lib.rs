//! # Simple client for the DNSPod API.
//!
//! Implements a blocking client for the [DNSPod API]. Every call is a form
//! encoded POST carrying the login token, answered with a JSON envelope.
//!
//! ## Examples
//!
//! ```no_run
//! use dnspod::Client;
//! use dnspod::record::{CreateRecordOptions, RecordType, DEFAULT_LINE};
//!
//! let client = Client::builder()
//!     .token("<ID>,<TOKEN>")
//!     .build()
//!     .unwrap();
//!
//! let (created, _) = client
//!     .records()
//!     .create(&CreateRecordOptions {
//!         domain: Some("example.com".to_string()),
//!         sub_domain: Some("www".to_string()),
//!         record_type: Some(RecordType::A.into()),
//!         record_line: Some(DEFAULT_LINE.to_string()),
//!         value: Some("1.2.3.4".to_string()),
//!     })
//!     .unwrap();
//!
//! println!("{:?}", created.record.and_then(|r| r.id));
//! ```
//!
//! [DNSPod API]: https://docs.dnspod.cn/api/

mod client;
pub mod domain;
mod envelope;
mod errors;
mod payload;
pub mod record;
mod request;
mod transport;

pub use client::*;
pub use envelope::Status;
pub use errors::*;
pub(crate) use payload::*;
pub use request::{Request, ResponseMeta};
pub use reqwest::{Method, StatusCode};
pub use transport::*;
