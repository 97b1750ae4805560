// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Parses HTTP `Link` header values (RFC 8288) into a `Group` of links keyed
//! by relation type.
//!
//! ```
//! let group = httplink::parse(r#"<https://example.com/?page=2>; rel="next"; title="foo""#);
//! let next = &group["next"];
//!
//! assert_eq!(next.uri(), "https://example.com/?page=2");
//! assert_eq!(next.rel(), "next");
//! assert_eq!(next.extra().get("title").map(String::as_str), Some("foo"));
//! ```
//!
//! With the default `http` feature, `httplink::http` reads the header from
//! `http::HeaderMap`, `http::Request` and `http::Response`.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod group;
#[cfg(feature = "http")]
pub mod http;
pub mod link;
pub mod param;
pub mod parser;
pub mod scanner;
pub mod uri;

pub use group::Group;
pub use link::Link;
pub use parser::{parse, parse_values};
