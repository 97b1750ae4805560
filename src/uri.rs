// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};

/// A link target exactly as written between `<` and `>`.
///
/// No validation, normalization or resolution against a base URI happens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UriRef(String);

impl UriRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UriRef {
    fn from(s: String) -> Self {
        UriRef(s)
    }
}

impl From<&str> for UriRef {
    fn from(s: &str) -> Self {
        UriRef(s.to_string())
    }
}

impl AsRef<str> for UriRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for UriRef {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UriRef {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for UriRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
