// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::link::Link;
use std::collections::hash_map::{self, HashMap};
use std::iter::FromIterator;
use std::ops::Index;

/// A collection of links keyed by relation type.
///
/// Each relation type maps to exactly one link; inserting a link whose `rel`
/// is already present replaces the earlier one. Links without a `rel` live
/// under the empty string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    links: HashMap<String, Link>,
}

impl Group {
    pub fn new() -> Group {
        Group::default()
    }

    /// Inserts a link under its `rel`, returning the link it replaced.
    pub(crate) fn insert(&mut self, link: Link) -> Option<Link> {
        self.links.insert(link.rel().to_string(), link)
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.links.contains_key(rel)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The relation types present, in no particular order.
    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Link> {
        self.links.iter()
    }
}

impl<'a> Index<&'a str> for Group {
    type Output = Link;

    /// Panics when no link has the given `rel`.
    fn index(&self, rel: &'a str) -> &Link {
        &self.links[rel]
    }
}

impl FromIterator<Link> for Group {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Group {
        let mut group = Group::new();

        for link in iter {
            group.insert(link);
        }

        group
    }
}

impl IntoIterator for Group {
    type Item = (String, Link);
    type IntoIter = hash_map::IntoIter<String, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = (&'a String, &'a Link);
    type IntoIter = hash_map::Iter<'a, String, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
