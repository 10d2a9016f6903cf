//! Default configuration values - single source of truth

use std::collections::BTreeSet;

use crate::descriptor::{Level, Visibility};

/// Whether overridden methods are documented by default
pub const DOCUMENT_OVERRIDDEN_METHODS: bool = false;

/// Element levels enabled by default (all of them)
pub fn enabled_levels() -> BTreeSet<Level> {
    BTreeSet::from([Level::Method, Level::Field, Level::Class])
}

/// Visibilities documented by default (everything except private)
pub fn visibilities() -> BTreeSet<Visibility> {
    BTreeSet::from([Visibility::Public, Visibility::Protected, Visibility::Package])
}
