//! Regression test module wiring for engine behaviors.

mod laser_fire;

/// Shared imports for engine regression tests.
mod support {
    pub(super) use super::super::*;
    pub(super) use crate::game::test_support::*;
    pub(super) use crate::state::HuntPath;
}
