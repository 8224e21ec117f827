//! Tests for the banner subsystem

mod support;
