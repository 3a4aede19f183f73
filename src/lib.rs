//! lodestar: scroll-synced section tracking for tree data.
//!
//! The heart of the crate is [`tracker::SectionTracker`], a pure state machine
//! that decides which one of a set of document sections should be highlighted
//! as "active" while the reader scrolls. Everything environmental is injected:
//! geometry comes through the [`tracker::Geometry`] port and time arrives as
//! millisecond stamps, so the tracker itself never touches a terminal, a
//! clock, or a filesystem.
//!
//! The remaining modules are the host: section extraction from markdown or a
//! JSON manifest, a viewport that turns scroll offsets into visibility
//! signals, and a ratatui viewer that feeds the tracker and renders the
//! result.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod formats;
pub mod input;
pub mod manifest;
pub mod section;
pub mod tracker;
pub mod ui;
pub mod viewport;
