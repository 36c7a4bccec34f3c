// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # upbadge Render
//!
//! Presentation-layer text generation: SVG badges and the embeddable JS
//! widget. Pure display with no decision logic; everything here renders
//! values the engine already decided.
//!
//! - [`BadgeView`] - The fields a badge shows
//! - [`render_badge`] / [`render_dot_badge`] - SVG generation
//! - [`widget_js`] - The embeddable script users put on their sites
//! - [`Palette`] - Per-theme colors

pub mod svg;
pub mod theme;
pub mod widget;

pub use svg::{BadgeView, render_badge, render_dot_badge};
pub use theme::Palette;
pub use widget::widget_js;
