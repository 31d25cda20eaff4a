//! Sexagesimal formatting: the specifier grammar and the rendering
//! pipeline.
//!
//! [`FormatSpec`] describes *how* to render (verb, precision, width,
//! flags); [`engine`](self) functions and the `format`/`format_with`
//! methods on the value types do the rendering, returning a
//! [`FormatResult`] that carries the text and any out-of-band overflow
//! cause.

mod engine;
mod spec;

pub use engine::{
    format_angle, format_hour_angle, format_right_ascension, format_time, FormatResult,
};
pub use spec::{FormatSpec, Fusion, Segment, Verb};
