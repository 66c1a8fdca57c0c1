//! Template rendering for progress lines.
//!
//! This module turns a format template and a list of [`Param`] values into the
//! string that the emitter writes on each tick. It is organized into two parts:
//!
//! - `param` - the typed parameter values and the [`params!`](crate::params) macro
//! - `format` - printf-style positional substitution with fail-soft error markers
//!
//! Supported verbs are `%v %d %s %f %F %e %g %x %X %o %b %c %q %t` and `%%`,
//! with the `- + 0 #` and space flags, a width and a `.precision` given either
//! inline or as a `*` parameter.

pub(crate) mod format;
pub(crate) mod param;

pub use format::render;
pub use param::Param;
