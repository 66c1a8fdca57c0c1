//! Typed values substituted into a progress template.
//!
//! # Examples
//!
//! ```rust
//! use progress_line::{params, Param};
//!
//! let values = params![3, 10u64, "files", 0.5];
//! assert_eq!(values[0], Param::Int(3));
//! assert_eq!(values[2], Param::Str("files".into()));
//! ```

use std::fmt;

/// A single positional parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Owned string.
    Str(String),
    /// Single character.
    Char(char),
    /// Boolean flag.
    Bool(bool),
}

impl Param {
    /// Short type name used in render error markers, e.g. `%!d(str=abc)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Param::Int(_) => "i64",
            Param::UInt(_) => "u64",
            Param::Float(_) => "f64",
            Param::Str(_) => "str",
            Param::Char(_) => "char",
            Param::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Int(v) => write!(f, "{v}"),
            Param::UInt(v) => write!(f, "{v}"),
            Param::Float(v) => write!(f, "{v}"),
            Param::Str(v) => f.write_str(v),
            Param::Char(v) => write!(f, "{v}"),
            Param::Bool(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Param {
                fn from(value: $source) -> Self {
                    Param::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Str(value)
    }
}

impl From<&String> for Param {
    fn from(value: &String) -> Self {
        Param::Str(value.clone())
    }
}

impl From<char> for Param {
    fn from(value: char) -> Self {
        Param::Char(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

/// Build a `Vec<Param>` from heterogeneous values.
///
/// ```rust
/// use progress_line::params;
///
/// let values = params![4, 10];
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::from($value)),+]
    };
}
