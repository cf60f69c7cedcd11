//! Built-in operators
//!
//! The catalog is closed: every property in a namespace is bound to one of
//! these operators, which fixes its name, category, attribute schema and
//! evaluation rule.
//!
//! # Coercion
//!
//! - Numbers: integer when the text has no `.`, decimal otherwise
//!   (see [`crate::numeric`]).
//! - Booleans: `"true"` in any letter case is true, everything else false.
//! - Lists: literal separator, no trimming (see [`crate::list`]).

use crate::attr::{AttrSpec, Attributes};
use crate::error::EvalError;
use crate::list;
use crate::numeric::Number;
use propex_core::platform::{
    CURRENT_PLATFORM, FILE_SEPARATOR, LINE_SEPARATOR, PATH_SEPARATOR,
};

/// Category of the computational operators
pub const MISC: &str = "Misc";

/// Category of the platform constants
pub const SYSTEM: &str = "System";

const NONE: &[AttrSpec] = &[];
const UNARY: &[AttrSpec] = &[AttrSpec::required("op")];
const BINARY: &[AttrSpec] = &[AttrSpec::required("op1"), AttrSpec::required("op2")];
const COUNT: &[AttrSpec] = &[
    AttrSpec::required("list"),
    AttrSpec::optional("sep", PATH_SEPARATOR),
];
const IF: &[AttrSpec] = &[
    AttrSpec::required("cond"),
    AttrSpec::optional("then", ""),
    AttrSpec::optional("else", ""),
];
const REPLACE_STRING: &[AttrSpec] = &[
    AttrSpec::required("text"),
    AttrSpec::required("old"),
    AttrSpec::required("new"),
];
const SUBLIST: &[AttrSpec] = &[
    AttrSpec::required("list"),
    AttrSpec::required("index"),
    AttrSpec::optional("count", "1"),
    AttrSpec::optional("sep", PATH_SEPARATOR),
];
const CHANGE_SEP: &[AttrSpec] = &[
    AttrSpec::required("list"),
    AttrSpec::optional("old", PATH_SEPARATOR),
    AttrSpec::required("new"),
];

/// A built-in property behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Sum of `op1` and `op2`
    Add,
    /// Difference `op1 - op2`
    Sub,
    /// Product of `op1` and `op2`
    Mul,
    /// Quotient `op1 / op2`
    Div,
    /// Negation of `op`
    Not,
    /// `op1 > op2`
    Gt,
    /// `op1 >= op2`
    Gte,
    /// `op1 < op2`
    Lt,
    /// `op1 <= op2`
    Lte,
    /// Numeric or textual equality
    Eq,
    /// Complement of `Eq`
    Neq,
    /// Logical conjunction
    And,
    /// Logical disjunction
    Or,
    /// Character count of `op`
    StrLen,
    /// Element count of `list`
    Count,
    /// `then` or `else` depending on `cond`
    If,
    /// Literal substring replacement in `text`
    ReplaceString,
    /// A slice of `list`
    Sublist,
    /// `list` with its separator swapped
    ChangeSep,
    /// Search path separator
    PathSeparator,
    /// File path separator
    FileSeparator,
    /// Line terminator
    LineSeparator,
    /// Operating system name
    OsName,
    /// CPU architecture
    OsArch,
}

impl Operator {
    /// Every operator, in registration order
    pub const ALL: &'static [Self] = &[
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Not,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Eq,
        Self::Neq,
        Self::And,
        Self::Or,
        Self::StrLen,
        Self::Count,
        Self::If,
        Self::ReplaceString,
        Self::Sublist,
        Self::ChangeSep,
        Self::PathSeparator,
        Self::FileSeparator,
        Self::LineSeparator,
        Self::OsName,
        Self::OsArch,
    ];

    /// Name the property is registered under, also used in error strings
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Not => "not",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::And => "and",
            Self::Or => "or",
            Self::StrLen => "strlen",
            Self::Count => "count",
            Self::If => "if",
            Self::ReplaceString => "replace.string",
            Self::Sublist => "sublist",
            Self::ChangeSep => "change.sep",
            Self::PathSeparator => "path.separator",
            Self::FileSeparator => "file.separator",
            Self::LineSeparator => "line.separator",
            Self::OsName => "os.name",
            Self::OsArch => "os.arch",
        }
    }

    /// Category the property is registered under
    pub const fn category(self) -> &'static str {
        match self {
            Self::PathSeparator
            | Self::FileSeparator
            | Self::LineSeparator
            | Self::OsName
            | Self::OsArch => SYSTEM,
            _ => MISC,
        }
    }

    /// Declared attributes
    pub const fn schema(self) -> &'static [AttrSpec] {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Gt
            | Self::Gte
            | Self::Lt
            | Self::Lte
            | Self::Eq
            | Self::Neq
            | Self::And
            | Self::Or => BINARY,
            Self::Not | Self::StrLen => UNARY,
            Self::Count => COUNT,
            Self::If => IF,
            Self::ReplaceString => REPLACE_STRING,
            Self::Sublist => SUBLIST,
            Self::ChangeSep => CHANGE_SEP,
            Self::PathSeparator
            | Self::FileSeparator
            | Self::LineSeparator
            | Self::OsName
            | Self::OsArch => NONE,
        }
    }

    /// Look an operator up by its registration key
    pub fn find(category: &str, name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.category() == category && op.name() == name)
    }

    /// Apply the operator to resolved attributes
    ///
    /// Callers are expected to have checked completeness against
    /// [`Self::schema`] first; a missing attribute still surfaces as
    /// [`EvalError::MissingAttributes`] rather than a panic.
    pub fn evaluate(self, attrs: &Attributes) -> Result<String, EvalError> {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => self.arithmetic(attrs),
            Self::Gt | Self::Gte | Self::Lt | Self::Lte => self.compare(attrs),
            Self::Eq | Self::Neq => {
                let equal = loosely_equal(attrs.require("op1")?, attrs.require("op2")?);
                Ok(format_bool(equal == (self == Self::Eq)))
            }
            Self::Not => Ok(format_bool(!parse_bool(attrs.require("op")?))),
            Self::And | Self::Or => {
                let lhs = parse_bool(attrs.require("op1")?);
                let rhs = parse_bool(attrs.require("op2")?);
                let value = if self == Self::And { lhs && rhs } else { lhs || rhs };
                Ok(format_bool(value))
            }
            Self::StrLen => Ok(attrs.require("op")?.chars().count().to_string()),
            Self::Count => {
                let list = attrs.require("list")?;
                if list.is_empty() {
                    return Ok("0".to_string());
                }
                let sep = non_empty(attrs, "sep")?;
                Ok(list::count(list, sep).to_string())
            }
            Self::If => {
                let branch = if parse_bool(attrs.require("cond")?) {
                    "then"
                } else {
                    "else"
                };
                Ok(attrs.require(branch)?.to_string())
            }
            Self::ReplaceString => {
                let old = non_empty(attrs, "old")?;
                Ok(attrs
                    .require("text")?
                    .replace(old, attrs.require("new")?))
            }
            Self::Sublist => {
                let sep = non_empty(attrs, "sep")?;
                let index = parse_index(attrs, "index")?;
                let len = parse_index(attrs, "count")?;
                Ok(list::sublist(attrs.require("list")?, sep, index, len))
            }
            Self::ChangeSep => {
                let old = non_empty(attrs, "old")?;
                Ok(list::change_separator(
                    attrs.require("list")?,
                    old,
                    attrs.require("new")?,
                ))
            }
            Self::PathSeparator => Ok(PATH_SEPARATOR.to_string()),
            Self::FileSeparator => Ok(FILE_SEPARATOR.to_string()),
            Self::LineSeparator => Ok(LINE_SEPARATOR.to_string()),
            Self::OsName => Ok(CURRENT_PLATFORM.os.to_string()),
            Self::OsArch => Ok(CURRENT_PLATFORM.arch.to_string()),
        }
    }

    fn arithmetic(self, attrs: &Attributes) -> Result<String, EvalError> {
        let lhs = number(attrs, "op1")?;
        let rhs = number(attrs, "op2")?;

        let result = match self {
            Self::Add => &lhs + &rhs,
            Self::Sub => &lhs - &rhs,
            Self::Mul => &lhs * &rhs,
            _ => lhs.checked_div(&rhs).ok_or(EvalError::DivisionByZero)?,
        };
        Ok(result.to_string())
    }

    fn compare(self, attrs: &Attributes) -> Result<String, EvalError> {
        let lhs = number(attrs, "op1")?;
        let rhs = number(attrs, "op2")?;

        let value = match self {
            Self::Gt => lhs > rhs,
            Self::Gte => lhs >= rhs,
            Self::Lt => lhs < rhs,
            _ => lhs <= rhs,
        };
        Ok(format_bool(value))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean coercion shared by `not`, `and`, `or` and `if`
pub fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn format_bool(value: bool) -> String {
    value.to_string()
}

/// Numeric equality when both sides are numbers, text equality otherwise
fn loosely_equal(lhs: &str, rhs: &str) -> bool {
    match (lhs.parse::<Number>(), rhs.parse::<Number>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => lhs == rhs,
    }
}

fn number(attrs: &Attributes, name: &str) -> Result<Number, EvalError> {
    let raw = attrs.require(name)?;
    raw.parse()
        .map_err(|_| EvalError::invalid(name, raw, "a number"))
}

fn parse_index(attrs: &Attributes, name: &str) -> Result<usize, EvalError> {
    let raw = attrs.require(name)?;
    raw.parse()
        .map_err(|_| EvalError::invalid(name, raw, "a non-negative integer"))
}

fn non_empty<'a>(attrs: &'a Attributes, name: &str) -> Result<&'a str, EvalError> {
    let raw = attrs.require(name)?;
    if raw.is_empty() {
        return Err(EvalError::invalid(name, raw, "a non-empty string"));
    }
    Ok(raw)
}
