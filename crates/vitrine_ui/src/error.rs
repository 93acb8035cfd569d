//! # UI Error Types
//!
//! Everything the core can complain about, split into two worlds:
//!
//! - [`ContractViolation`]: programmer errors in the widget-declaration
//!   sequence. These are fatal by design; the core panics with the offending
//!   call site and makes no attempt to recover.
//! - [`StyleConfigError`]: bad host data (a malformed theme file). This is the
//!   one recoverable surface, returned as a `Result`.

use thiserror::Error;

/// A violation of the core's calling contract.
///
/// Every variant indicates a bug in the host's widget-declaration sequence,
/// not bad user input. There is no soft-fail path: the core reports the
/// violation together with the offending call site (captured through
/// `#[track_caller]`) and aborts the process via panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A layout push would exceed the configured maximum depth.
    #[error("layout stack overflow: depth limit of {max_depth} frames reached")]
    LayoutOverflow {
        /// The configured maximum depth.
        max_depth: usize,
    },

    /// A layout query or pop ran against an empty stack.
    #[error("layout stack underflow: `{operation}` called with no open layout")]
    LayoutUnderflow {
        /// The operation that required a non-empty stack.
        operation: &'static str,
    },

    /// `begin_frame` was called while a frame was already open.
    #[error("frame already open: `begin_frame` called twice without `end_frame`")]
    FrameAlreadyOpen,

    /// `end_frame` was called without a matching `begin_frame`.
    #[error("no frame open: `end_frame` called without a matching `begin_frame`")]
    FrameNotOpen,

    /// `end_frame` found layouts still open. Lists where each one began.
    #[error("unbalanced layouts at frame end, still open: {unclosed}")]
    UnbalancedLayouts {
        /// One entry per unclosed layout: call site and origin.
        unclosed: String,
    },
}

/// Raises a contract violation.
///
/// The panic location is the host call site thanks to the `#[track_caller]`
/// chain through the public entry points.
#[cold]
#[track_caller]
pub(crate) fn fatal(violation: ContractViolation) -> ! {
    panic!("{violation}")
}

/// Failure to load a style configuration file.
#[derive(Error, Debug)]
pub enum StyleConfigError {
    /// The TOML document did not parse or did not match the style schema.
    #[error("invalid style config: {0}")]
    Parse(#[from] toml::de::Error),
}
