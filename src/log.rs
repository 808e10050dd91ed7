//! Logging facade
//!
//! Forwards to [`log`](https://docs.rs/log) or [`defmt`](https://docs.rs/defmt) depending on
//! the enabled feature. Without either feature the macros compile to nothing.

#[cfg(all(feature = "log", feature = "defmt"))]
compile_error!("the `log` and `defmt` features are mutually exclusive");

#[cfg(feature = "defmt")]
pub(crate) use ::defmt::{debug, trace};

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, trace};

#[cfg(not(any(feature = "log", feature = "defmt")))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {{
            if false {
                let _ = core::format_args!($($arg)*);
            }
        }};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{
            if false {
                let _ = core::format_args!($($arg)*);
            }
        }};
    }

    pub(crate) use {debug, trace};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
pub(crate) use noop::{debug, trace};
