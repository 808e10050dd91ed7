//! Errors reported by the driver

use core::fmt::{Debug, Display, Formatter};

/// Driver error type
///
/// `E` is the error of the [Transport](crate::traits::Transport) in use.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum ErrorKind<E> {
    /// The transport failed.
    ///
    /// The sequence in progress was aborted, which can leave the controller in an
    /// undefined addressing or power state. Run [`St7789v::init`](crate::st7789v::St7789v::init)
    /// again to recover.
    TransportError(E),

    /// A window or fill region does not fit on the panel, or has no pixels.
    /// Nothing was sent.
    InvalidRegion,

    /// A command payload longer than the controller accepts (255 bytes)
    PayloadTooLong(usize),
}

impl<E> From<E> for ErrorKind<E> {
    fn from(err: E) -> Self {
        ErrorKind::TransportError(err)
    }
}

impl<E: Debug> Display for ErrorKind<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TransportError(err) => write!(f, "transport error: {err:?}"),
            Self::InvalidRegion => write!(f, "region is empty or outside the panel"),
            Self::PayloadTooLong(len) => {
                write!(f, "payload of {len} bytes exceeds the 255 byte limit")
            }
        }
    }
}

impl<E: Debug> Debug for ErrorKind<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TransportError(err) => f.debug_tuple("TransportError").field(err).finish(),
            Self::InvalidRegion => write!(f, "InvalidRegion"),
            Self::PayloadTooLong(len) => f.debug_tuple("PayloadTooLong").field(len).finish(),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: Debug> defmt::Format for ErrorKind<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::TransportError(_) => defmt::write!(f, "TransportError"),
            Self::InvalidRegion => defmt::write!(f, "InvalidRegion"),
            Self::PayloadTooLong(len) => defmt::write!(f, "PayloadTooLong({})", len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn display_invalid_region() {
        let err: ErrorKind<()> = ErrorKind::InvalidRegion;
        assert_eq!(format!("{err}"), "region is empty or outside the panel");
    }

    #[test]
    fn transport_errors_convert() {
        let err: ErrorKind<u8> = 7u8.into();
        assert_eq!(err, ErrorKind::TransportError(7));
    }
}
