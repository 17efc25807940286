use core::fmt;

/// Errors reported by [`HashSession`](crate::HashSession).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The session already produced its digest. Call
    /// [`HashSession::reset`](crate::HashSession::reset) to start over.
    Finalized,
    /// The total message length no longer fits the length field of the
    /// variant's padding (2^64 - 1 bits for SHA-224/256, 2^128 - 1 bits for
    /// the SHA-384/512 family).
    LengthOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::Finalized => f.write_str("hash session already finalized"),
            Error::LengthOverflow => f.write_str("message length exceeds the padding length field"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
