use core::{fmt, ops::Deref};

/// Largest digest produced by any variant (SHA-512).
pub const MAX_OUTPUT_SIZE: usize = 64;

/// A finished digest, stored inline.
///
/// Formats as lowercase hex with `{}` or `{:x}`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct HashValue {
    bytes: [u8; MAX_OUTPUT_SIZE],
    len: usize,
}

impl HashValue {
    pub(crate) fn zeroed(len: usize) -> Self {
        debug_assert!(len <= MAX_OUTPUT_SIZE);
        Self {
            bytes: [0u8; MAX_OUTPUT_SIZE],
            len,
        }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// Digest bytes; 28, 32, 48 or 64 of them depending on the variant.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Deref for HashValue {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for HashValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for HashValue {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for HashValue {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::LowerHex for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({:x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    struct Buf {
        bytes: [u8; 2 * MAX_OUTPUT_SIZE + 16],
        len: usize,
    }

    impl Write for Buf {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let end = self.len + s.len();
            self.bytes[self.len..end].copy_from_slice(s.as_bytes());
            self.len = end;
            Ok(())
        }
    }

    fn render(args: fmt::Arguments<'_>) -> Buf {
        let mut buf = Buf {
            bytes: [0; 2 * MAX_OUTPUT_SIZE + 16],
            len: 0,
        };
        buf.write_fmt(args).unwrap();
        buf
    }

    #[test]
    fn lowercase_hex_without_separators() {
        let mut value = HashValue::zeroed(4);
        value.as_mut_bytes().copy_from_slice(&[0x00, 0xab, 0x0f, 0xf0]);

        let buf = render(format_args!("{}", value));
        assert_eq!(&buf.bytes[..buf.len], b"00ab0ff0");
        let buf = render(format_args!("{:?}", value));
        assert_eq!(&buf.bytes[..buf.len], b"HashValue(00ab0ff0)");
    }

    #[test]
    fn equality_ignores_unused_capacity() {
        let mut value = HashValue::zeroed(3);
        value.as_mut_bytes().copy_from_slice(b"abc");
        assert_eq!(value.len(), 3);
        assert!(value == *b"abc");
        assert!(value == b"abc"[..]);
        assert!(value != *b"abd");
    }
}
