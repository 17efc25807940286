use core::fmt;
use digest::{
    generic_array::{ArrayLength, GenericArray},
    typenum::Unsigned,
};

use crate::{consts::STATE_LEN, padding, Error};

pub(crate) type Block<F> = GenericArray<u8, <F as Family>::BlockSize>;

/// Word-size specific half of SHA-2: round function, block geometry and the
/// width of the trailing length field.
pub(crate) trait Family {
    type Word: Copy + 'static;
    type BlockSize: ArrayLength<u8> + 'static;

    const BLOCK_SIZE: usize = <Self::BlockSize as Unsigned>::USIZE;
    /// Bytes at the end of the last block holding the message bit length.
    const LENGTH_FIELD: usize;
    /// Largest message bit length the length field can encode.
    const MAX_BIT_LEN: u128;

    fn compress(state: &mut [Self::Word; STATE_LEN], block: &GenericArray<u8, Self::BlockSize>);

    /// Serialize `state` big-endian into `out`, stopping when `out` is full.
    fn store(state: &[Self::Word; STATE_LEN], out: &mut [u8]);

    #[cfg(feature = "zeroize")]
    fn wipe(state: &mut [Self::Word; STATE_LEN]);
}

/// Per-variant parameters. Variants of one family differ only in these.
pub(crate) struct Config<W: 'static> {
    pub(crate) name: &'static str,
    pub(crate) iv: &'static [W; STATE_LEN],
    pub(crate) output_size: usize,
}

/// Chaining state of one variant plus the count of compressed blocks.
///
/// Buffering of partial blocks is left to the caller's `BlockBuffer`.
#[derive(Clone)]
pub(crate) struct Engine<F: Family> {
    config: &'static Config<F::Word>,
    state: [F::Word; STATE_LEN],
    block_len: u128,
}

impl<F: Family> Engine<F> {
    pub(crate) fn new(config: &'static Config<F::Word>) -> Self {
        Self {
            config,
            state: *config.iv,
            block_len: 0,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.config.name
    }

    pub(crate) fn reset(&mut self) {
        self.state = *self.config.iv;
        self.block_len = 0;
    }

    #[inline]
    pub(crate) fn compress_blocks(&mut self, blocks: &[Block<F>]) {
        self.block_len += blocks.len() as u128;
        for block in blocks {
            F::compress(&mut self.state, block);
        }
    }

    /// Message length in bits once `pending` more bytes are added, or `None`
    /// if the length field cannot hold it.
    pub(crate) fn bit_len(&self, pending: u128) -> Option<u128> {
        self.block_len
            .checked_mul(F::BLOCK_SIZE as u128)
            .and_then(|bytes| bytes.checked_add(pending))
            .and_then(|bytes| bytes.checked_mul(8))
            .filter(|&bits| bits <= F::MAX_BIT_LEN)
    }

    /// Pads `remainder`, processes the final block(s) and writes the
    /// truncated digest into the first `output_size` bytes of `out`.
    pub(crate) fn finish(&mut self, remainder: &[u8], out: &mut [u8]) -> Result<(), Error> {
        let bit_len = self
            .bit_len(remainder.len() as u128)
            .ok_or(Error::LengthOverflow)?;

        let padded = padding::pad::<F>(remainder, bit_len);
        for block in padded.blocks() {
            F::compress(&mut self.state, block);
        }
        F::store(&self.state, &mut out[..self.config.output_size]);

        trace!("{}: finalized after {} bits", self.config.name, bit_len);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn skip_blocks(&mut self, blocks: u128) {
        self.block_len += blocks;
    }
}

impl<F: Family> fmt::Debug for Engine<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("algorithm", &self.config.name)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl<F: Family> Drop for Engine<F> {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        F::wipe(&mut self.state);
        self.block_len.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sha256::{Sha256Family, SHA224, SHA256},
        sha512::{Sha512Family, SHA512},
    };
    use hex_literal::hex;

    #[test]
    fn block_geometry() {
        assert_eq!(Sha256Family::BLOCK_SIZE, 64);
        assert_eq!(Sha512Family::BLOCK_SIZE, 128);
    }

    #[test]
    fn counts_compressed_blocks() {
        let mut engine = Engine::<Sha256Family>::new(&SHA256);
        engine.compress_blocks(&[Default::default(), Default::default()]);
        assert_eq!(engine.bit_len(0), Some(2 * 64 * 8));
        assert_eq!(engine.bit_len(3), Some((2 * 64 + 3) * 8));

        engine.reset();
        assert_eq!(engine.bit_len(0), Some(0));
    }

    #[test]
    fn bit_len_stops_at_the_length_field() {
        let mut engine = Engine::<Sha256Family>::new(&SHA256);
        engine.skip_blocks((u64::MAX >> 9) as u128);
        assert_eq!(engine.bit_len(63), Some(u64::MAX as u128 - 7));
        assert_eq!(engine.bit_len(64), None);

        let mut engine = Engine::<Sha512Family>::new(&SHA512);
        engine.skip_blocks(u128::MAX >> 10);
        assert_eq!(engine.bit_len(127), Some(u128::MAX - 7));
        assert_eq!(engine.bit_len(128), None);
        assert_eq!(engine.bit_len(u128::MAX), None);
    }

    #[test]
    fn finish_writes_only_the_truncated_digest() {
        let mut engine = Engine::<Sha256Family>::new(&SHA224);
        let mut out = [0xffu8; 32];
        engine.finish(b"abc", &mut out).unwrap();
        assert_eq!(
            out[..28],
            hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")
        );
        assert_eq!(out[28..], [0xff; 4]);
    }

    #[test]
    fn finish_rejects_an_overlong_message() {
        let mut engine = Engine::<Sha256Family>::new(&SHA256);
        engine.skip_blocks((u64::MAX >> 9) as u128 + 1);
        assert_eq!(engine.finish(&[], &mut [0u8; 32]), Err(Error::LengthOverflow));
    }
}
