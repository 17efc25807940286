use crate::engine::{Block, Family};

/// The one or two blocks that close a message.
pub(crate) struct Padded<F: Family> {
    blocks: [Block<F>; 2],
    len: usize,
}

impl<F: Family> Padded<F> {
    pub(crate) fn blocks(&self) -> &[Block<F>] {
        &self.blocks[..self.len]
    }
}

/// Appends the `1` bit, zero fill and big-endian `bit_len` to `remainder`.
///
/// `remainder` must be shorter than one block. When it leaves no room for the
/// marker byte plus the length field, the length goes into a second block.
pub(crate) fn pad<F: Family>(remainder: &[u8], bit_len: u128) -> Padded<F> {
    let mut blocks: [Block<F>; 2] = Default::default();
    let block_size = blocks[0].len();
    debug_assert!(remainder.len() < block_size);

    let length_at = block_size - F::LENGTH_FIELD;
    let len = if remainder.len() < length_at { 1 } else { 2 };

    blocks[0][..remainder.len()].copy_from_slice(remainder);
    blocks[0][remainder.len()] = 0x80;

    let length = bit_len.to_be_bytes();
    blocks[len - 1][length_at..].copy_from_slice(&length[length.len() - F::LENGTH_FIELD..]);

    Padded { blocks, len }
}
