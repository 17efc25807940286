use digest::{consts::U64, generic_array::GenericArray};

use crate::{
    consts::{H256_224, H256_256, STATE_LEN},
    engine::{Config, Family},
};

mod soft;

pub(crate) static SHA224: Config<u32> = Config {
    name: "SHA-224",
    iv: &H256_224,
    output_size: 28,
};

pub(crate) static SHA256: Config<u32> = Config {
    name: "SHA-256",
    iv: &H256_256,
    output_size: 32,
};

/// 32-bit word engine shared by SHA-224 and SHA-256.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Sha256Family;

impl Family for Sha256Family {
    type Word = u32;
    type BlockSize = U64;

    const LENGTH_FIELD: usize = 8;
    const MAX_BIT_LEN: u128 = u64::MAX as u128;

    #[inline]
    fn compress(state: &mut [u32; STATE_LEN], block: &GenericArray<u8, U64>) {
        soft::compress(state, block);
    }

    fn store(state: &[u32; STATE_LEN], out: &mut [u8]) {
        for (chunk, word) in out.chunks_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }

    #[cfg(feature = "zeroize")]
    fn wipe(state: &mut [u32; STATE_LEN]) {
        zeroize::Zeroize::zeroize(state);
    }
}

/// Raw SHA-256 compression function.
///
/// This is a low-level "hazmat" API which provides direct access to the core
/// functionality of SHA-256. No padding is applied.
#[cfg(feature = "compress")]
#[cfg_attr(docsrs, doc(cfg(feature = "compress")))]
pub fn compress256(state: &mut [u32; 8], blocks: &[GenericArray<u8, U64>]) {
    for block in blocks {
        soft::compress(state, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_truncates_to_the_output() {
        let state = [
            0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f, 0x10111213, 0x14151617, 0x18191a1b,
            0x1c1d1e1f,
        ];
        let mut out = [0xffu8; 32];
        Sha256Family::store(&state, &mut out[..28]);
        for (i, &b) in out[..28].iter().enumerate() {
            assert_eq!(b as usize, i);
        }
        assert_eq!(&out[28..], &[0xff; 4]);
    }
}
