use digest::{consts::U128, generic_array::GenericArray};

use crate::{
    consts::{H512_224, H512_256, H512_384, H512_512, STATE_LEN},
    engine::{Config, Family},
};

mod soft;

pub(crate) static SHA384: Config<u64> = Config {
    name: "SHA-384",
    iv: &H512_384,
    output_size: 48,
};

pub(crate) static SHA512: Config<u64> = Config {
    name: "SHA-512",
    iv: &H512_512,
    output_size: 64,
};

pub(crate) static SHA512_224: Config<u64> = Config {
    name: "SHA-512/224",
    iv: &H512_224,
    output_size: 28,
};

pub(crate) static SHA512_256: Config<u64> = Config {
    name: "SHA-512/256",
    iv: &H512_256,
    output_size: 32,
};

/// 64-bit word engine shared by SHA-384, SHA-512 and the SHA-512/t variants.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Sha512Family;

impl Family for Sha512Family {
    type Word = u64;
    type BlockSize = U128;

    const LENGTH_FIELD: usize = 16;
    const MAX_BIT_LEN: u128 = u128::MAX;

    #[inline]
    fn compress(state: &mut [u64; STATE_LEN], block: &GenericArray<u8, U128>) {
        soft::compress(state, block);
    }

    // SHA-512/224 ends halfway through the fourth word.
    fn store(state: &[u64; STATE_LEN], out: &mut [u8]) {
        for (chunk, word) in out.chunks_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }

    #[cfg(feature = "zeroize")]
    fn wipe(state: &mut [u64; STATE_LEN]) {
        zeroize::Zeroize::zeroize(state);
    }
}

/// Raw SHA-512 compression function.
///
/// This is a low-level "hazmat" API which provides direct access to the core
/// functionality of SHA-512. No padding is applied.
#[cfg(feature = "compress")]
#[cfg_attr(docsrs, doc(cfg(feature = "compress")))]
pub fn compress512(state: &mut [u64; 8], blocks: &[GenericArray<u8, U128>]) {
    for block in blocks {
        soft::compress(state, block);
    }
}
