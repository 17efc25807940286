use digest::{consts::U128, generic_array::GenericArray};

use crate::consts::{K64, STATE_LEN};

const ROUNDS: usize = K64.len();

#[inline(always)]
fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline(always)]
fn big_sigma0(a: u64) -> u64 {
    a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(e: u64) -> u64 {
    e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41)
}

#[inline(always)]
fn sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

pub(super) fn schedule(block: &GenericArray<u8, U128>) -> [u64; ROUNDS] {
    let mut w = [0u64; ROUNDS];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }
    for t in 16..ROUNDS {
        w[t] = sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

pub(super) fn compress(state: &mut [u64; STATE_LEN], block: &GenericArray<u8, U128>) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &w) in K64.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::H512_512;
    use hex_literal::hex;

    fn abc_block() -> GenericArray<u8, U128> {
        let mut block = GenericArray::default();
        block[..4].copy_from_slice(b"abc\x80");
        block[127] = 0x18;
        block
    }

    #[test]
    fn schedule_expansion() {
        let w = schedule(&abc_block());
        assert_eq!(w.len(), 80);
        assert_eq!(&w[16..18], &[0x6162638000000000, 0x00030000000000c0]);
        assert_eq!(w[79], 0x92aeeed1a7bcf7d2);
    }

    #[test]
    fn single_block_compression() {
        let mut state = H512_512;
        compress(&mut state, &abc_block());

        let mut out = [0u8; 64];
        for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        assert_eq!(
            out,
            hex!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
            )
        );
    }
}
