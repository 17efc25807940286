use inve_sha2::{hash, HashSession, Variant};
use proptest::prelude::*;
use sha2::Digest as _;

fn reference(variant: Variant, data: &[u8]) -> Vec<u8> {
    match variant {
        Variant::Sha224 => sha2::Sha224::digest(data).to_vec(),
        Variant::Sha256 => sha2::Sha256::digest(data).to_vec(),
        Variant::Sha384 => sha2::Sha384::digest(data).to_vec(),
        Variant::Sha512 => sha2::Sha512::digest(data).to_vec(),
        Variant::Sha512_224 => sha2::Sha512_224::digest(data).to_vec(),
        Variant::Sha512_256 => sha2::Sha512_256::digest(data).to_vec(),
    }
}

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

#[test]
fn every_length_up_to_three_blocks() {
    let data: Vec<u8> = (0..=384u32).map(|i| (i ^ (i >> 3)) as u8).collect();
    for &variant in Variant::ALL.iter() {
        for len in 0..=3 * variant.block_size() {
            let actual = hash(variant, &data[..len]).unwrap();
            assert_eq!(actual.as_bytes(), &reference(variant, &data[..len])[..], "{} len={}", variant, len);
        }
    }
}

proptest! {
    #[test]
    fn one_shot_matches_sha2(variant in any_variant(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let actual = hash(variant, &data).unwrap();
        prop_assert_eq!(actual.as_bytes(), &reference(variant, &data)[..]);
    }

    #[test]
    fn streaming_matches_sha2(variant in any_variant(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let expected = reference(variant, &data);

        let mut session = HashSession::new(variant);
        let mut i = 0usize;
        while i < data.len() {
            let step = (data[i] as usize % 193) + 1;
            let end = core::cmp::min(data.len(), i + step);
            session.update(&data[i..end]).unwrap();
            i = end;
        }

        let actual = session.finalize().unwrap();
        prop_assert_eq!(actual.as_bytes(), &expected[..]);
    }

    #[test]
    fn any_split_matches_one_shot(
        variant in any_variant(),
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        split in any::<prop::sample::Index>(),
    ) {
        let split = split.index(data.len() + 1);
        let (a, b) = data.split_at(split);

        let mut session = HashSession::new(variant);
        session.update(a).unwrap();
        session.update(b).unwrap();
        prop_assert_eq!(session.finalize().unwrap(), hash(variant, &data).unwrap());
    }
}
