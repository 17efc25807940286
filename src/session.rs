use core::fmt;
use digest::{
    block_buffer::{BlockBuffer, Eager},
    typenum::{IsLess, Le, NonZero, U256},
};

use crate::{
    engine::{Config, Engine, Family},
    sha256::{self, Sha256Family},
    sha512::{self, Sha512Family},
    Error, HashValue,
};

/// Lifecycle of a hashing session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Initialized, nothing absorbed yet.
    Empty,
    /// At least one `update` call has been made.
    Accumulating,
    /// The digest has been produced; only a reset leaves this phase.
    Finalized,
}

/// SHA-2 variant selected at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

enum Selected {
    Small(&'static Config<u32>),
    Large(&'static Config<u64>),
}

impl Variant {
    /// Every supported variant.
    pub const ALL: [Variant; 6] = [
        Variant::Sha224,
        Variant::Sha256,
        Variant::Sha384,
        Variant::Sha512,
        Variant::Sha512_224,
        Variant::Sha512_256,
    ];

    fn select(self) -> Selected {
        match self {
            Variant::Sha224 => Selected::Small(&sha256::SHA224),
            Variant::Sha256 => Selected::Small(&sha256::SHA256),
            Variant::Sha384 => Selected::Large(&sha512::SHA384),
            Variant::Sha512 => Selected::Large(&sha512::SHA512),
            Variant::Sha512_224 => Selected::Large(&sha512::SHA512_224),
            Variant::Sha512_256 => Selected::Large(&sha512::SHA512_256),
        }
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self.select() {
            Selected::Small(config) => config.output_size,
            Selected::Large(config) => config.output_size,
        }
    }

    /// Compression block length in bytes: 64 or 128.
    pub fn block_size(self) -> usize {
        match self.select() {
            Selected::Small(_) => Sha256Family::BLOCK_SIZE,
            Selected::Large(_) => Sha512Family::BLOCK_SIZE,
        }
    }

    /// Standard name, e.g. `"SHA-512/256"`.
    pub fn name(self) -> &'static str {
        match self.select() {
            Selected::Small(config) => config.name,
            Selected::Large(config) => config.name,
        }
    }

    /// One-shot digest of `data`.
    pub fn hash(self, data: &[u8]) -> Result<HashValue, Error> {
        hash(self, data)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine plus the buffered tail of the message.
#[derive(Clone)]
struct Stream<F: Family>
where
    F::BlockSize: IsLess<U256>,
    Le<F::BlockSize, U256>: NonZero,
{
    engine: Engine<F>,
    buffer: BlockBuffer<F::BlockSize, Eager>,
    phase: Phase,
}

impl<F: Family> Stream<F>
where
    F::BlockSize: IsLess<U256>,
    Le<F::BlockSize, U256>: NonZero,
{
    fn new(config: &'static Config<F::Word>) -> Self {
        Self {
            engine: Engine::new(config),
            buffer: Default::default(),
            phase: Phase::Empty,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.phase == Phase::Finalized {
            warn!("{}: update on a finalized session", self.engine.name());
            return Err(Error::Finalized);
        }

        let pending = self.buffer.get_pos() as u128 + data.len() as u128;
        if self.engine.bit_len(pending).is_none() {
            warn!("{}: message length exceeds the length field", self.engine.name());
            return Err(Error::LengthOverflow);
        }

        let engine = &mut self.engine;
        self.buffer.digest_blocks(data, |blocks| engine.compress_blocks(blocks));
        self.phase = Phase::Accumulating;
        Ok(())
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if self.phase == Phase::Finalized {
            warn!("{}: finalize on a finalized session", self.engine.name());
            return Err(Error::Finalized);
        }

        self.engine.finish(self.buffer.get_data(), out)?;
        self.phase = Phase::Finalized;
        Ok(())
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.buffer.reset();
        self.phase = Phase::Empty;
    }
}

#[cfg(feature = "zeroize")]
impl<F: Family> Drop for Stream<F>
where
    F::BlockSize: IsLess<U256>,
    Le<F::BlockSize, U256>: NonZero,
{
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.buffer.pad_with_zeros().as_mut_slice().zeroize();
    }
}

#[derive(Clone)]
enum Inner {
    Small(Stream<Sha256Family>),
    Large(Stream<Sha512Family>),
}

/// Incremental hashing session for a [`Variant`] chosen at runtime.
///
/// `update` may be called any number of times with any chunking; the digest
/// only depends on the concatenated input. After `finalize` the session
/// rejects further input with [`Error::Finalized`] until [`reset`](Self::reset).
///
/// ```
/// use inve_sha2::{HashSession, Variant};
///
/// let mut session = HashSession::new(Variant::Sha256);
/// session.update(b"ab")?;
/// session.update(b"c")?;
/// let digest = session.finalize()?;
/// assert_eq!(
///     digest.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// assert!(session.update(b"more").is_err());
/// # Ok::<(), inve_sha2::Error>(())
/// ```
#[derive(Clone)]
pub struct HashSession {
    variant: Variant,
    inner: Inner,
}

impl HashSession {
    /// Starts a session from the variant's initial hash value.
    pub fn new(variant: Variant) -> Self {
        let inner = match variant.select() {
            Selected::Small(config) => Inner::Small(Stream::new(config)),
            Selected::Large(config) => Inner::Large(Stream::new(config)),
        };
        trace!("{}: session initialized", variant);
        Self { variant, inner }
    }

    /// Variant chosen at construction.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match &self.inner {
            Inner::Small(stream) => stream.phase,
            Inner::Large(stream) => stream.phase,
        }
    }

    /// Whether the digest has been produced and no reset happened since.
    pub fn is_finalized(&self) -> bool {
        self.phase() == Phase::Finalized
    }

    /// Absorbs `data`. Complete blocks are compressed immediately; at most
    /// one block minus one byte stays buffered.
    ///
    /// On error nothing is absorbed.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        match &mut self.inner {
            Inner::Small(stream) => stream.update(data),
            Inner::Large(stream) => stream.update(data),
        }
    }

    /// Pads the message, returns its digest and moves the session to
    /// [`Phase::Finalized`].
    pub fn finalize(&mut self) -> Result<HashValue, Error> {
        let mut out = HashValue::zeroed(self.variant.output_size());
        match &mut self.inner {
            Inner::Small(stream) => stream.finalize_into(out.as_mut_bytes())?,
            Inner::Large(stream) => stream.finalize_into(out.as_mut_bytes())?,
        }
        Ok(out)
    }

    /// Returns the session to [`Phase::Empty`] with the same variant.
    pub fn reset(&mut self) {
        match &mut self.inner {
            Inner::Small(stream) => stream.reset(),
            Inner::Large(stream) => stream.reset(),
        }
    }
}

impl fmt::Debug for HashSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSession")
            .field("variant", &self.variant)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl zeroize::ZeroizeOnDrop for HashSession {}

/// Digest of `data` under `variant`; `init`, one `update` and `finalize`.
pub fn hash(variant: Variant, data: &[u8]) -> Result<HashValue, Error> {
    let mut session = HashSession::new(variant);
    session.update(data)?;
    session.finalize()
}
