//! Version-4 (random-based) UUID generation

use rand::RngCore;

use crate::{layout, Uuid};

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// use rfc4122::uuid4;
///
/// let uuid = uuid4();
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte network-order array
/// ```
pub fn uuid4() -> Uuid {
    let mut bytes: [u8; 16] = rand::random();
    layout::set_variant(&mut bytes);
    layout::set_version(&mut bytes, 4);
    Uuid::from(bytes)
}

/// Represents a version-4 UUID generator over an injected random source.
///
/// Sixteen bytes are drawn from the source for each identifier; the variant
/// and version markers then overwrite six of the 128 bits, leaving 122 bits
/// of entropy.
///
/// # Examples
///
/// ```rust
/// use rfc4122::RandomBasedGenerator;
///
/// let mut g = RandomBasedGenerator::new(rand::rngs::OsRng);
/// println!("{}", g.generate());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomBasedGenerator<R> {
    /// Random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> RandomBasedGenerator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        layout::set_variant(&mut bytes);
        layout::set_version(&mut bytes, 4);
        Uuid::from(bytes)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4
/// object for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::RandomBasedGenerator;
///
/// RandomBasedGenerator::new(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore> Iterator for RandomBasedGenerator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for RandomBasedGenerator<R> {}
