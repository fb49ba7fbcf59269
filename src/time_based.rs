//! Version-1 (time-based) UUID generation

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, OnceLock, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::{layout, Error, Uuid};

/// Number of 100-nanosecond intervals between the RFC 4122 epoch
/// (1582-10-15T00:00:00Z) and the Unix epoch.
const GREGORIAN_UNIX_OFFSET_TICKS: i64 = 122_192_928_000_000_000;

/// Generates a UUIDv1 object.
///
/// This function employs a process-wide generator in the default
/// [`GenerationMode::FasterGeneration`] mode. The node identifier is picked
/// up from the machine's network interfaces once, when the generator is
/// first used.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1();
/// println!("{}", uuid); // e.g. "aa9d9d72-ef9a-11ea-bd92-00d861b25982"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte network-order array
/// ```
pub fn uuid1() -> Uuid {
    static G: OnceLock<TimeBasedGenerator> = OnceLock::new();
    G.get_or_init(TimeBasedGenerator::new).generate()
}

/// Trade-off between generation speed and protection against duplicate
/// identifiers, selected per call on a [`TimeBasedGenerator`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum GenerationMode {
    /// Observe the clock and read the current clock sequence without any
    /// monotonicity check. Closely spaced calls may observe the same
    /// timestamp and so produce equal identifiers.
    #[default]
    FasterGeneration,
    /// Re-randomize the clock sequence whenever the clock is observed not
    /// to have advanced past the last synchronization point, so that calls
    /// ordered by the caller never produce equal identifiers even across a
    /// clock regression.
    WithUniquenessGuarantee,
}

/// Time-based UUID (version-1) generator according to RFC 4122.
///
/// Each identifier combines a 100-nanosecond timestamp counted from the
/// Gregorian reform date, a two-byte clock sequence, and a six-byte node
/// identifier. The node is nominally an IEEE 802 hardware address; when none
/// is supplied, the constructor takes the first usable interface address and
/// falls back to random bytes as RFC 4122 section 4.5 permits.
///
/// The generator is safe to share between threads: the clock sequence sits
/// behind a readers-writer lock and reads return a copied pair, while the
/// uniqueness-preserving mode re-checks the clock under an exclusive lock
/// before refreshing the sequence.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{GenerationMode, TimeBasedGenerator};
///
/// let g = TimeBasedGenerator::new();
/// println!("{}", g.generate());
/// println!("{}", g.generate_with_mode(GenerationMode::WithUniquenessGuarantee));
/// ```
#[derive(Debug)]
pub struct TimeBasedGenerator {
    node: [u8; 6],
    clock_sequence: RwLock<[u8; 2]>,
    last_sync_ticks: AtomicI64,
    sync_lock: Mutex<()>,
}

impl TimeBasedGenerator {
    /// Creates a generator whose node is the hardware address of the first
    /// usable network interface on the machine, or six random bytes if no
    /// interface offers one.
    pub fn new() -> Self {
        Self::with_node(interface_node().unwrap_or_else(random_node))
    }

    /// Creates a generator using the given six-byte IEEE 802 address as
    /// node.
    pub fn with_node(node: [u8; 6]) -> Self {
        let mut clock_sequence = [0u8; 2];
        OsRng.fill_bytes(&mut clock_sequence);
        Self {
            node,
            clock_sequence: RwLock::new(clock_sequence),
            last_sync_ticks: AtomicI64::new(gregorian_ticks(SystemTime::now())),
            sync_lock: Mutex::new(()),
        }
    }

    /// Creates a generator from a node identifier of caller-determined
    /// length.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNodeLength`] unless `node` holds exactly
    /// six bytes.
    pub fn try_with_node(node: &[u8]) -> Result<Self, Error> {
        match <[u8; 6]>::try_from(node) {
            Ok(node) => Ok(Self::with_node(node)),
            Err(_) => Err(Error::InvalidNodeLength(node.len())),
        }
    }

    /// Returns the node identifier used by this generator.
    pub const fn node(&self) -> &[u8; 6] {
        &self.node
    }

    /// Generates a new UUIDv1 object in the default
    /// [`GenerationMode::FasterGeneration`] mode.
    pub fn generate(&self) -> Uuid {
        self.generate_with_mode(GenerationMode::default())
    }

    /// Generates a new UUIDv1 object in the given mode.
    pub fn generate_with_mode(&self, mode: GenerationMode) -> Uuid {
        let now_ticks = gregorian_ticks(SystemTime::now());
        match mode {
            GenerationMode::FasterGeneration => {
                self.assemble(now_ticks, self.clock_sequence_snapshot())
            }
            GenerationMode::WithUniquenessGuarantee => self.generate_synced(now_ticks),
        }
    }

    /// Generates a UUIDv1 object for the given instant.
    ///
    /// The clock sequence for this path is derived from the instant itself
    /// (the low two bytes of its tick count) rather than from the generator
    /// state, so the result is fully determined by `instant` and the node.
    pub fn generate_at(&self, instant: SystemTime) -> Uuid {
        let ticks = gregorian_ticks(instant);
        let le = ticks.to_le_bytes();
        self.assemble(ticks, [le[0], le[1]])
    }

    /// Assembles a UUIDv1 from caller-supplied parts.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidClockSequenceLength`] unless
    /// `clock_sequence` holds exactly two bytes, and with
    /// [`Error::InvalidNodeLength`] unless `node` holds exactly six.
    pub fn generate_from_parts(
        instant: SystemTime,
        clock_sequence: &[u8],
        node: &[u8],
    ) -> Result<Uuid, Error> {
        let clock_sequence = <[u8; 2]>::try_from(clock_sequence)
            .map_err(|_| Error::InvalidClockSequenceLength(clock_sequence.len()))?;
        let node = <[u8; 6]>::try_from(node).map_err(|_| Error::InvalidNodeLength(node.len()))?;
        Ok(assemble_parts(gregorian_ticks(instant), clock_sequence, node))
    }

    /// Uniqueness-preserving path: refreshes the clock sequence when the
    /// clock has not advanced past the last synchronization point.
    ///
    /// The outer test is lock-free; the decision to refresh rests on the
    /// re-test under the exclusive lock.
    fn generate_synced(&self, now_ticks: i64) -> Uuid {
        if now_ticks <= self.last_sync_ticks.load(Ordering::Acquire) {
            let _guard = self
                .sync_lock
                .lock()
                .expect("rfc4122: could not lock time-based generator");
            if now_ticks <= self.last_sync_ticks.load(Ordering::Acquire) {
                self.refresh_clock_sequence();
                self.last_sync_ticks.store(now_ticks, Ordering::Release);
            }
        }
        self.assemble(now_ticks, self.clock_sequence_snapshot())
    }

    /// Returns a copied clock-sequence pair, never a view into the shared
    /// storage.
    fn clock_sequence_snapshot(&self) -> [u8; 2] {
        *self
            .clock_sequence
            .read()
            .expect("rfc4122: could not lock clock sequence")
    }

    fn refresh_clock_sequence(&self) {
        let mut fresh = [0u8; 2];
        OsRng.fill_bytes(&mut fresh);
        *self
            .clock_sequence
            .write()
            .expect("rfc4122: could not lock clock sequence") = fresh;
    }

    fn assemble(&self, ticks: i64, clock_sequence: [u8; 2]) -> Uuid {
        assemble_parts(ticks, clock_sequence, self.node)
    }
}

impl Default for TimeBasedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the 16-byte network-order image: the little-endian tick image in
/// bytes 0..8 (its excess high nibble is overwritten by the version stamp),
/// the clock sequence in bytes 8..10, and the node in bytes 10..16.
fn assemble_parts(ticks: i64, clock_sequence: [u8; 2], node: [u8; 6]) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&ticks.to_le_bytes());
    bytes[8..10].copy_from_slice(&clock_sequence);
    bytes[10..].copy_from_slice(&node);
    layout::set_variant(&mut bytes);
    layout::set_version(&mut bytes, 1);
    Uuid::from(bytes)
}

/// Returns the count of 100-nanosecond intervals from 1582-10-15T00:00:00Z
/// to `instant`.
fn gregorian_ticks(instant: SystemTime) -> i64 {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => GREGORIAN_UNIX_OFFSET_TICKS + duration_ticks(elapsed),
        Err(err) => GREGORIAN_UNIX_OFFSET_TICKS - duration_ticks(err.duration()),
    }
}

fn duration_ticks(duration: Duration) -> i64 {
    (duration.as_nanos() / 100) as i64
}

/// Returns the hardware address of the first interface that reports a
/// non-empty one. Enumeration failures are swallowed; the caller falls back
/// to a random node.
fn interface_node() -> Option<[u8; 6]> {
    let interfaces = mac_address::MacAddressIterator::new().ok()?;
    interfaces
        .map(|address| address.bytes())
        .find(|bytes| bytes != &[0u8; 6])
}

fn random_node() -> [u8; 6] {
    let mut node = [0u8; 6];
    OsRng.fill_bytes(&mut node);
    node
}
