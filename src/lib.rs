//! An implementation of RFC 4122 Universally Unique IDentifiers, covering
//! the time-based (version 1), name-based (versions 3 and 5), and
//! random-based (version 4) generation algorithms.
//!
//! ```rust
//! use rfc4122::{uuid1, uuid4};
//!
//! println!("{}", uuid1()); // e.g. "aa9d9d72-ef9a-11ea-bd92-00d861b25982"
//! println!("{}", uuid4()); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```
//!
//! Name-based identifiers are deterministic functions of a name space and a
//! name:
//!
//! ```rust
//! use rfc4122::{uuid5, Namespace};
//!
//! let uuid = uuid5(Namespace::Dns, "www.example.org");
//! assert_eq!(uuid.to_string(), "74738ff5-5367-5958-9aee-98fffdcd1876");
//! ```
//!
//! # Field and bit layout
//!
//! Identifiers are held in the network order declared by RFC 4122:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |     time_hi_and_version       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |          node (0-1)           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Every generator builds this 16-byte image, stamps the RFC 4122 variant
//! into the upper two bits of byte 8 and the version into the upper nibble
//! of byte 6, and emits the result. The historical Microsoft GUID order,
//! which stores the first three fields little-endian, is available at the
//! boundary through [`Uuid::to_guid_bytes`] and [`Uuid::from_guid_bytes`].

mod error;
mod layout;
mod uuid;

pub use error::Error;
pub use uuid::{ParseError, Uuid, Variant};

pub mod name_based;
#[doc(inline)]
pub use name_based::{uuid3, uuid5, HashType, NameBasedGenerator, Namespace};

pub mod random_based;
#[doc(inline)]
pub use random_based::{uuid4, RandomBasedGenerator};

pub mod time_based;
#[doc(inline)]
pub use time_based::{uuid1, GenerationMode, TimeBasedGenerator};
