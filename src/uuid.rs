use std::{fmt, str};

use crate::layout;

/// Represents a Universally Unique IDentifier.
///
/// The sixteen bytes are always held in the network order declared by RFC
/// 4122 section 4.1.2: `time_low` first with its most significant byte at
/// index 0, then `time_mid`, `time_hi_and_version`,
/// `clock_seq_hi_and_reserved`, `clock_seq_low`, and `node`. The historical
/// Microsoft GUID order, which stores the first three fields little-endian,
/// is reachable through [`Uuid::to_guid_bytes`] and [`Uuid::from_guid_bytes`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Creates an object from a 16-byte array in network order.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array in network order.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the variant field value encoded in the upper bits of byte 8.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000 | 0b001 | 0b010 | 0b011 => Variant::Var0,
            0b100 | 0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the version number encoded in the upper nibble of byte 6, if
    /// the variant field value is `10` (RFC 4122), or `None` otherwise.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the bytes rearranged into the historical Microsoft GUID order.
    ///
    /// The first three fields come out little-endian while the last two stay
    /// big-endian; bytes 8 through 15 are identical in both orders.
    pub fn to_guid_bytes(self) -> [u8; 16] {
        let mut bytes = self.0;
        layout::swap_guid_byte_order(&mut bytes);
        bytes
    }

    /// Creates an object from a 16-byte array in the historical Microsoft
    /// GUID order.
    pub fn from_guid_bytes(mut bytes: [u8; 16]) -> Self {
        layout::swap_guid_byte_order(&mut bytes);
        Self(bytes)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut buffer = [0u8; 36];
        let mut buffer_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buffer_iter.next().unwrap() = DIGITS[e >> 4];
            *buffer_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buffer_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        f.write_str(unsafe { str::from_utf8_unchecked(&buffer) })
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string
    /// representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError;
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// The variant field values distinguishing the UUID layout families.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (`0xx`).
    Var0,
    /// The RFC 4122 layout (`10x`).
    Var10,
    /// Reserved for Microsoft backward compatibility (`110`).
    Var110,
    /// Reserved for future definition (`111`).
    Var111,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation of UUID")]
pub struct ParseError;

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_string())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: &[(&str, &[u8])] = &[
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0,
                        0x4f, 0xd4, 0x30, 0xc8,
                    ],
                ),
                (
                    "a045c4bc-d81c-5fc4-88bd-313db5b2d1fc",
                    &[
                        0xa0, 0x45, 0xc4, 0xbc, 0xd8, 0x1c, 0x5f, 0xc4, 0x88, 0xbd, 0x31, 0x3d,
                        0xb5, 0xb2, 0xd1, 0xfc,
                    ],
                ),
                (
                    "3d813cbb-47fb-32ba-91df-831e1593ac29",
                    &[
                        0x3d, 0x81, 0x3c, 0xbb, 0x47, 0xfb, 0x32, 0xba, 0x91, 0xdf, 0x83, 0x1e,
                        0x15, 0x93, 0xac, 0x29,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [
                    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f,
                    0xd4, 0x30, 0xc8,
                ],
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
            (
                [
                    0xa0, 0x45, 0xc4, 0xbc, 0xd8, 0x1c, 0x5f, 0xc4, 0x88, 0xbd, 0x31, 0x3d, 0xb5,
                    0xb2, 0xd1, 0xfc,
                ],
                "a045c4bc-d81c-5fc4-88bd-313db5b2d1fc",
            ),
            (
                [
                    0x3d, 0x81, 0x3c, 0xbb, 0x47, 0xfb, 0x32, 0xba, 0x91, 0xdf, 0x83, 0x1e, 0x15,
                    0x93, 0xac, 0x29,
                ],
                "3d813cbb-47fb-32ba-91df-831e1593ac29",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let from_bytes = Uuid::from(*bytes);
            assert_eq!(Ok(from_bytes), text.parse());
            assert_eq!(Ok(from_bytes), text.to_uppercase().parse());
            assert_eq!(&from_bytes.to_string(), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            "+6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "-6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "+ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "-ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c8",
            "6ba7b810-9dad11d1-80b4-00c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "6ba7b810-9dad-11 1-80b4-00c04fd430c8",
            "6ba7b81g-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4_00c04fd430c8",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_guid_bytes(e.to_guid_bytes()), e);
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
        }
    }

    /// Rearranges the bytes into the mixed-endian order and back
    #[test]
    fn rearranges_the_bytes_into_the_mixed_endian_order_and_back() {
        let e = "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(
            e.to_guid_bytes(),
            [
                0x10, 0xb8, 0xa7, 0x6b, 0xad, 0x9d, 0xd1, 0x11, 0x80, 0xb4, 0x00, 0xc0, 0x4f,
                0xd4, 0x30, 0xc8,
            ]
        );
        assert_eq!(Uuid::from_guid_bytes(e.to_guid_bytes()), e);

        // bytes 8..16 are shared between the two orders
        assert_eq!(e.to_guid_bytes()[8..], e.as_bytes()[8..]);
    }

    /// Reports the variant and version fields
    #[test]
    fn reports_the_variant_and_version_fields() {
        let dns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(dns.variant(), Variant::Var10);
        assert_eq!(dns.version(), Some(1));

        let v5 = "a045c4bc-d81c-5fc4-88bd-313db5b2d1fc"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(v5.variant(), Variant::Var10);
        assert_eq!(v5.version(), Some(5));

        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::NIL.version(), None);

        let max = Uuid::from([0xff; 16]);
        assert_eq!(max.variant(), Variant::Var111);
        assert_eq!(max.version(), None);

        let microsoft = Uuid::from([
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
        ]);
        assert_eq!(microsoft.variant(), Variant::Var110);
        assert_eq!(microsoft.version(), None);
    }
}
