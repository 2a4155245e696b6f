use crate::prelude::*;

/// The byte-level codec implemented by every algebra value type.
pub trait VeilFromToBytes: Sized {
    /// Convert to bytes.
    fn veil_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn veil_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Implement serde for a type that implements `VeilFromToBytes`.
/// Human-readable formats carry base64, binary formats carry raw bytes.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::VeilFromToBytes::veil_to_bytes(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<$t, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct BytesVisitor;

                impl<'de> serde::de::Visitor<'de> for BytesVisitor {
                    type Value = $t;

                    fn expecting(
                        &self,
                        formatter: &mut core::fmt::Formatter,
                    ) -> core::fmt::Result {
                        formatter.write_str("a valid byte encoding")
                    }

                    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<$t, E>
                    where
                        E: serde::de::Error,
                    {
                        <$t as $crate::serialization::VeilFromToBytes>::veil_from_bytes(v)
                            .map_err(serde::de::Error::custom)
                    }

                    fn visit_str<E>(self, v: &str) -> core::result::Result<$t, E>
                    where
                        E: serde::de::Error,
                    {
                        let bytes =
                            $crate::utils::b64dec(v).map_err(serde::de::Error::custom)?;
                        self.visit_bytes(&bytes)
                    }

                    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<$t, A::Error>
                    where
                        A: serde::de::SeqAccess<'de>,
                    {
                        let mut bytes = ark_std::vec![];
                        while let Some(b) = seq.next_element::<u8>()? {
                            bytes.push(b);
                        }
                        self.visit_bytes(&bytes)
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(BytesVisitor)
                } else {
                    deserializer.deserialize_bytes(BytesVisitor)
                }
            }
        }
    };
}
