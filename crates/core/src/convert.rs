//! Generic wire/domain conversion.
//!
//! Every resource type the API exposes needs the same structural mapping
//! between its wire shape and its domain shape. Instead of a hand-written
//! mapping function per (resource type × direction) pair, conversion is a
//! schema-driven round-trip through a canonical key-value tree
//! ([`serde_json::Value`]): fields present in both schemas transfer by serde
//! name, fields unique to the source are dropped, and fields unique to the
//! destination come out at their default value.
//!
//! Destination types are expected to carry container-level
//! `#[serde(default)]` so that an absent field is filled in rather than
//! rejected; conversion must never fail because an optional field is missing.
//!
//! Conversion is pure and deterministic. It is *not* a lossless round-trip:
//! `D -> S -> D` drops `D`-only fields (status, server-assigned metadata),
//! which callers re-attach explicitly before any mutating write.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of the structural re-encoding.
///
/// The core does not know which direction it is converting; the caller's
/// context decides whether this is a client error (inbound request body) or
/// an internal error (outbound service result).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source value could not be represented in the canonical
    /// intermediate form (e.g. a map keyed by something other than a
    /// string).
    #[error("failed to encode source value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The intermediate form could not be decoded into the destination type
    /// (a shared field name carries a type-incompatible value).
    #[error("failed to decode into destination type: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Convert `src` into `D` by structural re-encoding.
pub fn convert<S, D>(src: &S) -> Result<D, ConvertError>
where
    S: Serialize,
    D: DeserializeOwned,
{
    let tree = serde_json::to_value(src).map_err(ConvertError::Encode)?;
    serde_json::from_value(tree).map_err(ConvertError::Decode)
}

/// Convert every element of `items` in order.
///
/// Preserves length and order on success. Fails on the first element that
/// fails to convert; no partial result is returned.
pub fn convert_list<S, D>(items: &[S]) -> Result<Vec<D>, ConvertError>
where
    S: Serialize,
    D: DeserializeOwned,
{
    items.iter().map(|item| convert(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SrcFull {
        name: String,
        value: i64,
        extra: String,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct DstPartial {
        name: String,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct DstStrict {
        count: i64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Address {
        street: String,
        city: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Nested {
        name: String,
        address: Address,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct WithOptions {
        name: Option<String>,
        count: Option<i64>,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct WithCollections {
        tags: Vec<String>,
        labels: BTreeMap<String, String>,
    }

    #[derive(Debug, Serialize)]
    struct SrcRenamed {
        #[serde(rename = "fooName")]
        name: String,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct DstRenamed {
        name: String,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct WithAny {
        name: String,
        parameters: Option<Value>,
    }

    fn src_full() -> SrcFull {
        SrcFull {
            name: "foo".into(),
            value: 42,
            extra: "bar".into(),
        }
    }

    #[test]
    fn identity_conversion_preserves_all_fields() {
        let got: SrcFull = convert(&src_full()).unwrap();
        assert_eq!(got, src_full());
    }

    #[test]
    fn source_only_fields_are_dropped() {
        let got: DstPartial = convert(&src_full()).unwrap();
        assert_eq!(got, DstPartial { name: "foo".into() });
    }

    #[test]
    fn destination_only_fields_default() {
        let got: DstStrict = convert(&src_full()).unwrap();
        assert_eq!(got.count, 0);
    }

    #[test]
    fn nested_structs_transfer() {
        let src = Nested {
            name: "alice".into(),
            address: Address {
                street: "1 Main St".into(),
                city: "Springfield".into(),
            },
        };
        let got: Nested = convert(&src).unwrap();
        assert_eq!(got.address.city, "Springfield");
        assert_eq!(got.address.street, "1 Main St");
    }

    #[test]
    fn map_to_struct_extracts_matching_fields() {
        let src = json!({"name": "alice", "unknown": "ignored"});
        let got: DstPartial = convert(&src).unwrap();
        assert_eq!(got.name, "alice");
    }

    #[test]
    fn struct_to_map_produces_serde_names() {
        let got: BTreeMap<String, Value> = convert(&src_full()).unwrap();
        assert_eq!(got["name"], json!("foo"));
        assert_eq!(got["value"], json!(42));
    }

    #[test]
    fn absent_option_fields_stay_absent() {
        let got: WithOptions = convert(&WithOptions::default()).unwrap();
        assert_eq!(got, WithOptions::default());
    }

    #[test]
    fn present_option_fields_transfer() {
        let src = WithOptions {
            name: Some("bob".into()),
            count: Some(7),
        };
        let got: WithOptions = convert(&src).unwrap();
        assert_eq!(got, src);
    }

    #[test]
    fn collections_transfer_in_order() {
        let src = WithCollections {
            tags: vec!["a".into(), "b".into(), "c".into()],
            labels: BTreeMap::from([("env".to_string(), "prod".to_string())]),
        };
        let got: WithCollections = convert(&src).unwrap();
        assert_eq!(got, src);
    }

    #[test]
    fn renamed_field_does_not_transfer() {
        // Serializes as {"fooName": "x"} while the destination expects "name".
        let src = SrcRenamed { name: "x".into() };
        let got: DstRenamed = convert(&src).unwrap();
        assert_eq!(got.name, "");
    }

    #[test]
    fn opaque_value_blob_transfers_structurally() {
        let src = WithAny {
            name: "x".into(),
            parameters: Some(json!({"db": {"host": "localhost", "port": 5432}, "tags": ["a", "b"]})),
        };
        let got: WithAny = convert(&src).unwrap();
        assert_eq!(got, src);
        let db = &got.parameters.unwrap()["db"];
        assert_eq!(db["port"], json!(5432));
    }

    #[test]
    fn unrepresentable_source_is_an_encode_error() {
        // Tuple map keys have no JSON representation.
        let src = BTreeMap::from([((1, 2), "x")]);
        let err = convert::<_, Value>(&src).unwrap_err();
        assert!(matches!(err, ConvertError::Encode(_)));
    }

    #[test]
    fn type_incompatible_shared_field_is_a_decode_error() {
        let src = json!({"count": "not a number"});
        let err = convert::<_, DstStrict>(&src).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn convert_list_empty_input() {
        let got: Vec<DstPartial> = convert_list::<SrcFull, _>(&[]).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn convert_list_preserves_order_and_length() {
        let items: Vec<SrcFull> = ["a", "b", "c"]
            .iter()
            .map(|n| SrcFull {
                name: (*n).into(),
                value: 0,
                extra: String::new(),
            })
            .collect();
        let got: Vec<DstPartial> = convert_list(&items).unwrap();
        assert_eq!(got.len(), 3);
        for (i, want) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(got[i].name, *want);
        }
    }

    #[test]
    fn convert_list_fails_whole_on_single_bad_element() {
        let items = vec![json!({"count": 1}), json!({"count": "bad"})];
        let got = convert_list::<_, DstStrict>(&items);
        assert!(got.is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Conversion is deterministic and stable on shared fields:
            /// converting twice through a narrower schema and back never
            /// changes the fields both schemas carry.
            #[test]
            fn shared_fields_survive_round_trip(
                name in "[a-z][a-z0-9-]{0,30}",
                value in any::<i64>(),
                extra in ".{0,20}",
            ) {
                let src = SrcFull { name: name.clone(), value, extra };
                let narrowed: DstPartial = convert(&src).unwrap();
                let back: DstPartial = convert(&narrowed).unwrap();
                prop_assert_eq!(&back.name, &name);
                let again: DstPartial = convert(&src).unwrap();
                prop_assert_eq!(again, back);
            }
        }
    }
}
