// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property tests: determinism, omission rules and JSON round trips.

use proptest::prelude::*;
use uerr_codes::GrpcCode;
use uerr_core::{Constructor, ErrorView, Field, Status};
use uerr_format::{Format, encode, from_json, to_json};

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Unknown),
        Just(Status::Failed),
        Just(Status::Error),
        Just(Status::Fatal),
    ]
}

fn fields() -> impl Strategy<Value = Vec<Field>> {
    prop::collection::vec(
        ("[a-z]{1,6}", "[A-Za-z ]{0,12}").prop_map(|(k, m)| Field::new(k, m)),
        0..4,
    )
}

fn constructor() -> impl Strategy<Value = Constructor> {
    (any::<i64>(), status(), "[A-Za-z .]{0,20}", fields(), 0u16..20).prop_map(
        |(id, status, message, fields, code)| {
            Constructor::new(id, status)
                .with_message(message)
                .with_grpc(GrpcCode(code))
                .set_fields(fields)
        },
    )
}

proptest! {
    #[test]
    fn encoding_is_deterministic(c in constructor()) {
        let err = c.build().grpc();
        for format in [Format::Json, Format::Yaml, Format::Xml] {
            prop_assert_eq!(encode(&err, format).unwrap(), encode(&err, format).unwrap());
        }
    }

    #[test]
    fn fields_key_present_iff_fields_exist(c in constructor()) {
        let err = c.build().basic();
        let map = err.project().to_map().unwrap();
        let has_fields = map["error"].as_object().unwrap().contains_key("fields");
        prop_assert_eq!(has_fields, !err.fields().is_empty());
    }

    #[test]
    fn code_key_absent_iff_zero(c in constructor()) {
        let zero = c.grpc.map(|g| g.code.0 == 0).unwrap_or(true);
        let map = c.build().grpc().project().to_map().unwrap();
        prop_assert_eq!(map.contains_key("code"), !zero);
        if zero {
            prop_assert_eq!(map["code_message"].as_str(), Some("Unknown"));
        }
    }

    #[test]
    fn json_round_trips(c in constructor()) {
        let err = c.build().grpc();
        let decoded = from_json(&to_json(&err).unwrap()).unwrap();
        prop_assert_eq!(decoded, err.project());
    }
}
