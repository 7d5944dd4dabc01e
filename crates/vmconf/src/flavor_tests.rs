// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[test]
fn test_default_flavor() {
    assert_eq!(RuntimeFlavor::default(), RuntimeFlavor::Wasm);
}

#[parameterized(
    wasm = { RuntimeFlavor::Wasm, "" },
    ewasm = { RuntimeFlavor::EWasm, "main" },
    wasi = { RuntimeFlavor::Wasi, "_main" },
)]
fn default_entry_point(flavor: RuntimeFlavor, expected: &str) {
    assert_eq!(flavor.default_entry_point(), expected);
}

#[parameterized(
    wasm = { RuntimeFlavor::Wasm, 0 },
    ewasm = { RuntimeFlavor::EWasm, 1 },
    wasi = { RuntimeFlavor::Wasi, 2 },
)]
fn discriminant_matches(flavor: RuntimeFlavor, value: u32) {
    assert_eq!(flavor.as_u32(), value);
    assert_eq!(RuntimeFlavor::try_from(value).unwrap(), flavor);
}

#[test]
fn test_out_of_range_discriminant_rejected() {
    assert_eq!(
        RuntimeFlavor::try_from(3),
        Err(ParseFlavorError::Discriminant(3))
    );
    assert_eq!(
        RuntimeFlavor::try_from(u32::MAX),
        Err(ParseFlavorError::Discriminant(u32::MAX))
    );
}

// =========================================================================
// Parsing Tests
// =========================================================================

#[parameterized(
    lowercase = { "wasi", RuntimeFlavor::Wasi },
    uppercase = { "EWASM", RuntimeFlavor::EWasm },
    mixed_case = { "WaSm", RuntimeFlavor::Wasm },
    padded = { "  wasi\n", RuntimeFlavor::Wasi },
)]
fn parse_accepts(input: &str, expected: RuntimeFlavor) {
    assert_eq!(input.parse::<RuntimeFlavor>().unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    unknown = { "jvm" },
    hyphenated = { "e-wasm" },
    prefix = { "was" },
)]
fn parse_rejects(input: &str) {
    assert_eq!(
        input.parse::<RuntimeFlavor>(),
        Err(ParseFlavorError::Unknown(input.to_string()))
    );
}

#[test]
fn test_display_round_trips_through_parse() {
    for flavor in RuntimeFlavor::ALL {
        assert_eq!(flavor.to_string().parse::<RuntimeFlavor>(), Ok(flavor));
    }
}

#[test]
fn test_value_enum_names_match_canonical_names() {
    for flavor in RuntimeFlavor::ALL {
        let value = flavor.to_possible_value().unwrap();
        assert_eq!(value.get_name(), flavor.as_str());
    }
}

#[test]
fn test_value_enum_parses_cli_input() {
    assert_eq!(
        <RuntimeFlavor as ValueEnum>::from_str("ewasm", true),
        Ok(RuntimeFlavor::EWasm)
    );
}
