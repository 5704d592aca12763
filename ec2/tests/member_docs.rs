/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

const SOURCES: &[(&str, &str)] = &[
    ("model.rs", include_str!("../src/model.rs")),
    ("input.rs", include_str!("../src/input.rs")),
    ("output.rs", include_str!("../src/output.rs")),
];

fn undocumented_members(source: &str) -> Vec<String> {
    let lines = source.lines().collect::<Vec<_>>();
    lines
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| line.starts_with("    pub ") && line.contains(": std::option::Option<"))
        .filter(|(idx, _)| !lines[idx - 1].trim_start().starts_with("///"))
        .map(|(idx, line)| format!("{}: {}", idx + 1, line.trim()))
        .collect()
}

#[test]
fn every_public_member_is_documented() {
    for (file, source) in SOURCES {
        let missing = undocumented_members(source);
        assert!(missing.is_empty(), "{} has undocumented members: {:#?}", file, missing);
    }
}

#[test]
fn reserved_instances_members_carry_service_docs() {
    let model = SOURCES[0].1;
    let start = model
        .find("pub struct ReservedInstances {")
        .expect("ReservedInstances is generated");
    let body = &model[start..];
    let body = &body[..body.find("\n}").expect("struct body is closed")];
    assert!(body.contains("/// <p>The purchase price of the Reserved Instance.</p>"));
    assert!(body.contains("/// <p>The tenancy of the instance.</p>"));
}
