// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmac_siv_core::{AssociatedData, KeyedHash, MacKey, TAG_SIZE, Tag, TagSynthesizer};
use hmac_siv_util::hex_to_bytes;

use crate::primitives::HmacSha256;
use crate::s2v::S2v;

fn mac_key() -> MacKey {
    core::array::from_fn(|i| 0x80 + i as u8)
}

fn s2v(plaintext: &[u8], fields: &[&[u8]]) -> Tag {
    let mut tag = [0u8; TAG_SIZE];
    S2v::synthesize::<HmacSha256>(&mut tag, plaintext, &mac_key(), &AssociatedData::new(fields));
    tag
}

fn hmac(message: &[u8]) -> Tag {
    let mut out = [0u8; TAG_SIZE];
    let mut hash = HmacSha256::new_keyed(&mac_key());
    hash.update(message);
    hash.finalize_reset_into(&mut out);
    out
}

#[test]
fn test_s2v_name() {
    assert_eq!(S2v::NAME, "S2V");
}

#[test]
fn test_s2v_published_vector_tag() {
    let plaintext = hex_to_bytes(
        "4c616469657320616e642047656e746c656d656e206f662074686520636c617373206f66202739393a20\
         4966204920636f756c64206f6666657220796f75206f6e6c79206f6e652074697020666f722074686520\
         6675747572652c2073756e73637265656e20776f756c642062652069742e",
    );
    let ad1 = hex_to_bytes("50515253c0c1c2c3c4c5c6c7");
    let ad2 = hex_to_bytes("4041424344454647");

    let tag = s2v(&plaintext, &[ad1.as_slice(), ad2.as_slice()]);

    assert_eq!(
        tag.to_vec(),
        hex_to_bytes("28fdb5d4d89e4860117746065456a5df924e8f4b0f42bc77a7415bd0e0430628")
    );
}

#[test]
fn test_s2v_degenerate_input_macs_the_one_block() {
    let mut one = [0u8; 32];
    one[31] = 1;

    let tag = s2v(b"", &[]);

    assert_eq!(tag, hmac(&one));
    assert_eq!(
        tag.to_vec(),
        hex_to_bytes("472309dbd060ba24cac88dafa42ead9ed34d777e8162a1d342d1b2a1582c76aa")
    );
}

#[test]
fn test_s2v_single_empty_field_is_not_degenerate() {
    let tag = s2v(b"", &[b""]);

    assert_ne!(tag, s2v(b"", &[]));
    assert_eq!(
        tag.to_vec(),
        hex_to_bytes("ebe44f0cc01e7f94b224b54ff0606bee8656500feabdf1c1fac8936bcd4a8b7d")
    );
}

#[test]
fn test_s2v_skips_empty_fields() {
    assert_eq!(s2v(b"", &[b""]), s2v(b"", &[b"", b""]));
    assert_eq!(s2v(b"msg", &[b"a", b"", b"b"]), s2v(b"msg", &[b"a", b"b"]));
    assert_eq!(s2v(b"msg", &[b""]), s2v(b"msg", &[]));
}

#[test]
fn test_s2v_field_order_matters() {
    assert_ne!(s2v(b"msg", &[b"a", b"b"]), s2v(b"msg", &[b"b", b"a"]));
}

#[test]
fn test_s2v_field_boundaries_matter() {
    assert_ne!(s2v(b"msg", &[b"ab", b"c"]), s2v(b"msg", &[b"a", b"bc"]));
}

#[test]
fn test_s2v_associated_data_only() {
    assert_eq!(
        s2v(b"", &[b"header"]).to_vec(),
        hex_to_bytes("63b09b4bdba87c1163466dcc68e63ed9e0adc24440dd7e33f2c50eafded4ea78")
    );
}

#[test]
fn test_s2v_short_plaintext() {
    assert_eq!(
        s2v(b"hello", &[b"header"]).to_vec(),
        hex_to_bytes("d128039b82e75a53595100ff8e6d17cf7caf79929bd952575f2a71a9db357337")
    );
}

#[test]
fn test_s2v_block_boundary() {
    let plaintext: [u8; 33] = core::array::from_fn(|i| i as u8);

    // 31 bytes is padded, 32 and 33 bytes take the xorend path
    assert_eq!(
        s2v(&plaintext[..31], &[]).to_vec(),
        hex_to_bytes("6758a5bbec17d4c7e1c99af73cd50ee6c2d0f6528331938d2721e7e97223d830")
    );
    assert_eq!(
        s2v(&plaintext[..32], &[]).to_vec(),
        hex_to_bytes("5b9c6908d329cc78336b797717362b2beec0d72d187b5234d5786770694b5b41")
    );
    assert_eq!(
        s2v(&plaintext, &[]).to_vec(),
        hex_to_bytes("cf6f361a1368b4ad0d48d4e02ec996f625d0db1db4e2abadef167cf544e829f0")
    );
}

#[test]
fn test_s2v_long_plaintext() {
    assert_eq!(
        s2v(&[b'x'; 100], &[]).to_vec(),
        hex_to_bytes("07285c9b3049237817be0a584abedc3b46c5b96c546e890fa606083d1c41c30b")
    );
}

#[test]
fn test_s2v_depends_on_key() {
    let fields: [&[u8]; 1] = [b"header"];
    let mut a = [0u8; TAG_SIZE];
    let mut b = [0u8; TAG_SIZE];

    S2v::synthesize::<HmacSha256>(&mut a, b"msg", &[1u8; 32], &AssociatedData::new(&fields));
    S2v::synthesize::<HmacSha256>(&mut b, b"msg", &[2u8; 32], &AssociatedData::new(&fields));

    assert_ne!(a, b);
}
