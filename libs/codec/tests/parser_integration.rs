//! Integration tests for MessageSent parsing
//!
//! End-to-end decoding of account data shaped like what the message transmitter writes,
//! plus the failure modes callers must be able to rely on.

use cctp_codec::{
    decode_message_sent, encode_message_sent, read_envelope, MessageSentBuilder, ProtocolError,
    MESSAGE_HEADER_SIZE, MESSAGE_SENT_DISCRIMINATOR, MESSAGE_SENT_SIZE,
};
use std::sync::Arc;
use types::{Address, DecodedEvent, Domain, MessageBody, MessageHeader, U256};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Address with a distinct, position-dependent pattern
fn pattern_address(seed: u8) -> Address {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = seed.wrapping_add(i as u8);
    }
    Address::new(bytes)
}

/// Build account data by hand, independent of the crate's builder
fn handmade_account(message_length: u32, header: &[u8], body: &[u8]) -> Vec<u8> {
    let mut data = MESSAGE_SENT_DISCRIMINATOR.to_vec();
    data.extend_from_slice(&[0x11u8; 32]);
    data.extend_from_slice(&message_length.to_le_bytes());
    data.extend_from_slice(header);
    data.extend_from_slice(body);
    data
}

fn scenario_header() -> Vec<u8> {
    let mut header = Vec::with_capacity(116);
    header.extend_from_slice(&0u32.to_be_bytes()); // version
    header.extend_from_slice(&5u32.to_be_bytes()); // source domain (Solana)
    header.extend_from_slice(&0u32.to_be_bytes()); // destination domain (Ethereum)
    header.extend_from_slice(&42u64.to_be_bytes()); // nonce
    header.extend_from_slice(pattern_address(0x20).as_bytes());
    header.extend_from_slice(pattern_address(0x40).as_bytes());
    header.extend_from_slice(pattern_address(0x60).as_bytes());
    header
}

fn scenario_body() -> Vec<u8> {
    let mut body = Vec::with_capacity(132);
    body.extend_from_slice(&0u32.to_be_bytes()); // version
    body.extend_from_slice(pattern_address(0x80).as_bytes());
    body.extend_from_slice(pattern_address(0xa0).as_bytes());
    let mut amount = [0u8; 32];
    amount[24..].copy_from_slice(&10_000_000u64.to_be_bytes());
    body.extend_from_slice(&amount);
    body.extend_from_slice(pattern_address(0xc0).as_bytes());
    body
}

fn event_with_amount(amount: U256) -> DecodedEvent {
    DecodedEvent {
        rent_payer: pattern_address(0x01),
        message_length: 248,
        message_header: MessageHeader {
            header_version: 0,
            source_domain: Domain::Solana.id(),
            destination_domain: Domain::Base.id(),
            nonce: 1_234_567,
            header_sender: pattern_address(0x10),
            header_recipient: pattern_address(0x30),
            destination_caller: Address::ZERO,
            message_body: MessageBody {
                body_version: 0,
                burn_token: pattern_address(0x50),
                mint_recipient: pattern_address(0x70),
                amount,
                message_sender: pattern_address(0x90),
            },
        },
    }
}

#[test]
fn test_handmade_scenario_decodes_every_field() {
    init_tracing();
    let data = handmade_account(116, &scenario_header(), &scenario_body());
    assert_eq!(data.len(), MESSAGE_SENT_SIZE);

    let event = decode_message_sent(&data).expect("Failed to decode scenario account");

    assert_eq!(event.rent_payer, Address::new([0x11; 32]));
    assert_eq!(event.message_length, 116);

    let header = &event.message_header;
    assert_eq!(header.header_version, 0);
    assert_eq!(header.source_domain, 5);
    assert_eq!(header.destination_domain, 0);
    assert_eq!(header.nonce, 42);
    assert_eq!(header.header_sender, pattern_address(0x20));
    assert_eq!(header.header_recipient, pattern_address(0x40));
    assert_eq!(header.destination_caller, pattern_address(0x60));

    let body = &header.message_body;
    assert_eq!(body.body_version, 0);
    assert_eq!(body.burn_token, pattern_address(0x80));
    assert_eq!(body.mint_recipient, pattern_address(0xa0));
    assert_eq!(body.amount, U256::from(10_000_000u64));
    assert_eq!(body.message_sender, pattern_address(0xc0));
}

#[test]
fn test_round_trip_amount_extremes() {
    for amount in [U256::zero(), U256::from(10_000_000u64), U256::MAX] {
        let event = event_with_amount(amount);
        let data = encode_message_sent(&event);
        let decoded = decode_message_sent(&data).expect("Failed to decode encoded event");
        assert_eq!(decoded, event);
    }
}

#[test]
fn test_round_trip_oversized_message_length() {
    let mut event = event_with_amount(U256::from(77u64));
    event.message_length = 1024;
    let data = encode_message_sent(&event);
    assert_eq!(data.len(), 44 + 1024);
    assert_eq!(decode_message_sent(&data).unwrap(), event);
}

#[test]
fn test_bridge_out_to_ethereum() {
    // Solana pool bridging 10 USDC to an EVM recipient, any destination caller
    let mut dead = [0u8; 20];
    dead[18] = 0xde;
    dead[19] = 0xad;
    let recipient = Address::from_evm_address(dead);
    let pool = pattern_address(0x33);

    let data = MessageSentBuilder::new()
        .rent_payer(pattern_address(0x44))
        .source_domain(Domain::Solana.id())
        .destination_domain(Domain::Ethereum.id())
        .nonce(9_001)
        .mint_recipient(recipient)
        .message_sender(pool)
        .amount(U256::from(10_000_000u64))
        .build();

    let event = decode_message_sent(&data).unwrap();
    let header = &event.message_header;
    assert_eq!(header.source(), Some(Domain::Solana));
    assert_eq!(header.destination(), Some(Domain::Ethereum));
    assert!(!header.has_destination_caller());
    assert_eq!(event.body().mint_recipient.to_evm_address(), Some(dead));
    assert_eq!(event.body().message_sender, pool);
    assert_eq!(event.body().amount_u64(), Some(10_000_000));
}

#[test]
fn test_any_discriminator_byte_change_is_rejected() {
    let data = encode_message_sent(&event_with_amount(U256::one()));

    for index in 0..8 {
        for flip in [0x01u8, 0x80, 0xff] {
            let mut corrupted = data.clone();
            corrupted[index] ^= flip;
            match decode_message_sent(&corrupted) {
                Err(ProtocolError::InvalidDiscriminator { .. }) => {}
                other => panic!("byte {} flip {:#04x}: unexpected {:?}", index, flip, other),
            }
        }
    }
}

#[test]
fn test_discriminator_checked_before_length() {
    // Wrong tag on a buffer that is also far too short for its declared length
    let mut data = handmade_account(10_000, &[], &[]);
    data[0] = 0;
    assert!(matches!(
        decode_message_sent(&data),
        Err(ProtocolError::InvalidDiscriminator { .. })
    ));
}

#[test]
fn test_truncation_before_declared_end_is_underrun() {
    let data = handmade_account(116, &scenario_header(), &scenario_body());
    let declared_end = 44 + 116;

    for len in 0..declared_end {
        match decode_message_sent(&data[..len]) {
            Err(ProtocolError::BufferUnderrun { got, .. }) => assert!(got <= len),
            other => panic!("len {}: expected BufferUnderrun, got {:?}", len, other),
        }
    }
}

#[test]
fn test_truncated_body_is_underrun() {
    let data = handmade_account(116, &scenario_header(), &scenario_body());

    for len in (44 + 116)..data.len() {
        let err = decode_message_sent(&data[..len]).unwrap_err();
        assert!(err.is_truncation(), "len {}: {:?}", len, err);
    }
}

#[test]
fn test_zero_message_length() {
    let data = handmade_account(0, &scenario_header(), &scenario_body());

    let envelope = read_envelope(&data).expect("Envelope with empty header region is valid");
    assert_eq!(envelope.message_length, 0);
    assert!(envelope.header.is_empty());

    assert_eq!(
        decode_message_sent(&data).unwrap_err(),
        ProtocolError::buffer_underrun(4, 0, "header version")
    );
}

#[test]
fn test_message_length_shorter_than_header() {
    let data = MessageSentBuilder::new()
        .message_length((MESSAGE_HEADER_SIZE - 1) as u32)
        .build();
    assert_eq!(
        decode_message_sent(&data).unwrap_err(),
        ProtocolError::buffer_underrun(116, 115, "header destination_caller")
    );
}

#[test]
fn test_body_offset_ignores_declared_length() {
    // Same header and body, declared length 116 vs 248: identical body
    let short = handmade_account(116, &scenario_header(), &scenario_body());
    let long = handmade_account(248, &scenario_header(), &scenario_body());

    let a = decode_message_sent(&short).unwrap();
    let b = decode_message_sent(&long).unwrap();
    assert_eq!(a.message_header, b.message_header);
    assert_eq!(a.message_length, 116);
    assert_eq!(b.message_length, 248);
}

#[test]
fn test_concurrent_decoding() {
    let data = Arc::new(encode_message_sent(&event_with_amount(U256::MAX)));
    let expected = decode_message_sent(&data).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let data = Arc::clone(&data);
            std::thread::spawn(move || decode_message_sent(&data).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
