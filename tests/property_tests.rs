//! Property-based tests using proptest
//!
//! These validate pipeline invariants across randomly generated
//! registration sequences and naming keys.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use codec_chain::core::naming::{message_type_name, MESSAGE_SUFFIX};
use codec_chain::core::packet::{ConnectionId, Packet, ParsedPacket};
use codec_chain::protocol::chain::HandlerChain;
use codec_chain::protocol::decorator::{EventChainDecorator, EventDecoderBatch};
use proptest::prelude::*;

fn parsed() -> ParsedPacket {
    ParsedPacket::new(ConnectionId(0), Packet::empty("probe"))
}

// Property: resolution is deterministic and always produces the suffix
proptest! {
    #[test]
    fn prop_resolved_name_shape(key in "[a-z_]{0,24}") {
        let name = message_type_name(&key);
        prop_assert!(name.ends_with(MESSAGE_SUFFIX));
        prop_assert!(!name.contains('_'));
        prop_assert_eq!(message_type_name(&key), name);
    }
}

// Property: the first character of a resolved non-empty key is uppercase
proptest! {
    #[test]
    fn prop_resolved_name_capitalized(key in "[a-z][a-z_]{0,16}") {
        let name = message_type_name(&key);
        let first = name.chars().next().expect("non-empty");
        prop_assert!(first.is_ascii_uppercase());
    }
}

// Property: chains preserve registration order for any sequence of names
proptest! {
    #[test]
    fn prop_chain_preserves_registration_order(
        names in prop::collection::vec("[a-z]{1,8}", 0..32)
    ) {
        let mut batch: EventDecoderBatch<()> = EventDecoderBatch::new();
        let to_register = names.clone();
        batch.declare(move |ctx| {
            for name in &to_register {
                ctx.register(name, |_packet, _conn| Ok(None));
            }
        });

        let mut chain = HandlerChain::new();
        EventChainDecorator::new(batch).decorate(&mut chain);

        prop_assert_eq!(chain.len(), names.len());
        prop_assert_eq!(
            chain.handler_names(),
            names.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }
}

// Property: dispatch yields the first claiming handler, or unhandled
proptest! {
    #[test]
    fn prop_dispatch_returns_first_claim(
        claims in prop::collection::vec(any::<bool>(), 1..24)
    ) {
        let mut batch: EventDecoderBatch<usize> = EventDecoderBatch::new();
        let to_register = claims.clone();
        batch.declare(move |ctx| {
            for (index, claim) in to_register.iter().copied().enumerate() {
                ctx.register(&format!("handler_{index}"), move |_packet, _conn| {
                    Ok(claim.then_some(index))
                });
            }
        });

        let mut chain = HandlerChain::new();
        EventChainDecorator::new(batch).decorate(&mut chain);

        let outcome = chain.dispatch(&parsed()).unwrap();
        let expected = claims.iter().position(|claim| *claim);
        prop_assert_eq!(outcome, expected);
    }
}
