//! End-to-end decoration and dispatch across the codec categories.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use codec_chain::config::CodecConfig;
use codec_chain::core::message::Message;
use codec_chain::core::packet::{ConnectionId, Packet, ParsedPacket};
use codec_chain::error::CodecError;
use codec_chain::protocol::chain::HandlerChain;
use codec_chain::protocol::decorator::{
    EventChainDecorator, EventDecoderBatch, MessageDecoderBatch, MessageEncoderBatch,
    MessageHandlerDecorator, RedecodeBatch, RedecodeChainDecorator,
};
use codec_chain::protocol::handler::MessageHandler;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionEvent {
    LoginRequest { conn: ConnectionId, username: String },
    Command { conn: ConnectionId, line: String },
    AdminCommand { conn: ConnectionId, line: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LoginPayload {
    username: String,
}

#[derive(Debug, Clone, PartialEq)]
enum ServerMessage {
    Login { username: String },
    NewPlayer { index: u16 },
}

impl Message for ServerMessage {
    fn type_name(&self) -> &'static str {
        match self {
            ServerMessage::Login { .. } => "LoginMessage",
            ServerMessage::NewPlayer { .. } => "NewPlayerMessage",
        }
    }
}

const CONFIG: &str = r#"
    [catalog]
    messages = ["LoginMessage", "NewPlayerMessage"]

    [[packets]]
    name = "login"
    opcode = 16
    size = "var_byte"

    [[packets]]
    name = "command"
    opcode = 103
    size = "var_short"
"#;

/// The whole startup flow: declare batches, build chains, decorate once,
/// then dispatch packets through the populated pipeline.
#[test]
fn full_pipeline_flow() {
    // Event decoders, declared before any chain exists.
    let mut event_batch: EventDecoderBatch<SessionEvent> = EventDecoderBatch::new();
    event_batch.declare(|ctx| {
        ctx.register("login", |packet, conn| {
            if packet.name() != "login" {
                return Ok(None);
            }
            let payload: LoginPayload = packet.value()?;
            Ok(Some(SessionEvent::LoginRequest {
                conn,
                username: payload.username,
            }))
        });
        ctx.register("command", |packet, conn| {
            if packet.name() != "command" {
                return Ok(None);
            }
            Ok(Some(SessionEvent::Command {
                conn,
                line: String::from_utf8_lossy(packet.payload()).into_owned(),
            }))
        });
    });

    // Refinement: commands prefixed "::" become admin commands.
    let mut redecode_batch: RedecodeBatch<SessionEvent, SessionEvent> = RedecodeBatch::new();
    redecode_batch.declare(|ctx| {
        ctx.register("admin_command", |event| match event {
            SessionEvent::Command { conn, line } if line.starts_with("::") => {
                Ok(Some(SessionEvent::AdminCommand {
                    conn: *conn,
                    line: line[2..].to_string(),
                }))
            }
            _ => Ok(None),
        });
    });

    // Message codecs, validated against the configured catalog.
    let mut decoder_batch: MessageDecoderBatch<ServerMessage> = MessageDecoderBatch::new();
    decoder_batch.declare(|ctx| {
        ctx.register("login", |packet| {
            let payload: LoginPayload = packet.value()?;
            Ok(Some(ServerMessage::Login {
                username: payload.username,
            }))
        });
    });
    let mut encoder_batch: MessageEncoderBatch<ServerMessage> = MessageEncoderBatch::new();
    encoder_batch.declare(|ctx| {
        ctx.register("new_player", |message| match message {
            ServerMessage::NewPlayer { index } => {
                Ok(Packet::new("new_player", index.to_be_bytes().to_vec()))
            }
            other => Err(CodecError::EncodeFailure(format!("unexpected: {other:?}"))),
        })
    });

    // The host side: configuration, catalog, chains, one decoration pass.
    let config = CodecConfig::from_toml(CONFIG).expect("config");
    let catalog = config.build_catalog().expect("catalog");

    let mut event_chain = HandlerChain::new();
    EventChainDecorator::new(event_batch).decorate(&mut event_chain);

    let mut redecode_chain = HandlerChain::new();
    RedecodeChainDecorator::new(redecode_batch).decorate(&mut redecode_chain);

    let mut message_handler = MessageHandler::new();
    MessageHandlerDecorator::new(decoder_batch, encoder_batch)
        .decorate(&mut message_handler, &catalog)
        .expect("decoration");

    // Packet to event.
    let conn = ConnectionId(42);
    let login_packet = Packet::from_value(
        "login",
        &LoginPayload {
            username: "sini".to_string(),
        },
    )
    .unwrap();
    let event = event_chain
        .dispatch(&ParsedPacket::new(conn, login_packet.clone()))
        .unwrap();
    assert_eq!(
        event,
        Some(SessionEvent::LoginRequest {
            conn,
            username: "sini".to_string()
        })
    );

    // Event to refined event.
    let command = SessionEvent::Command {
        conn,
        line: "::shutdown".to_string(),
    };
    let refined = redecode_chain.dispatch(&command).unwrap();
    assert_eq!(
        refined,
        Some(SessionEvent::AdminCommand {
            conn,
            line: "shutdown".to_string()
        })
    );

    // An ordinary command is not refined; the host keeps the original.
    let plain = SessionEvent::Command {
        conn,
        line: "wave".to_string(),
    };
    assert_eq!(redecode_chain.dispatch(&plain).unwrap(), None);

    // Packet to message and message to packet.
    let message = message_handler.decode(&login_packet).unwrap();
    assert_eq!(
        message,
        Some(ServerMessage::Login {
            username: "sini".to_string()
        })
    );

    let packet = message_handler
        .encode(&ServerMessage::NewPlayer { index: 3 })
        .unwrap()
        .expect("encoder registered");
    assert_eq!(packet.name(), "new_player");
    assert_eq!(packet.payload().as_ref(), &3u16.to_be_bytes());

    // Wire metadata from the same configuration.
    let descriptor = catalog.packet("login").expect("descriptor");
    assert_eq!(descriptor.opcode, 16);
}

/// A typo in an encoder key fails the whole category at startup.
#[test]
fn misconfigured_encoder_aborts_startup() {
    let mut encoder_batch: MessageEncoderBatch<ServerMessage> = MessageEncoderBatch::new();
    encoder_batch.declare(|ctx| {
        ctx.register("new_player", |_message| Ok(Packet::empty("new_player")))?;
        // "new_palyer" resolves to NewPalyerMessage, which no catalog knows.
        ctx.register("new_palyer", |_message| Ok(Packet::empty("new_player")))
    });

    let catalog = CodecConfig::from_toml(CONFIG)
        .expect("config")
        .build_catalog()
        .expect("catalog");

    let mut handler = MessageHandler::new();
    let result = MessageHandlerDecorator::new(MessageDecoderBatch::new(), encoder_batch)
        .decorate(&mut handler, &catalog);

    assert!(matches!(
        result,
        Err(CodecError::UnknownMessageType(name)) if name == "NewPalyerMessage"
    ));
    // The registration that resolved before the failure is in place; the
    // failing one was never added.
    assert!(handler.has_encoder("NewPlayerMessage"));
    assert!(!handler.has_encoder("NewPalyerMessage"));
}

/// A decoder raising mid-chain reaches the caller unchanged.
#[test]
fn decode_error_reaches_connection_boundary() {
    let mut event_batch: EventDecoderBatch<SessionEvent> = EventDecoderBatch::new();
    event_batch.declare(|ctx| {
        ctx.register("login", |packet, conn| {
            if packet.name() != "login" {
                return Ok(None);
            }
            let payload: LoginPayload = packet.value()?;
            Ok(Some(SessionEvent::LoginRequest {
                conn,
                username: payload.username,
            }))
        });
    });

    let mut chain = HandlerChain::new();
    EventChainDecorator::new(event_batch).decorate(&mut chain);

    // Garbage payload: the bincode failure propagates as a dispatch error.
    let garbage = ParsedPacket::new(ConnectionId(1), Packet::new("login", vec![0xFFu8, 0xFF]));
    let result = chain.dispatch(&garbage);
    assert!(matches!(result, Err(CodecError::DeserializeError(_))));
}
