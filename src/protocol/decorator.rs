//! Registration batches and the decorators that consume them.
//!
//! Registrations are declared before the host has constructed any chain, so
//! each category collects its setup closures in an explicit batch value.
//! The batch is moved into a decorator, and the host triggers the single
//! undecorated-to-decorated transition by calling `decorate` with the chain
//! or table once it exists. `decorate` takes the decorator by value: a
//! decorator cannot fire twice, and all registrations for a category must be
//! declared before its decoration runs.
//!
//! Decorating one chain with two decorators (two batches) appends the second
//! batch's handlers after the first batch's, both in declaration order.

use crate::core::message::{Message, MessageCatalog};
use crate::core::packet::ParsedPacket;
use crate::error::Result;
use crate::protocol::chain::HandlerChain;
use crate::protocol::context::{
    EventDecoderContext, MessageDecoderContext, MessageEncoderContext, RedecodeContext,
};
use crate::protocol::handler::MessageHandler;
use std::fmt;
use tracing::debug;

type EventSetup<E> = Box<dyn for<'c> FnOnce(&mut EventDecoderContext<'c, E>) + Send>;
type RedecodeSetup<E, R> = Box<dyn for<'c> FnOnce(&mut RedecodeContext<'c, E, R>) + Send>;
type DecoderSetup<M> = Box<dyn for<'c> FnOnce(&mut MessageDecoderContext<'c, M>) + Send>;
type EncoderSetup<M> =
    Box<dyn for<'c> FnOnce(&mut MessageEncoderContext<'c, M>) -> Result<()> + Send>;

/// Accumulated packet-to-event decoder registrations.
pub struct EventDecoderBatch<E: 'static> {
    setups: Vec<EventSetup<E>>,
}

/// Accumulated event refinement registrations.
pub struct RedecodeBatch<E: 'static, R: 'static> {
    setups: Vec<RedecodeSetup<E, R>>,
}

/// Accumulated packet-to-message decoder registrations.
pub struct MessageDecoderBatch<M: 'static> {
    setups: Vec<DecoderSetup<M>>,
}

/// Accumulated message-to-packet encoder registrations.
pub struct MessageEncoderBatch<M: 'static> {
    setups: Vec<EncoderSetup<M>>,
}

macro_rules! batch_common {
    ($batch:ident < $($param:ident),+ >) => {
        impl<$($param: 'static),+> $batch<$($param),+> {
            /// Create an empty batch.
            pub fn new() -> Self {
                Self { setups: Vec::new() }
            }

            /// Number of declared setup closures.
            pub fn len(&self) -> usize {
                self.setups.len()
            }

            /// Whether no setup has been declared.
            pub fn is_empty(&self) -> bool {
                self.setups.is_empty()
            }
        }

        impl<$($param: 'static),+> Default for $batch<$($param),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param: 'static),+> fmt::Debug for $batch<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($batch))
                    .field("setups", &self.setups.len())
                    .finish()
            }
        }
    };
}

batch_common!(EventDecoderBatch<E>);
batch_common!(RedecodeBatch<E, R>);
batch_common!(MessageDecoderBatch<M>);
batch_common!(MessageEncoderBatch<M>);

impl<E: 'static> EventDecoderBatch<E> {
    /// Declare a setup closure to run against the registration context when
    /// the chain is decorated. Declaration order is preserved.
    pub fn declare<F>(&mut self, setup: F)
    where
        F: for<'c> FnOnce(&mut EventDecoderContext<'c, E>) + Send + 'static,
    {
        self.setups.push(Box::new(setup));
    }
}

impl<E: 'static, R: 'static> RedecodeBatch<E, R> {
    /// Declare a setup closure to run against the registration context when
    /// the chain is decorated. Declaration order is preserved.
    pub fn declare<F>(&mut self, setup: F)
    where
        F: for<'c> FnOnce(&mut RedecodeContext<'c, E, R>) + Send + 'static,
    {
        self.setups.push(Box::new(setup));
    }
}

impl<M: 'static> MessageDecoderBatch<M> {
    /// Declare a setup closure to run against the registration context when
    /// the handler is decorated. Declaration order is preserved.
    pub fn declare<F>(&mut self, setup: F)
    where
        F: for<'c> FnOnce(&mut MessageDecoderContext<'c, M>) + Send + 'static,
    {
        self.setups.push(Box::new(setup));
    }
}

impl<M: 'static> MessageEncoderBatch<M> {
    /// Declare a setup closure to run against the registration context when
    /// the handler is decorated. Encoder registration is fallible, so the
    /// closure returns a result; the first failure aborts decoration.
    pub fn declare<F>(&mut self, setup: F)
    where
        F: for<'c> FnOnce(&mut MessageEncoderContext<'c, M>) -> Result<()> + Send + 'static,
    {
        self.setups.push(Box::new(setup));
    }
}

/// Populates an event decode chain from a declared batch.
pub struct EventChainDecorator<E: 'static> {
    batch: EventDecoderBatch<E>,
}

impl<E: 'static> EventChainDecorator<E> {
    /// Take ownership of the batch to install.
    pub fn new(batch: EventDecoderBatch<E>) -> Self {
        Self { batch }
    }

    /// Run every declared setup against the chain, in declaration order.
    ///
    /// Consumes the decorator; the transition from undecorated to decorated
    /// happens exactly once.
    pub fn decorate(self, chain: &mut HandlerChain<ParsedPacket, E>) {
        let mut context = EventDecoderContext::new(chain);
        for setup in self.batch.setups {
            setup(&mut context);
        }
        debug!(handlers = chain.len(), "event decode chain decorated");
    }
}

impl<E: 'static> fmt::Debug for EventChainDecorator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChainDecorator")
            .field("batch", &self.batch)
            .finish()
    }
}

/// Populates a re-decode chain from a declared batch.
pub struct RedecodeChainDecorator<E: 'static, R: 'static> {
    batch: RedecodeBatch<E, R>,
}

impl<E: 'static, R: 'static> RedecodeChainDecorator<E, R> {
    /// Take ownership of the batch to install.
    pub fn new(batch: RedecodeBatch<E, R>) -> Self {
        Self { batch }
    }

    /// Run every declared setup against the chain, in declaration order.
    ///
    /// Consumes the decorator; the transition from undecorated to decorated
    /// happens exactly once.
    pub fn decorate(self, chain: &mut HandlerChain<E, R>) {
        let mut context = RedecodeContext::new(chain);
        for setup in self.batch.setups {
            setup(&mut context);
        }
        debug!(handlers = chain.len(), "redecode chain decorated");
    }
}

impl<E: 'static, R: 'static> fmt::Debug for RedecodeChainDecorator<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedecodeChainDecorator")
            .field("batch", &self.batch)
            .finish()
    }
}

/// Populates a message handler's tables from declared batches.
pub struct MessageHandlerDecorator<M: 'static> {
    decoders: MessageDecoderBatch<M>,
    encoders: MessageEncoderBatch<M>,
}

impl<M: Message> MessageHandlerDecorator<M> {
    /// Take ownership of the decoder and encoder batches to install.
    pub fn new(decoders: MessageDecoderBatch<M>, encoders: MessageEncoderBatch<M>) -> Self {
        Self { decoders, encoders }
    }

    /// Run decoder setups, then encoder setups, in declaration order.
    ///
    /// Encoder keys are resolved against the catalog as they register; the
    /// first unresolvable key aborts decoration with an error so the host
    /// can fail startup for this category. Consumes the decorator.
    pub fn decorate(
        self,
        handler: &mut MessageHandler<M>,
        catalog: &dyn MessageCatalog,
    ) -> Result<()> {
        let mut context = MessageDecoderContext::new(handler);
        for setup in self.decoders.setups {
            setup(&mut context);
        }

        let mut context = MessageEncoderContext::new(handler, catalog);
        for setup in self.encoders.setups {
            setup(&mut context)?;
        }

        debug!(
            decoders = handler.decoder_names().len(),
            encoders = handler.encoder_names().len(),
            "message handler decorated"
        );
        Ok(())
    }
}

impl<M: 'static> fmt::Debug for MessageHandlerDecorator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHandlerDecorator")
            .field("decoders", &self.decoders)
            .field("encoders", &self.encoders)
            .finish()
    }
}
