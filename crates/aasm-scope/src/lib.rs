/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! # Aasm-Scope
//!
//! The lexical context an aasm expression is typed in. An expression always lives in some action
//! of some behaviour of some agent. Which names are visible, and what they are, depends on
//! all three:
//!
//! - the [Agent] declares parameters (floats, enums, lists, module variables) and owns a few reserved ones,
//! - the [Action] declares locals, and, if it is a send action, exposes `send` and its fields,
//! - the [Behaviour], if it is a message-received behaviour, exposes `rcv` and its fields.
//!
//! The scope is produced by whatever parses the DSL. The typing passes only read it, except for
//! the local declarations a `DECL` statement adds to the current action.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod action;
mod agent;
mod behaviour;
mod error;
pub mod literal;
mod message;

pub use action::{Action, ActionKind};
pub use agent::{Agent, EnumParam, EnumValue};
pub use behaviour::{Behaviour, BehaviourKind};
pub use error::ScopeError;
pub use message::Message;

///The agent, behaviour and action an expression is found in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Scope {
    pub agent: Agent,
    pub behaviour: Behaviour,
    pub action: Action,
}

impl Scope {
    pub fn new(agent: Agent, behaviour: Behaviour, action: Action) -> Self {
        Scope {
            agent,
            behaviour,
            action,
        }
    }

    ///The received message, if the current behaviour reacts to one.
    pub fn received_message(&self) -> Option<&Message> {
        self.behaviour.received_message()
    }

    ///The message being built, if the current action sends one.
    pub fn send_message(&self) -> Option<&Message> {
        self.action.send_message()
    }
}
