/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Message;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum BehaviourKind {
    Setup,
    OneTime { delay: f64 },
    Cyclic { period: f64 },
    ///Runs whenever `message` is received. Only here `rcv` is in scope.
    MessageReceived { message: Message },
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Behaviour {
    pub name: String,
    pub kind: BehaviourKind,
}

impl Behaviour {
    pub fn new(name: impl Into<String>, kind: BehaviourKind) -> Self {
        Behaviour {
            name: name.into(),
            kind,
        }
    }

    pub fn setup(name: impl Into<String>) -> Self {
        Self::new(name, BehaviourKind::Setup)
    }

    pub fn message_received(name: impl Into<String>, message: Message) -> Self {
        Self::new(name, BehaviourKind::MessageReceived { message })
    }

    pub fn received_message(&self) -> Option<&Message> {
        if let BehaviourKind::MessageReceived { message } = &self.kind {
            Some(message)
        } else {
            None
        }
    }
}
