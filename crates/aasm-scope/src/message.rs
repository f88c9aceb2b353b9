/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use ahash::{AHashMap, AHashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScopeError;

///A message template, identified by its type and performative. Both the received message of a
/// message-received behaviour and the message of a send action are described by it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub msg_type: String,
    pub performative: String,
    pub float_params: AHashSet<String>,
    pub connection_params: AHashSet<String>,
    ///Module variable fields, mapped to the module type they are declared with.
    pub module_variable_params: AHashMap<String, String>,
}

impl Message {
    ///Fields every message carries the sender's address in.
    pub const RESERVED_CONNECTION_PARAMS: &'static [&'static str] = &["sender"];
    ///Fields describing the message kind.
    pub const RESERVED_TYPE_PARAMS: &'static [&'static str] = &["type", "performative"];

    pub fn new(msg_type: impl Into<String>, performative: impl Into<String>) -> Self {
        Message {
            msg_type: msg_type.into(),
            performative: performative.into(),
            float_params: AHashSet::default(),
            connection_params: AHashSet::default(),
            module_variable_params: AHashMap::default(),
        }
    }

    pub fn with_float_param(mut self, name: impl Into<String>) -> Self {
        self.float_params.insert(name.into());
        self
    }

    pub fn with_connection_param(mut self, name: impl Into<String>) -> Self {
        self.connection_params.insert(name.into());
        self
    }

    pub fn with_module_variable_param(
        mut self,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        self.module_variable_params
            .insert(name.into(), subtype.into());
        self
    }

    pub fn is_reserved_connection_param(&self, name: &str) -> bool {
        Self::RESERVED_CONNECTION_PARAMS.contains(&name)
    }

    pub fn is_reserved_type_param(&self, name: &str) -> bool {
        Self::RESERVED_TYPE_PARAMS.contains(&name)
    }

    pub fn get_module_variable_type(&self, name: &str) -> Result<&str, ScopeError> {
        self.module_variable_params
            .get(name)
            .map(|subtype| subtype.as_str())
            .ok_or_else(|| ScopeError::UnknownModuleVariable {
                owner: format!("message {}/{}", self.msg_type, self.performative),
                name: name.to_owned(),
            })
    }
}
