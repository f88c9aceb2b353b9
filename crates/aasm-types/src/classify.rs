/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! Classification of an expression into its possible readings.
//!
//! There are six independent rules. Each looks at the expression text and the [Scope] and might
//! add readings. None of them stops another one from running, so an identifier can end up with several
//! readings (for instance an agent parameter that is also the value of some enum).
//!
//! Lookups of a module variable's module type are best effort. If the scope can't name the type,
//! the rule simply does not produce a reading.

use aasm_scope::{literal, Scope};

use crate::{
    lattice::{AttrKey, CompositeType, Tag},
    Argument,
};

///Prefix of fields of the received message.
pub const RECEIVED_MESSAGE: &str = "rcv";
///Prefix of fields of the message being sent.
pub const SEND_MESSAGE: &str = "send";

///If `expr` is `prefix.field` (prefix compared case insensitive), returns `field`.
pub(crate) fn message_field<'a>(expr: &'a str, prefix: &str) -> Option<&'a str> {
    let (head, field) = expr.split_once('.')?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(field)
    } else {
        None
    }
}

impl Argument {
    pub(crate) fn set_types(&mut self, scope: &Scope) {
        self.check_agent_params(scope);
        self.check_action_variables(scope);
        self.check_received_message_params(scope);
        self.check_send_message_params(scope);
        self.check_numerical_values();
        self.check_connection_values();
    }

    fn push_type(&mut self, ty: CompositeType, rule: &'static str) {
        #[cfg(feature = "log")]
        log::trace!("{}: {} reading {}", self.expr(), rule, ty.name());
        #[cfg(not(feature = "log"))]
        let _ = rule;

        self.types.push(ty);
    }

    fn check_agent_params(&mut self, scope: &Scope) {
        use Tag::*;
        let agent = &scope.agent;
        let expr = self.expr().to_owned();

        if agent.is_reserved_float_param(&expr) {
            self.push_type(CompositeType::compose(&[Float, AgentParam, Immutable]), "agent");
        } else if agent.is_reserved_connection_list_param(&expr) {
            self.push_type(
                CompositeType::compose(&[List, ConnectionList, AgentParam, Mutable]),
                "agent",
            );
        } else if agent.is_reserved_connection_param(&expr) {
            self.push_type(
                CompositeType::compose(&[Connection, AgentParam, Immutable]),
                "agent",
            );
        } else if agent.float_param_names.contains(&expr) {
            self.push_type(CompositeType::compose(&[Float, AgentParam, Mutable]), "agent");
        } else if agent.is_enum(&expr) {
            self.push_type(CompositeType::compose(&[Enum, AgentParam, Mutable]), "agent");
        } else if agent.message_lists.contains(&expr) {
            self.push_type(
                CompositeType::compose(&[List, MessageList, AgentParam, Mutable]),
                "agent",
            );
        } else if agent.connection_lists.contains(&expr) {
            self.push_type(
                CompositeType::compose(&[List, ConnectionList, AgentParam, Mutable]),
                "agent",
            );
        } else if agent.float_lists.contains(&expr) {
            self.push_type(
                CompositeType::compose(&[List, FloatList, AgentParam, Mutable]),
                "agent",
            );
        } else if agent.module_variables.contains_key(&expr) {
            match agent.get_module_variable_type(&expr) {
                Ok(subtype) => self.push_type(
                    CompositeType::module_variable(subtype, &[AgentParam, Mutable]),
                    "agent",
                ),
                Err(_e) => {
                    #[cfg(feature = "log")]
                    log::warn!("skipping module variable reading of {}: {}", expr, _e);
                }
            }
        }

        //Enum values are checked regardless of the parameter readings above.
        for enum_param in &agent.enums {
            for enum_value in &enum_param.enum_values {
                if enum_value.value == expr {
                    self.push_type(
                        CompositeType::compose(&[EnumValue, Immutable])
                            .with_attribute(AttrKey::FromEnum, enum_param.name.clone()),
                        "enum value",
                    );
                }
            }
        }
    }

    fn check_action_variables(&mut self, scope: &Scope) {
        use Tag::*;
        let action = &scope.action;
        let expr = self.expr().to_owned();

        if action.is_declared_float(&expr) {
            self.push_type(CompositeType::compose(&[Float, Declared, Mutable]), "action");
        } else if action.is_declared_connection(&expr) {
            self.push_type(
                CompositeType::compose(&[Connection, Declared, Mutable]),
                "action",
            );
        } else if action.is_declared_module_variable(&expr) {
            match action.get_module_variable_type(&expr) {
                Ok(subtype) => self.push_type(
                    CompositeType::module_variable(subtype, &[Declared, Mutable]),
                    "action",
                ),
                Err(_e) => {
                    #[cfg(feature = "log")]
                    log::warn!("skipping module variable reading of {}: {}", expr, _e);
                }
            }
        }
    }

    fn check_received_message_params(&mut self, scope: &Scope) {
        use Tag::*;
        let Some(message) = scope.received_message() else {
            return;
        };
        let expr = self.expr().to_owned();

        if let Some(field) = message_field(&expr, RECEIVED_MESSAGE) {
            if message.is_reserved_connection_param(field) {
                self.push_type(
                    CompositeType::compose(&[Connection, ReceivedMessageParam, Immutable]),
                    "received message",
                );
            } else if message.is_reserved_type_param(field) {
                self.push_type(
                    CompositeType::compose(&[MessageType, ReceivedMessageParam, Immutable]),
                    "received message",
                );
            } else if message.float_params.contains(field) {
                self.push_type(
                    CompositeType::compose(&[Float, ReceivedMessageParam, Immutable]),
                    "received message",
                );
            } else if message.connection_params.contains(field) {
                self.push_type(
                    CompositeType::compose(&[Connection, ReceivedMessageParam, Immutable]),
                    "received message",
                );
            } else if let Ok(subtype) = message.get_module_variable_type(field) {
                self.push_type(
                    CompositeType::module_variable(subtype, &[ReceivedMessageParam, Immutable]),
                    "received message",
                );
            }
        } else if expr.eq_ignore_ascii_case(RECEIVED_MESSAGE) {
            self.push_type(
                CompositeType::compose(&[Message, ReceivedMessage, Immutable]),
                "received message",
            );
        }
    }

    fn check_send_message_params(&mut self, scope: &Scope) {
        use Tag::*;
        let Some(message) = scope.send_message() else {
            return;
        };
        let expr = self.expr().to_owned();

        //NOTE: the sender is filled in when sending, so there is no reserved connection field here.
        if let Some(field) = message_field(&expr, SEND_MESSAGE) {
            if message.is_reserved_type_param(field) {
                self.push_type(
                    CompositeType::compose(&[MessageType, SendMessageParam, Immutable]),
                    "send message",
                );
            } else if message.float_params.contains(field) {
                self.push_type(
                    CompositeType::compose(&[Float, SendMessageParam, Mutable]),
                    "send message",
                );
            } else if message.connection_params.contains(field) {
                self.push_type(
                    CompositeType::compose(&[Connection, SendMessageParam, Mutable]),
                    "send message",
                );
            } else if let Ok(subtype) = message.get_module_variable_type(field) {
                self.push_type(
                    CompositeType::module_variable(subtype, &[SendMessageParam, Mutable]),
                    "send message",
                );
            }
        } else if expr.eq_ignore_ascii_case(SEND_MESSAGE) {
            self.push_type(
                CompositeType::compose(&[Message, SendMessage, Mutable]),
                "send message",
            );
        }
    }

    fn check_numerical_values(&mut self) {
        use Tag::*;
        if literal::is_float(self.expr()) {
            self.push_type(CompositeType::compose(&[Float, Immutable, Literal]), "literal");
        }

        if literal::is_int(self.expr()) {
            self.push_type(CompositeType::compose(&[Integer, Immutable, Literal]), "literal");
        }
    }

    fn check_connection_values(&mut self) {
        use Tag::*;
        if literal::is_connection(self.expr()) {
            self.push_type(
                CompositeType::compose(&[Connection, Immutable, Literal]),
                "literal",
            );
        }
    }
}
