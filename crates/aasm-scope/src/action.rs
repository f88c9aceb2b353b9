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

use crate::{Message, ScopeError};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    ///Changes the agent's own state.
    Modify,
    ///Builds and sends `message`.
    Send { message: Message },
}

///An action body's local declarations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub declared_floats: AHashSet<String>,
    pub declared_connections: AHashSet<String>,
    ///Local module variables, mapped to their module type.
    pub declared_module_variables: AHashMap<String, String>,
    pub kind: ActionKind,
}

impl Action {
    pub fn modify(name: impl Into<String>) -> Self {
        Self::new(name, ActionKind::Modify)
    }

    pub fn send(name: impl Into<String>, message: Message) -> Self {
        Self::new(name, ActionKind::Send { message })
    }

    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Action {
            name: name.into(),
            declared_floats: AHashSet::default(),
            declared_connections: AHashSet::default(),
            declared_module_variables: AHashMap::default(),
            kind,
        }
    }

    pub fn with_float(mut self, name: impl Into<String>) -> Self {
        self.declared_floats.insert(name.into());
        self
    }

    pub fn with_connection(mut self, name: impl Into<String>) -> Self {
        self.declared_connections.insert(name.into());
        self
    }

    pub fn with_module_variable(
        mut self,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        self.declared_module_variables
            .insert(name.into(), subtype.into());
        self
    }

    pub fn is_declared_float(&self, name: &str) -> bool {
        self.declared_floats.contains(name)
    }

    pub fn is_declared_connection(&self, name: &str) -> bool {
        self.declared_connections.contains(name)
    }

    pub fn is_declared_module_variable(&self, name: &str) -> bool {
        self.declared_module_variables.contains_key(name)
    }

    ///True if `name` is declared locally, regardless of its kind.
    pub fn is_declared(&self, name: &str) -> bool {
        self.is_declared_float(name)
            || self.is_declared_connection(name)
            || self.is_declared_module_variable(name)
    }

    pub fn get_module_variable_type(&self, name: &str) -> Result<&str, ScopeError> {
        self.declared_module_variables
            .get(name)
            .map(|subtype| subtype.as_str())
            .ok_or_else(|| ScopeError::UnknownModuleVariable {
                owner: format!("action {}", self.name),
                name: name.to_owned(),
            })
    }

    ///The message this action builds, if it is a send action.
    pub fn send_message(&self) -> Option<&Message> {
        match &self.kind {
            ActionKind::Send { message } => Some(message),
            ActionKind::Modify => None,
        }
    }

    pub fn declare_float(&mut self, name: impl Into<String>) -> Result<(), ScopeError> {
        let name = self.check_undeclared(name.into())?;
        self.declared_floats.insert(name);
        Ok(())
    }

    pub fn declare_connection(&mut self, name: impl Into<String>) -> Result<(), ScopeError> {
        let name = self.check_undeclared(name.into())?;
        self.declared_connections.insert(name);
        Ok(())
    }

    pub fn declare_module_variable(
        &mut self,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Result<(), ScopeError> {
        let name = self.check_undeclared(name.into())?;
        self.declared_module_variables.insert(name, subtype.into());
        Ok(())
    }

    fn check_undeclared(&self, name: String) -> Result<String, ScopeError> {
        if self.is_declared(&name) {
            Err(ScopeError::AlreadyDeclared {
                action: self.name.clone(),
                name,
            })
        } else {
            Ok(name)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Action;
    use crate::{Message, ScopeError};

    #[test]
    fn declare_once() {
        let mut action = Action::modify("update");
        action.declare_float("tmp").unwrap();
        assert!(action.is_declared_float("tmp"));
        assert_eq!(
            action.declare_connection("tmp"),
            Err(ScopeError::AlreadyDeclared {
                action: "update".to_owned(),
                name: "tmp".to_owned()
            })
        );
        assert!(!action.is_declared_connection("tmp"));
    }

    #[test]
    fn only_send_actions_carry_a_message() {
        let modify = Action::modify("update");
        assert!(modify.send_message().is_none());

        let send = Action::send("notify", Message::new("status", "inform"));
        assert_eq!(send.send_message().unwrap().msg_type, "status");
    }
}
