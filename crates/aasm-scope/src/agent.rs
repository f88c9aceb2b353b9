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

///One value an enum parameter can take, together with the probability it is initialised with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub percentage: f64,
}

///Enum parameter of an agent. The parameter's name doubles as the enum's name.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EnumParam {
    pub name: String,
    pub enum_values: Vec<EnumValue>,
}

impl EnumParam {
    pub fn new(name: impl Into<String>) -> Self {
        EnumParam {
            name: name.into(),
            enum_values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>, percentage: f64) -> Self {
        self.enum_values.push(EnumValue {
            value: value.into(),
            percentage,
        });
        self
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.enum_values.iter().any(|v| v.value == value)
    }
}

///Agent declaration as far as typing is concerned: which parameters exist, and of which kind.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub name: String,
    pub float_param_names: AHashSet<String>,
    ///Enum parameters in declaration order. The order decides in which order enum-value readings
    /// of an identifier are found.
    pub enums: Vec<EnumParam>,
    pub message_lists: AHashSet<String>,
    pub connection_lists: AHashSet<String>,
    pub float_lists: AHashSet<String>,
    ///Module variables, mapped to the module type they are declared with.
    pub module_variables: AHashMap<String, String>,
}

impl Agent {
    pub const RESERVED_FLOAT_PARAMS: &'static [&'static str] = &["connCount"];
    pub const RESERVED_CONNECTION_LIST_PARAMS: &'static [&'static str] = &["connections"];
    pub const RESERVED_CONNECTION_PARAMS: &'static [&'static str] = &["self"];

    pub fn new(name: impl Into<String>) -> Self {
        Agent {
            name: name.into(),
            float_param_names: AHashSet::default(),
            enums: Vec::new(),
            message_lists: AHashSet::default(),
            connection_lists: AHashSet::default(),
            float_lists: AHashSet::default(),
            module_variables: AHashMap::default(),
        }
    }

    pub fn with_float_param(mut self, name: impl Into<String>) -> Self {
        self.float_param_names.insert(name.into());
        self
    }

    pub fn with_enum(mut self, param: EnumParam) -> Self {
        self.enums.push(param);
        self
    }

    pub fn with_message_list(mut self, name: impl Into<String>) -> Self {
        self.message_lists.insert(name.into());
        self
    }

    pub fn with_connection_list(mut self, name: impl Into<String>) -> Self {
        self.connection_lists.insert(name.into());
        self
    }

    pub fn with_float_list(mut self, name: impl Into<String>) -> Self {
        self.float_lists.insert(name.into());
        self
    }

    pub fn with_module_variable(
        mut self,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        self.module_variables.insert(name.into(), subtype.into());
        self
    }

    pub fn is_reserved_float_param(&self, name: &str) -> bool {
        Self::RESERVED_FLOAT_PARAMS.contains(&name)
    }

    pub fn is_reserved_connection_list_param(&self, name: &str) -> bool {
        Self::RESERVED_CONNECTION_LIST_PARAMS.contains(&name)
    }

    pub fn is_reserved_connection_param(&self, name: &str) -> bool {
        Self::RESERVED_CONNECTION_PARAMS.contains(&name)
    }

    pub fn enum_param(&self, name: &str) -> Option<&EnumParam> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enum_param(name).is_some()
    }

    pub fn get_module_variable_type(&self, name: &str) -> Result<&str, ScopeError> {
        self.module_variables
            .get(name)
            .map(|subtype| subtype.as_str())
            .ok_or_else(|| ScopeError::UnknownModuleVariable {
                owner: format!("agent {}", self.name),
                name: name.to_owned(),
            })
    }
}
