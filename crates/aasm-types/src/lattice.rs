/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! The type lattice.
//!
//! A [Tag] is one capability marker (`Float`, `Mutable`, `AgentParam`, ...). Tags don't form a
//! hierarchy, instead they are freely combined into a [CompositeType], which describes one possible
//! reading of an expression. `Float_AgentParam_Mutable` for instance is a float parameter of the agent
//! that may be written to.
//!
//! Queries against composite types are expressed through [TypeQuery]s: a composite type matches a query
//! if it carries _all_ tags of the query, and exposes all of the query's attributes with the same value.

use std::fmt::Display;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Float,
    Integer,
    Connection,
    Enum,
    EnumValue,
    List,
    ConnectionList,
    MessageList,
    FloatList,
    Message,
    MessageType,
    Mutable,
    Immutable,
    Declared,
    Literal,
    AgentParam,
    ReceivedMessage,
    ReceivedMessageParam,
    SendMessage,
    SendMessageParam,
    ///Value of a type that is defined by some external module. The concrete
    /// module type is carried as the [AttrKey::Subtype] attribute.
    ModuleVariable,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Float => "Float",
            Tag::Integer => "Integer",
            Tag::Connection => "Connection",
            Tag::Enum => "Enum",
            Tag::EnumValue => "EnumValue",
            Tag::List => "List",
            Tag::ConnectionList => "ConnectionList",
            Tag::MessageList => "MessageList",
            Tag::FloatList => "FloatList",
            Tag::Message => "Message",
            Tag::MessageType => "MessageType",
            Tag::Mutable => "Mutable",
            Tag::Immutable => "Immutable",
            Tag::Declared => "Declared",
            Tag::Literal => "Literal",
            Tag::AgentParam => "AgentParam",
            Tag::ReceivedMessage => "ReceivedMessage",
            Tag::ReceivedMessageParam => "ReceivedMessageParam",
            Tag::SendMessage => "SendMessage",
            Tag::SendMessageParam => "SendMessageParam",
            Tag::ModuleVariable => "ModuleVariable",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

///Named attributes a composite type can carry in addition to its tags.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrKey {
    ///The enum an `EnumValue` belongs to.
    FromEnum,
    ///The module type of a `ModuleVariable`.
    Subtype,
}

impl AttrKey {
    pub fn name(&self) -> &'static str {
        match self {
            AttrKey::FromEnum => "from_enum",
            AttrKey::Subtype => "subtype",
        }
    }
}

pub type TagColl = SmallVec<[Tag; 4]>;
pub type AttrColl = SmallVec<[(AttrKey, String); 1]>;

///One possible reading of an expression. A value type: composing the same tags twice
/// yields two values that compare equal.
///
/// Equality is _kind_ equality. The order tags were composed in is kept for printing, but
/// ignored when comparing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct CompositeType {
    tags: TagColl,
    attributes: AttrColl,
}

impl CompositeType {
    ///Composes `tags` into a new composite type.
    pub fn compose(tags: &[Tag]) -> Self {
        let mut composed = CompositeType {
            tags: SmallVec::new(),
            attributes: SmallVec::new(),
        };
        for tag in tags {
            if !composed.tags.contains(tag) {
                composed.tags.push(*tag);
            }
        }
        composed
    }

    ///Composes a module variable of module type `subtype`, further tagged with `tags`.
    pub fn module_variable(subtype: impl Into<String>, tags: &[Tag]) -> Self {
        let mut composed = Self::compose(&[Tag::ModuleVariable]);
        for tag in tags {
            if !composed.tags.contains(tag) {
                composed.tags.push(*tag);
            }
        }
        composed.with_attribute(AttrKey::Subtype, subtype)
    }

    ///Sets the attribute `key` to `value`, overwriting an earlier value.
    pub fn with_attribute(mut self, key: AttrKey, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.attributes.push((key, value));
        }
        self
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn attribute(&self, key: AttrKey) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    ///The module type, if this is a module variable.
    pub fn subtype(&self) -> Option<&str> {
        if self.has_tag(Tag::ModuleVariable) {
            self.attribute(AttrKey::Subtype)
        } else {
            None
        }
    }

    pub fn matches(&self, query: &TypeQuery) -> bool {
        query.tags.iter().all(|tag| self.has_tag(*tag))
            && query
                .attributes
                .iter()
                .all(|(key, value)| self.attribute(*key) == Some(value.as_str()))
    }

    ///Printable name of the type. Tags joined by `_`, where a module variable is named by its module type, followed by
    /// all remaining attributes. For instance `Float_AgentParam_Mutable`, `Vector3_Declared_Mutable` or
    /// `EnumValue_Immutable|from_enum=mood`.
    pub fn name(&self) -> String {
        let mut name = self
            .tags
            .iter()
            .map(|tag| match (tag, self.attribute(AttrKey::Subtype)) {
                (Tag::ModuleVariable, Some(subtype)) => subtype,
                (tag, _) => tag.name(),
            })
            .collect::<Vec<_>>()
            .join("_");

        for (key, value) in &self.attributes {
            if *key == AttrKey::Subtype && self.has_tag(Tag::ModuleVariable) {
                continue;
            }
            name.push_str(&format!("|{}={}", key.name(), value));
        }
        name
    }
}

impl PartialEq for CompositeType {
    fn eq(&self, other: &Self) -> bool {
        self.tags.len() == other.tags.len()
            && self.tags.iter().all(|tag| other.has_tag(*tag))
            && self.attributes.len() == other.attributes.len()
            && self
                .attributes
                .iter()
                .all(|(key, value)| other.attribute(*key) == Some(value.as_str()))
    }
}

impl Eq for CompositeType {}

impl Display for CompositeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

///A set of tags and attributes a [CompositeType] has to carry to match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeQuery {
    tags: TagColl,
    attributes: AttrColl,
}

impl TypeQuery {
    pub fn of(tags: &[Tag]) -> Self {
        TypeQuery {
            tags: tags.iter().copied().collect(),
            attributes: SmallVec::new(),
        }
    }

    pub fn with_attribute(mut self, key: AttrKey, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }
}

impl From<Tag> for TypeQuery {
    fn from(value: Tag) -> Self {
        TypeQuery::of(&[value])
    }
}

impl<const N: usize> From<[Tag; N]> for TypeQuery {
    fn from(value: [Tag; N]) -> Self {
        TypeQuery::of(&value)
    }
}
