//! # Wrapped Object Shape
//!
//! A [`ShapeBlueprint`] lists the member descriptors of a wrapped-object type,
//! the way a prototype lists its own property descriptors. It carries no
//! behavior; the shape inspector turns it into forwarding tables.

use serde::{Deserialize, Serialize};

/// Description of one member of a wrapped-object type.
///
/// A member may expose accessor characteristics (`getter`/`setter`), be
/// callable, both, or neither (a plain data value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name.
    pub name: String,
    /// Member has a read accessor.
    pub getter: bool,
    /// Member has a write accessor.
    pub setter: bool,
    /// Member value is callable.
    pub callable: bool,
}

impl MemberDescriptor {
    /// Read/write accessor.
    pub fn accessor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            getter: true,
            setter: true,
            callable: false,
        }
    }

    /// Read-only accessor.
    pub fn read_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            getter: true,
            setter: false,
            callable: false,
        }
    }

    /// Callable method.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            getter: false,
            setter: false,
            callable: true,
        }
    }

    /// Plain data member that is neither an accessor nor callable.
    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            getter: false,
            setter: false,
            callable: false,
        }
    }

    /// Whether the member has any accessor characteristic.
    pub fn is_accessor(&self) -> bool {
        self.getter || self.setter
    }

    /// Whether the member is writable through its accessor.
    pub fn is_writable(&self) -> bool {
        self.setter
    }

    /// Whether the member is callable.
    pub fn is_callable(&self) -> bool {
        self.callable
    }
}

/// Member descriptors of one wrapped-object type.
///
/// Two blueprints are the same shape when both the name and the member list
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeBlueprint {
    /// Name of the wrapped-object type (e.g. `"RTCPeerConnection"`).
    pub type_name: String,
    /// Member descriptors in declaration order.
    pub members: Vec<MemberDescriptor>,
}

impl ShapeBlueprint {
    /// Create an empty blueprint for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            members: Vec::new(),
        }
    }

    /// Builder-style method to append a member.
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Builder-style method to append several members.
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberDescriptor>) -> Self {
        self.members.extend(members);
        self
    }
}
