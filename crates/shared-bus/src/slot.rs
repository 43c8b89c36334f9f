//! # Single-Slot Handler
//!
//! State machine behind an `on<kind>` property:
//!
//! ```text
//! EMPTY   --set(L)----> SET(L)    register L
//! SET(L1) --set(L2)---> SET(L2)   unregister L1, register L2 (nothing if L1 == L2)
//! SET(L)  --set(None)-> EMPTY     unregister L
//! EMPTY   --set(None)-> EMPTY     nothing
//! ```
//!
//! The slot only computes the registry changes; the event target applies them.

use crate::listener::Listener;

/// Current value of one `on<kind>` property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HandlerSlot {
    /// No handler assigned.
    #[default]
    Empty,
    /// `Listener` is the current handler.
    Set(Listener),
}

/// Registry changes produced by one slot assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTransition {
    /// Listener to remove from the registry.
    pub unregister: Option<Listener>,
    /// Listener to add to the registry.
    pub register: Option<Listener>,
}

impl SlotTransition {
    /// Whether the assignment changes nothing.
    pub fn is_noop(&self) -> bool {
        self.unregister.is_none() && self.register.is_none()
    }
}

impl HandlerSlot {
    /// Current handler, if any.
    pub fn current(&self) -> Option<&Listener> {
        match self {
            Self::Empty => None,
            Self::Set(listener) => Some(listener),
        }
    }

    /// Assign `next` and return the registry changes the assignment implies.
    pub fn assign(&mut self, next: Option<Listener>) -> SlotTransition {
        let previous = std::mem::take(self);
        match (previous, next) {
            (Self::Empty, None) => SlotTransition::default(),
            (Self::Empty, Some(listener)) => {
                *self = Self::Set(listener.clone());
                SlotTransition {
                    unregister: None,
                    register: Some(listener),
                }
            }
            (Self::Set(current), Some(listener)) if current == listener => {
                *self = Self::Set(current);
                SlotTransition::default()
            }
            (Self::Set(current), Some(listener)) => {
                *self = Self::Set(listener.clone());
                SlotTransition {
                    unregister: Some(current),
                    register: Some(listener),
                }
            }
            (Self::Set(current), None) => SlotTransition {
                unregister: Some(current),
                register: None,
            },
        }
    }
}
