//!
//! Runtime List Type
//!
//! A list literal compiles to an allocation of its declared length followed
//! by one `fill_next` per element. Until every pre-allocated slot is filled
//! the list is unsealed and can only be filled. Once sealed it can be read
//! and grown with `append`, one slot at a time.
//!
//! The backing buffer is owned by the list and freed when the list is
//! dropped or explicitly released.
//!

use tracing::{debug, trace};

use crate::error::RuntimeError;
use crate::value::Value;

/// Construction phase of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-fill: `remaining` declared slots have not been written yet
    Unsealed { remaining: usize },
    Sealed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedList {
    slots: Vec<Value>,
    phase: Phase,
}

impl TaggedList {
    /// Allocate a list of `length` slots, all waiting to be filled.
    /// A zero-length list is sealed immediately.
    pub fn allocate(length: usize) -> Result<Self, RuntimeError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(length)
            .map_err(|_| RuntimeError::Allocation { requested: length })?;

        let phase = if length == 0 {
            Phase::Sealed
        } else {
            Phase::Unsealed { remaining: length }
        };
        debug!(length, "allocated list");

        Ok(Self { slots, phase })
    }

    /// Build an already-sealed list from complete contents
    pub fn sealed(values: Vec<Value>) -> Self {
        Self {
            slots: values,
            phase: Phase::Sealed,
        }
    }

    pub fn len(&self) -> usize {
        match self.phase {
            Phase::Unsealed { remaining } => self.slots.len() + remaining,
            Phase::Sealed => self.slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of declared slots still waiting for `fill_next`
    pub fn pending(&self) -> usize {
        match self.phase {
            Phase::Unsealed { remaining } => remaining,
            Phase::Sealed => 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sealed(&self) -> bool {
        self.phase == Phase::Sealed
    }

    /// Write the next unfilled slot. Fails once every declared slot is filled.
    pub fn fill_next(&mut self, value: Value) -> Result<(), RuntimeError> {
        let Phase::Unsealed { remaining } = self.phase else {
            return Err(RuntimeError::Overfill { length: self.len() });
        };

        trace!(slot = self.slots.len(), remaining, "filling list slot");
        // Capacity for every declared slot was reserved up front.
        self.slots.push(value);
        self.phase = if remaining == 1 {
            Phase::Sealed
        } else {
            Phase::Unsealed {
                remaining: remaining - 1,
            }
        };
        Ok(())
    }

    /// Grow a sealed list by one slot holding `value`
    pub fn append(&mut self, value: Value) -> Result<(), RuntimeError> {
        self.require_sealed()?;

        let length = self.slots.len();
        self.slots
            .try_reserve(1)
            .map_err(|_| RuntimeError::Allocation {
                requested: length + 1,
            })?;
        trace!(length = length + 1, "appended to list");
        self.slots.push(value);
        Ok(())
    }

    /// Read the slot at `index`. Negative indices are out of range.
    pub fn get(&self, index: i64) -> Result<&Value, RuntimeError> {
        self.require_sealed()?;

        let length = self.slots.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.slots.get(i))
            .ok_or(RuntimeError::IndexOutOfRange { index, length })
    }

    /// Iterate over the slots filled so far
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.slots.iter()
    }

    /// Free the list and its buffer
    pub fn release(self) {
        debug!(length = self.len(), pending = self.pending(), "released list");
    }

    fn require_sealed(&self) -> Result<(), RuntimeError> {
        match self.phase {
            Phase::Sealed => Ok(()),
            Phase::Unsealed { remaining } => Err(RuntimeError::NotSealed {
                length: self.len(),
                pending: remaining,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a TaggedList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
