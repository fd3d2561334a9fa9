///
/// List handle registry
///
/// Compiled code never holds a list directly. It holds an opaque `u64`
/// handle issued here. Handles are never reused, so releasing or touching a
/// list twice is detected instead of reaching freed memory, and a handle
/// that was never issued is told apart from one that was released.
///

use std::collections::HashMap;

use minipy_std_core::{RuntimeError, TaggedList};
use tracing::warn;

pub type ListHandle = u64;

/// Releasing the null handle is a no-op
pub const NULL_HANDLE: ListHandle = 0;

#[derive(Debug, Default)]
pub struct ListRegistry {
    last: ListHandle,
    lists: HashMap<ListHandle, TaggedList>,
}

impl ListRegistry {
    pub fn insert(&mut self, list: TaggedList) -> ListHandle {
        self.last += 1;
        self.lists.insert(self.last, list);
        self.last
    }

    pub fn get(&self, handle: ListHandle) -> Result<&TaggedList, RuntimeError> {
        self.lists
            .get(&handle)
            .ok_or_else(|| self.missing(handle))
    }

    pub fn get_mut(&mut self, handle: ListHandle) -> Result<&mut TaggedList, RuntimeError> {
        let missing = self.missing(handle);
        self.lists.get_mut(&handle).ok_or(missing)
    }

    pub fn release(&mut self, handle: ListHandle) -> Result<(), RuntimeError> {
        if handle == NULL_HANDLE {
            return Ok(());
        }
        let missing = self.missing(handle);
        let list = self.lists.remove(&handle).ok_or(missing)?;
        list.release();
        Ok(())
    }

    fn missing(&self, handle: ListHandle) -> RuntimeError {
        if handle == NULL_HANDLE || handle > self.last {
            RuntimeError::UnknownHandle { handle }
        } else {
            RuntimeError::UseAfterRelease { handle }
        }
    }

    /// Number of lists not yet released
    pub fn live(&self) -> usize {
        self.lists.len()
    }

    /// Release every outstanding list, returning how many were still live
    pub fn clear(&mut self) -> usize {
        let leaked = self.lists.len();
        if leaked > 0 {
            warn!(leaked, "releasing lists the program never freed");
        }
        for (_, list) in self.lists.drain() {
            list.release();
        }
        leaked
    }
}
