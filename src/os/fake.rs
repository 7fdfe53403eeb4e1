use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use super::{OsError, Sys};
use crate::handle::FileHandle;

/// Scripted answer for a single `name_to_handle_at` call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    /// Fill the handle with this cgroup id.
    Id(u64),
    /// Report `EOVERFLOW` and store the required payload size.
    Overflow(u32),
    Fail(OsError),
}

/// What the resolver handed to `name_to_handle_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Call {
    pub buffer_len: usize,
    pub handle_bytes: u32,
}

pub(crate) struct FakeSys {
    magic: Result<u64, OsError>,
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeSys {
    pub fn new(magic: Result<u64, OsError>, replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            magic,
            replies: RefCell::new(replies.into_iter().collect()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Sys for FakeSys {
    fn filesystem_magic(&self, _path: &Path) -> Result<u64, OsError> {
        self.magic
    }

    fn name_to_handle_at(&self, _path: &Path, handle: &mut FileHandle) -> Result<i32, OsError> {
        self.calls.borrow_mut().push(Call {
            buffer_len: handle.len(),
            handle_bytes: handle.handle_bytes(),
        });

        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected name_to_handle_at call");
        match reply {
            Reply::Id(id) => {
                handle.set_handle_bytes(8);
                handle.set_handle_type(0xfe);
                handle.payload_mut()[..8].copy_from_slice(&id.to_ne_bytes());
                Ok(42)
            }
            Reply::Overflow(required) => {
                handle.set_handle_bytes(required);
                Err(OsError::Other(libc::EOVERFLOW))
            }
            Reply::Fail(err) => Err(err),
        }
    }
}
