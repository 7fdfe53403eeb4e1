//! Byte-level view of the `struct file_handle` exchanged with `name_to_handle_at(2)`.
//!
//! Layout, all fields in native byte order:
//!
//! | offset | size | field          |
//! |--------|------|----------------|
//! | 0      | 4    | `handle_bytes` |
//! | 4      | 4    | `handle_type`  |
//! | 8      | n    | payload        |
//!
//! Before the call `handle_bytes` holds the payload capacity offered by the caller.
//! After a successful call it holds the number of payload bytes the kernel wrote;
//! after an `EOVERFLOW` it holds the capacity the kernel needs. cgroupfs stores the
//! cgroup id as a `u64` in the first 8 payload bytes.

/// Size of the fixed `handle_bytes` + `handle_type` header.
pub const HEADER_SIZE: usize = 8;

/// Payload capacity of the first attempt. cgroupfs handles fit in 8 bytes.
pub const INITIAL_CAPACITY: u32 = 8;

const HANDLE_BYTES_OFFSET: usize = 0;
const HANDLE_TYPE_OFFSET: usize = 4;
const CGROUP_ID_OFFSET: usize = HEADER_SIZE;
const CGROUP_ID_SIZE: usize = 8;

/// Owned, variable-length file handle buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    buf: Vec<u8>,
}

impl FileHandle {
    /// Allocates a zeroed buffer of `HEADER_SIZE + capacity` bytes and stores
    /// `capacity` in `handle_bytes`.
    ///
    /// The payload is never shorter than the 8 bytes of the cgroup id, so
    /// [`FileHandle::cgroup_id`] can always be read.
    pub fn with_capacity(capacity: u32) -> Self {
        let payload = (capacity as usize).max(CGROUP_ID_SIZE);
        let mut handle = Self {
            buf: vec![0; HEADER_SIZE + payload],
        };
        handle.set_handle_bytes(capacity);
        handle
    }

    /// Total buffer size in bytes, header included.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// Payload bytes available after the header.
    pub fn capacity(&self) -> usize {
        self.buf.len() - HEADER_SIZE
    }

    pub fn handle_bytes(&self) -> u32 {
        u32::from_ne_bytes(self.read_array(HANDLE_BYTES_OFFSET))
    }

    pub fn set_handle_bytes(&mut self, handle_bytes: u32) {
        self.write(HANDLE_BYTES_OFFSET, &handle_bytes.to_ne_bytes());
    }

    pub fn handle_type(&self) -> i32 {
        i32::from_ne_bytes(self.read_array(HANDLE_TYPE_OFFSET))
    }

    #[cfg(test)]
    pub(crate) fn set_handle_type(&mut self, handle_type: i32) {
        self.write(HANDLE_TYPE_OFFSET, &handle_type.to_ne_bytes());
    }

    /// Payload bytes, bounded by `handle_bytes`.
    pub fn payload(&self) -> &[u8] {
        let len = (self.handle_bytes() as usize).min(self.capacity());
        &self.buf[HEADER_SIZE..HEADER_SIZE + len]
    }

    /// The whole payload area, regardless of `handle_bytes`.
    #[cfg(test)]
    pub(crate) fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buf[HEADER_SIZE..]
    }

    /// Reads the cgroup id stored by cgroupfs at the start of the payload.
    pub fn cgroup_id(&self) -> u64 {
        u64::from_ne_bytes(self.read_array(CGROUP_ID_OFFSET))
    }

    /// Pointer to the start of the header, for handing the buffer to the kernel.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.buf.as_mut_ptr()
    }

    fn read_array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[offset..offset + N]);
        out
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) {
        self.buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
}
