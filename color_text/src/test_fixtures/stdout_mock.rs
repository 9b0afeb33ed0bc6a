// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, MutexGuard, PoisonError}};

use smallvec::{SmallVec, smallvec};
use strip_ansi_escapes::strip;

use crate::StdMutex;

pub const MOCK_BUFFER_INLINE_SIZE: usize = 128;
pub type MockBuffer = SmallVec<[u8; MOCK_BUFFER_INLINE_SIZE]>;

/// You can safely clone this struct, since it only contains an
/// `Arc<StdMutex<MockBuffer>>`. The inner `buffer` will not be cloned, just the [Arc]
/// will be cloned.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
/// - [`super::OutputDeviceExt::new_mock()`]
#[derive(Clone, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<MockBuffer>>,
}

impl Default for StdoutMock {
    fn default() -> Self {
        Self {
            buffer: Arc::new(StdMutex::new(smallvec![])),
        }
    }
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl StdoutMock {
    fn lock_buffer(&self) -> MutexGuard<'_, MockBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> MockBuffer { self.lock_buffer().clone() }

    /// Invalid UTF-8 is replaced with `U+FFFD`.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock_buffer().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock_buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
