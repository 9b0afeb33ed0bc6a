// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use super::StdoutMock;
use crate::{OutputDevice, StdMutex};

pub trait OutputDeviceExt {
    /// Returns a device that writes into the returned [`StdoutMock`], instead of the
    /// terminal.
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}
