// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for capturing what gets written to an [`crate::OutputDevice`].

// Attach.
pub mod output_device_ext;
pub mod stdout_mock;

// Re-export.
pub use output_device_ext::*;
pub use stdout_mock::*;
