// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Apply a style to an [`OutputDevice`], run some work, then restore the default style.
//!
//! The restore write (`ESC[0m`) happens exactly once on every exit path of the work:
//! when it returns [`Ok`], when it returns [`Err`], and when it panics. An `Err` or a
//! panic is propagated to the caller after the restore write, so the terminal is never
//! left in the applied style.
//!
//! There is no style stack. Nesting [`apply_scoped()`] calls restores the default style
//! (not the outer style) when the inner call returns.

use std::io::Result;

use crate::{ColorSpec, EffectCode, EscapeSequence, OutputDevice, build_sequence,
            reset_sequence};

/// Writes the reset sequence when dropped, unless [`Self::restore()`] already did.
struct RestoreDefaultStyleGuard<'a> {
    output_device: &'a OutputDevice,
    armed: bool,
}

impl<'a> RestoreDefaultStyleGuard<'a> {
    fn new(output_device: &'a OutputDevice) -> Self {
        Self {
            output_device,
            armed: true,
        }
    }

    /// Restore on the success path, where a failed write is reported to the caller.
    fn restore(mut self) -> Result<()> {
        self.armed = false;
        reset_style(self.output_device)
    }
}

impl Drop for RestoreDefaultStyleGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // The operation's error (or panic) takes precedence over this one.
        if let Err(error) = reset_style(self.output_device) {
            tracing::warn!(?error, "Failed to restore default style");
        }
    }
}

fn write_sequence(output_device: &OutputDevice, sequence: &EscapeSequence) -> Result<()> {
    let out = crate::lock_output_device_as_mut!(output_device);
    out.write_all(sequence.as_bytes())
}

/// Write the escape sequence for `color` and `effects`, without a trailing newline.
/// Everything written afterwards is styled until [`reset_style()`] is called.
///
/// # Errors
///
/// If the write to `output_device` fails.
pub fn set_style(
    output_device: &OutputDevice,
    color: impl Into<ColorSpec>,
    effects: &[EffectCode],
) -> Result<()> {
    write_sequence(output_device, &build_sequence(color, effects))
}

/// Write `ESC[0m`.
///
/// # Errors
///
/// If the write to `output_device` fails.
pub fn reset_style(output_device: &OutputDevice) -> Result<()> {
    write_sequence(output_device, &reset_sequence())
}

/// Run `operation` with `color` and `effects` applied to `output_device`, then restore
/// the default style.
///
/// `operation` gets the same device, so it can write to it. Its result is returned as
/// is. Its error type must be able to hold an [`std::io::Error`], since writing the
/// escape sequences may fail.
///
/// ```
/// use r3bl_color_text::{BOLD, OutputDevice, RED, apply_scoped, lock_output_device_as_mut,
///                       test_fixtures::OutputDeviceExt};
///
/// let (device, stdout_mock) = OutputDevice::new_mock();
/// let result: std::io::Result<usize> = apply_scoped(&device, RED, &[BOLD], |device| {
///     let out = lock_output_device_as_mut!(device);
///     out.write_all(b"error")?;
///     Ok(5)
/// });
/// assert_eq!(result.unwrap(), 5);
/// assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[31;1merror\x1b[0m");
/// ```
///
/// # Errors
///
/// - If writing the style fails, the error is returned and `operation` is not run.
/// - If `operation` fails, the default style is restored and then its error is
///   returned. A failure to restore is logged, not returned, in this case.
/// - If `operation` succeeds but restoring the default style fails, that error is
///   returned.
///
/// # Panics
///
/// A panic in `operation` is propagated after the default style is restored.
pub fn apply_scoped<T, E>(
    output_device: &OutputDevice,
    color: impl Into<ColorSpec>,
    effects: &[EffectCode],
    operation: impl FnOnce(&OutputDevice) -> std::result::Result<T, E>,
) -> std::result::Result<T, E>
where
    E: From<std::io::Error>,
{
    let sequence = build_sequence(color, effects);
    tracing::trace!(sequence = ?sequence.as_str(), "Apply scoped style");
    write_sequence(output_device, &sequence)?;

    let guard = RestoreDefaultStyleGuard::new(output_device);
    match operation(output_device) {
        Ok(value) => {
            guard.restore()?;
            tracing::trace!("Restored default style");
            Ok(value)
        }
        Err(error) => {
            drop(guard);
            tracing::trace!("Restored default style after failed operation");
            Err(error)
        }
    }
}

/// Write `text` with `color` and `effects` applied, then restore the default style.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_colored(
    output_device: &OutputDevice,
    text: &str,
    color: impl Into<ColorSpec>,
    effects: &[EffectCode],
) -> Result<()> {
    apply_scoped(output_device, color, effects, |output_device| {
        let out = crate::lock_output_device_as_mut!(output_device);
        out.write_all(text.as_bytes())
    })
}

/// Same as [`print_colored()`] but writes a newline after `text`, before the reset.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn println_colored(
    output_device: &OutputDevice,
    text: &str,
    color: impl Into<ColorSpec>,
    effects: &[EffectCode],
) -> Result<()> {
    apply_scoped(output_device, color, effects, |output_device| {
        let out = crate::lock_output_device_as_mut!(output_device);
        writeln!(out, "{text}")
    })
}

#[cfg(test)]
mod tests {
    use std::{io::{Error, ErrorKind, Write},
              panic::{AssertUnwindSafe, catch_unwind},
              sync::Arc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BG_BLUE, BOLD, ColorTarget, DEFAULT, GREEN, RED, StdMutex, UNDERLINE,
                combine, encode_rgb, lock_output_device_as_mut,
                test_fixtures::{OutputDeviceExt, StdoutMock}};

    const RESET: &str = "\x1b[0m";

    fn write_text(output_device: &OutputDevice, text: &str) -> Result<()> {
        let out = lock_output_device_as_mut!(output_device);
        out.write_all(text.as_bytes())
    }

    #[test]
    fn success_path() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let result = apply_scoped(&device, RED, &[BOLD], |device| {
            write_text(device, "hello")?;
            Ok::<_, Error>(42)
        });
        assert_eq!(result.unwrap(), 42);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[31;1mhello\x1b[0m"
        );
    }

    #[test]
    fn failing_operation_still_restores_default_once() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let result: Result<()> = apply_scoped(&device, GREEN, &[], |device| {
            write_text(device, "partial")?;
            Err(Error::other("operation failed"))
        });

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "operation failed");

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert_eq!(output, "\x1b[32mpartial\x1b[0m");
        assert_eq!(output.matches(RESET).count(), 1);
    }

    /// Restoring must not be skipped when the wrapped operation fails, which would
    /// leave the terminal styled.
    #[test]
    fn failing_operation_does_not_leave_terminal_styled() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let _unused: Result<()> = apply_scoped(&device, RED, &[BOLD], |_| {
            Err(Error::from(ErrorKind::Interrupted))
        });
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert_eq!(output, "\x1b[31;1m\x1b[0m");
        assert!(output.ends_with(RESET));
    }

    #[test]
    fn panicking_operation_still_restores_default_once() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _unused: Result<()> = apply_scoped(&device, RED, &[UNDERLINE], |device| {
                write_text(device, "before panic").unwrap();
                panic!("operation panicked");
            });
        }));
        assert!(result.is_err());

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert_eq!(output, "\x1b[31;4mbefore panic\x1b[0m");
        assert_eq!(output.matches(RESET).count(), 1);
    }

    #[test]
    fn panic_while_holding_device_lock_still_restores_default() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _unused: Result<()> = apply_scoped(&device, RED, &[], |device| {
                let out = lock_output_device_as_mut!(device);
                out.write_all(b"locked").unwrap();
                panic!("operation panicked while holding the lock");
            });
        }));
        assert!(result.is_err());
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[31mlocked\x1b[0m"
        );
    }

    #[derive(Debug, thiserror::Error)]
    enum AppError {
        #[error(transparent)]
        Io(#[from] Error),
        #[error("not found")]
        NotFound,
    }

    #[test]
    fn custom_error_type() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let result: std::result::Result<(), AppError> =
            apply_scoped(&device, BG_BLUE, &[BOLD], |_| Err(AppError::NotFound));
        assert!(matches!(result, Err(AppError::NotFound)));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[44;1m\x1b[0m");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> Result<usize> {
            Err(Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> Result<()> { Ok(()) }
    }

    #[test]
    fn style_write_failure_skips_operation() {
        let device = OutputDevice {
            resource: Arc::new(StdMutex::new(FailingWriter)),
            is_mock: true,
        };
        let mut called = false;
        let result: Result<()> = apply_scoped(&device, RED, &[], |_| {
            called = true;
            Ok(())
        });
        assert_eq!(result.unwrap_err().kind(), ErrorKind::BrokenPipe);
        assert!(!called);
    }

    #[test]
    fn set_and_reset_style() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let color = combine(
            encode_rgb(1, 2, 3, ColorTarget::Foreground).unwrap(),
            BG_BLUE.into(),
        );
        set_style(&device, color, &[BOLD]).unwrap();
        write_text(&device, "text").unwrap();
        reset_style(&device).unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[38;2;1;2;3;44;1mtext\x1b[0m"
        );
    }

    #[test]
    fn default_style_written_twice() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        set_style(&device, DEFAULT, &[]).unwrap();
        set_style(&device, DEFAULT, &[]).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[0m\x1b[0m");
    }

    #[test]
    fn print_and_println_colored() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        print_colored(&device, "a", RED, &[]).unwrap();
        println_colored(&device, "b", GREEN, &[UNDERLINE]).unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[31ma\x1b[0m\x1b[32;4mb\n\x1b[0m"
        );
    }

    #[test]
    fn nested_scopes_restore_default_not_outer() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let result: Result<()> = apply_scoped(&device, RED, &[], |device| {
            print_colored(device, "inner", GREEN, &[])?;
            write_text(device, "outer")
        });
        result.unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[31m\x1b[32minner\x1b[0mouter\x1b[0m"
        );
    }

    #[test]
    fn mock_captures_plain_text() {
        let stdout_mock = StdoutMock::new();
        let device = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        print_colored(&device, "plain", RED, &[BOLD]).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "plain");
    }
}
