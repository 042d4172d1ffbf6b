//! # CPU Configuration
//!
//! Construction-time switches for behavior that differs between 6502 references.
//! The defaults reproduce NMOS hardware.

/// Stack pointer value installed by `reset()` on real hardware.
pub const DEFAULT_RESET_SP: u8 = 0xFD;

/// Behavior switches applied when a `CPU` is constructed.
///
/// # Examples
///
/// ```
/// use cycle6502::{CpuConfig, CPU, FlatMemory};
///
/// let config = CpuConfig {
///     store_affects_flags: true,
///     ..CpuConfig::default()
/// };
///
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert!(cpu.config().store_affects_flags);
/// assert_eq!(cpu.sp(), 0xFD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// When set, STA/STX/STY update Z and N from the stored register.
    ///
    /// Stores never touch flags on the real processor; this exists for hosts that must
    /// match software written against the flag-mutating variant.
    pub store_affects_flags: bool,

    /// Stack pointer value installed by `reset()`.
    pub reset_stack_pointer: u8,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            store_affects_flags: false,
            reset_stack_pointer: DEFAULT_RESET_SP,
        }
    }
}
