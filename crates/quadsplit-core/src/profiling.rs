//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing, so
//! library code can instrument itself unconditionally.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __quadsplit_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__quadsplit_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__quadsplit_profile_noop as profile_scope;

/// Turn scope collection on or off.
///
/// Scopes are off by default; nothing is recorded until this is called with `true`.
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    {
        puffin::set_scopes_on(enabled);
        tracing::info!("puffin scopes {}", if enabled { "enabled" } else { "disabled" });
    }
    #[cfg(not(feature = "profiling"))]
    {
        let _ = enabled;
        tracing::warn!("profiling requested but the `profiling` feature is disabled");
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per host frame so scopes are grouped by frame.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
