//! Native subsystem lifecycle
//!
//! The COM library must be initialized on a thread before any foreign
//! object is touched, and uninitialized exactly once for each successful
//! initialization. [`ComRuntime`] owns that pairing. It is created
//! explicitly and passed by reference to whatever needs proof that the
//! subsystem is up, instead of being ambient global state.

mod config;
#[cfg(windows)]
mod win32;

use std::fmt;

use crate::types::{hresult, ComError, HResult, Result};

pub use config::{ApartmentType, RuntimeConfig};
#[cfg(windows)]
pub use win32::Win32Subsystem;

/// Process-scoped native library entry points
pub trait NativeSubsystem {
    /// Initialize the library on the calling thread
    fn initialize(&self, apartment: ApartmentType) -> HResult;

    /// Undo one successful initialization on the calling thread
    fn uninitialize(&self);
}

/// Runtime lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeState {
    /// Initialized; this runtime owes one uninitialize call
    Owned,
    /// Usable, but initialized by someone else with another apartment model
    Borrowed,
    /// Shut down
    Shutdown,
}

/// Initialized native subsystem
///
/// Not `Send`: initialization is per thread.
pub struct ComRuntime {
    subsystem: Box<dyn NativeSubsystem>,
    config: RuntimeConfig,
    state: RuntimeState,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ComRuntime {
    /// Initialize the subsystem on the calling thread
    pub fn init<S>(subsystem: S, config: RuntimeConfig) -> Result<Self>
    where
        S: NativeSubsystem + 'static,
    {
        let hr = subsystem.initialize(config.apartment);

        // S_FALSE: already initialized with the same model. It still counts
        // and must be balanced by an uninitialize.
        let state = if hr.is_ok() || hr == hresult::S_FALSE {
            RuntimeState::Owned
        } else if hr == hresult::RPC_E_CHANGED_MODE && config.allow_changed_mode {
            RuntimeState::Borrowed
        } else {
            return Err(ComError::RuntimeInit(hr));
        };

        tracing::debug!(apartment = ?config.apartment, ?state, status = %hr, "native subsystem initialized");

        Ok(Self {
            subsystem: Box::new(subsystem),
            config,
            state,
            _not_send: std::marker::PhantomData,
        })
    }

    /// Initialize the platform COM library
    #[cfg(windows)]
    pub fn init_platform(config: RuntimeConfig) -> Result<Self> {
        Self::init(Win32Subsystem, config)
    }

    /// Configuration this runtime was created with
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> RuntimeState {
        self.state
    }

    /// Check if foreign objects may be used
    pub fn is_active(&self) -> bool {
        self.state != RuntimeState::Shutdown
    }

    /// Fail with `InvalidState` unless the runtime is active
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(ComError::InvalidState("native subsystem has been shut down".to_string()))
        }
    }

    /// Shut the subsystem down; later calls are no-ops
    pub fn shutdown(&mut self) {
        match self.state {
            RuntimeState::Owned => {
                self.subsystem.uninitialize();
                tracing::debug!("native subsystem uninitialized");
            }
            RuntimeState::Borrowed => {
                tracing::debug!("native subsystem released without uninitialize");
            }
            RuntimeState::Shutdown => return,
        }
        self.state = RuntimeState::Shutdown;
    }
}

impl Drop for ComRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for ComRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComRuntime")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}
