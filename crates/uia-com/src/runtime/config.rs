//! Runtime configuration

/// COM apartment model requested for the calling thread
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ApartmentType {
    /// Multi-Threaded Apartment
    Mta,
    /// Single-Threaded Apartment
    #[default]
    Sta,
}

/// Configuration for [`ComRuntime`](super::ComRuntime)
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    /// Apartment model to initialize
    pub apartment: ApartmentType,
    /// Accept a thread that is already initialized with the other model
    ///
    /// When set, `RPC_E_CHANGED_MODE` is not an error. The runtime then
    /// does not own the initialization and never uninitializes.
    pub allow_changed_mode: bool,
}

impl RuntimeConfig {
    /// Default configuration (STA, strict apartment model)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the apartment model
    pub fn apartment(mut self, apartment: ApartmentType) -> Self {
        self.apartment = apartment;
        self
    }

    /// Accept an already initialized thread of the other model
    pub fn allow_changed_mode(mut self, allow: bool) -> Self {
        self.allow_changed_mode = allow;
        self
    }
}
