//! Shared helpers for the integration suites
//!
//! Each suite is its own `[[test]]` target:
//!
//! ```text
//! cargo test -p integration-tests --test lifecycle_tests
//! RUST_LOG=uia_patterns=trace cargo test -p integration-tests --test element_tests
//! ```

use std::sync::Once;

use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uia_com::{hresult, ComRuntime, RuntimeConfig};
use uia_patterns::testing::{FakeControl, FakeSubsystem};
use uia_patterns::{AutomationElement, PatternKind};

static INIT: Once = Once::new();

/// Install a test subscriber once per process
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Runtime over a subsystem that always initializes
pub fn runtime() -> ComRuntime {
    init_logging();
    let (subsystem, _) = FakeSubsystem::new(hresult::S_OK);
    ComRuntime::init(subsystem, RuntimeConfig::new()).expect("fake subsystem initializes")
}

/// Element over a fresh control supporting `kinds`
pub fn element_with<'rt>(
    runtime: &'rt ComRuntime,
    kinds: &[PatternKind],
) -> (FakeControl, AutomationElement<'rt>) {
    let control = FakeControl::supporting(kinds);
    let element =
        AutomationElement::new(runtime, control.unknown()).expect("runtime is active");
    (control, element)
}
