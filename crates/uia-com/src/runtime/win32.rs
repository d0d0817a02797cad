//! Windows COM library initialization

use windows::Win32::System::Com::{
    CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED, COINIT_MULTITHREADED,
};

use super::{ApartmentType, NativeSubsystem};
use crate::types::HResult;

/// The platform COM library (`CoInitializeEx` / `CoUninitialize`)
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Subsystem;

impl NativeSubsystem for Win32Subsystem {
    fn initialize(&self, apartment: ApartmentType) -> HResult {
        let model = match apartment {
            ApartmentType::Sta => COINIT_APARTMENTTHREADED,
            ApartmentType::Mta => COINIT_MULTITHREADED,
        };
        let hr = unsafe { CoInitializeEx(None, model) };
        HResult(hr.0)
    }

    fn uninitialize(&self) {
        unsafe { CoUninitialize() }
    }
}
