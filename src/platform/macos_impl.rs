use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::base::CGError;
use std::io;

use crate::controller::TextInputService;

use super::verbose;

// Carbon/HIToolbox Text Input Source Services.
#[link(name = "Carbon", kind = "framework")]
extern "C" {
    fn TISCopyCurrentKeyboardInputSource() -> *mut libc::c_void;
    fn TISCreateInputSourceList(
        properties: *const libc::c_void,
        include_all_installed: bool,
    ) -> *const libc::c_void;
    fn TISGetInputSourceProperty(
        source: *const libc::c_void,
        property_key: CFStringRef,
    ) -> *const libc::c_void;
    fn TISSelectInputSource(source: *const libc::c_void) -> CGError;

    static kTISPropertyInputSourceID: CFStringRef;
}

/// One installed input source. The TIS handle is a CF object; the wrapper
/// keeps it retained for the life of the handle.
pub struct SystemInputSource(CFType);

#[derive(Default)]
pub struct SystemInputService;

impl SystemInputService {
    pub fn new() -> Self {
        SystemInputService
    }
}

impl TextInputService for SystemInputService {
    type Source = SystemInputSource;

    fn current_id(&self) -> io::Result<String> {
        unsafe {
            let current = TISCopyCurrentKeyboardInputSource();
            if current.is_null() {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    "failed to get current input source",
                ));
            }
            // Copy rule: released when the wrapper drops.
            let current = CFType::wrap_under_create_rule(current as CFTypeRef);

            let id_ref = TISGetInputSourceProperty(
                current.as_CFTypeRef() as *const libc::c_void,
                kTISPropertyInputSourceID,
            );
            if id_ref.is_null() {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    "input source has no identifier property",
                ));
            }

            let id = CFString::wrap_under_get_rule(id_ref as CFStringRef);
            Ok(id.to_string())
        }
    }

    fn sources_matching(&self, id: &str) -> io::Result<Vec<SystemInputSource>> {
        let key = unsafe { CFString::wrap_under_get_rule(kTISPropertyInputSourceID) };
        let value = CFString::new(id);
        let filter = CFDictionary::from_CFType_pairs(&[(key, value)]);

        unsafe {
            let list = TISCreateInputSourceList(
                filter.as_concrete_TypeRef() as *const libc::c_void,
                false,
            );
            if list.is_null() {
                return Ok(Vec::new());
            }
            let list = CFArray::<CFType>::wrap_under_create_rule(list as CFArrayRef);

            if verbose() {
                eprintln!("[imctl] {} input source(s) match '{}'", list.len(), id);
            }

            Ok(list
                .iter()
                .map(|source| SystemInputSource((*source).clone()))
                .collect())
        }
    }

    fn activate(&self, source: &SystemInputSource) -> io::Result<()> {
        let status =
            unsafe { TISSelectInputSource(source.0.as_CFTypeRef() as *const libc::c_void) };
        if status != 0 {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("failed to select input source (error code: {})", status),
            ));
        }
        Ok(())
    }
}
