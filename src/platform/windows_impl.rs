use std::io;
use std::ptr;

use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowThreadProcessId, PostMessageW, WM_INPUTLANGCHANGEREQUEST,
};

use crate::controller::TextInputService;

use super::verbose;

/// Keyboard layout handle (HKL). The low word is the input locale
/// identifier, which is what this tool treats as the source identifier.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct SystemInputSource(isize);

impl SystemInputSource {
    fn locale(self) -> u32 {
        (self.0 as u32) & 0x0000FFFF
    }
}

extern "system" {
    fn GetKeyboardLayout(idthread: u32) -> SystemInputSource;
    fn GetKeyboardLayoutList(nbuff: i32, lplist: *mut SystemInputSource) -> i32;
}

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
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "failed to get foreground window",
            ));
        }

        let thread_id = unsafe { GetWindowThreadProcessId(hwnd, None) };
        let layout = unsafe { GetKeyboardLayout(thread_id) };

        Ok(layout.locale().to_string())
    }

    fn sources_matching(&self, id: &str) -> io::Result<Vec<SystemInputSource>> {
        // A target that is not a decimal locale ID cannot match any
        // installed layout.
        let locale: u32 = match id.parse() {
            Ok(locale) => locale,
            Err(_) => return Ok(Vec::new()),
        };

        let count = unsafe { GetKeyboardLayoutList(0, ptr::null_mut()) };
        if count <= 0 {
            return Ok(Vec::new());
        }

        let mut layouts = vec![SystemInputSource(0); count as usize];
        let filled = unsafe { GetKeyboardLayoutList(count, layouts.as_mut_ptr()) };
        layouts.truncate(filled.max(0) as usize);

        if verbose() {
            eprintln!("[imctl] {} keyboard layout(s) installed", layouts.len());
        }

        Ok(layouts
            .into_iter()
            .filter(|layout| layout.locale() == locale)
            .collect())
    }

    fn activate(&self, source: &SystemInputSource) -> io::Result<()> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "failed to get foreground window",
            ));
        }

        unsafe {
            PostMessageW(
                hwnd,
                WM_INPUTLANGCHANGEREQUEST,
                WPARAM(0),
                LPARAM(source.0),
            )
        }
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("failed to post input language change request: {}", e),
            )
        })
    }
}
