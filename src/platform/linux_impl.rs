use std::io;

use crate::controller::TextInputService;

/// No direct input source API exists here; no handle can ever be produced.
pub enum SystemInputSource {}

#[derive(Default)]
pub struct SystemInputService;

impl SystemInputService {
    pub fn new() -> Self {
        SystemInputService
    }
}

fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "direct input source control is not supported on Linux.\n\
         Use a system-specific tool instead:\n\
         - ibus: ibus engine <engine-name>\n\
         - fcitx5: fcitx5-remote -s <input-method>\n\
         - xkb-switch: xkb-switch -s <layout>",
    )
}

impl TextInputService for SystemInputService {
    type Source = SystemInputSource;

    fn current_id(&self) -> io::Result<String> {
        Err(unsupported())
    }

    fn sources_matching(&self, _id: &str) -> io::Result<Vec<SystemInputSource>> {
        Err(unsupported())
    }

    fn activate(&self, _source: &SystemInputSource) -> io::Result<()> {
        Err(unsupported())
    }
}
