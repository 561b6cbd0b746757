//! Platform-neutral input source control.
//!
//! The controller talks to the OS text input layer through
//! [`TextInputService`], so the switching logic can be exercised against a
//! fake implementation without touching real OS state.

use std::io;

/// Capability surface of the OS text-input-services layer.
///
/// One implementation per platform lives in [`crate::platform`].
pub trait TextInputService {
    /// OS-managed handle for one installed input source.
    type Source;

    /// Identifier of the currently active input source.
    fn current_id(&self) -> io::Result<String>;

    /// All installed input sources whose identifier equals `id` exactly,
    /// in OS enumeration order.
    fn sources_matching(&self, id: &str) -> io::Result<Vec<Self::Source>>;

    /// Make `source` the active input source.
    fn activate(&self, source: &Self::Source) -> io::Result<()>;
}

/// Identifier of the currently active input source, exactly as the OS
/// reports it.
pub fn get_input_source<S: TextInputService>(service: &S) -> io::Result<String> {
    service.current_id()
}

/// Switch the active input source to `id`.
///
/// Setting the already-active identifier is a no-op that reports success.
/// Returns `Ok(false)` when no installed input source carries the
/// identifier; OS state is left untouched in that case. When several
/// sources share the identifier, the first one in enumeration order wins.
pub fn set_input_source<S: TextInputService>(service: &S, id: &str) -> io::Result<bool> {
    if service.current_id()? == id {
        return Ok(true);
    }

    let matches = service.sources_matching(id)?;
    let Some(source) = matches.first() else {
        return Ok(false);
    };

    service.activate(source)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory stand-in for the OS input source table.
    struct FakeService {
        current: RefCell<String>,
        installed: Vec<String>,
        lookups: Cell<usize>,
        activated: Cell<Option<usize>>,
    }

    impl FakeService {
        fn new(current: &str, installed: &[&str]) -> Self {
            FakeService {
                current: RefCell::new(current.to_string()),
                installed: installed.iter().map(|s| s.to_string()).collect(),
                lookups: Cell::new(0),
                activated: Cell::new(None),
            }
        }
    }

    impl TextInputService for FakeService {
        // Index into `installed`.
        type Source = usize;

        fn current_id(&self) -> io::Result<String> {
            Ok(self.current.borrow().clone())
        }

        fn sources_matching(&self, id: &str) -> io::Result<Vec<usize>> {
            self.lookups.set(self.lookups.get() + 1);
            Ok(self
                .installed
                .iter()
                .enumerate()
                .filter(|(_, installed)| installed.as_str() == id)
                .map(|(index, _)| index)
                .collect())
        }

        fn activate(&self, source: &usize) -> io::Result<()> {
            self.activated.set(Some(*source));
            *self.current.borrow_mut() = self.installed[*source].clone();
            Ok(())
        }
    }

    #[test]
    fn get_reports_the_os_identifier_verbatim() {
        let service = FakeService::new("com.apple.keylayout.US", &["com.apple.keylayout.US"]);
        assert_eq!(get_input_source(&service).unwrap(), "com.apple.keylayout.US");
    }

    #[test]
    fn setting_the_current_source_is_a_no_op() {
        let service = FakeService::new("com.apple.keylayout.US", &["com.apple.keylayout.US"]);

        assert!(set_input_source(&service, "com.apple.keylayout.US").unwrap());
        assert_eq!(service.lookups.get(), 0);
        assert_eq!(service.activated.get(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let service = FakeService::new(
            "com.apple.keylayout.US",
            &["com.apple.keylayout.US", "com.apple.keylayout.German"],
        );

        assert!(set_input_source(&service, "com.apple.keylayout.German").unwrap());
        assert_eq!(
            get_input_source(&service).unwrap(),
            "com.apple.keylayout.German"
        );
    }

    #[test]
    fn unknown_identifier_fails_and_leaves_state_unchanged() {
        let service = FakeService::new("com.apple.keylayout.US", &["com.apple.keylayout.US"]);

        assert!(!set_input_source(&service, "does-not-exist-xyz").unwrap());
        assert_eq!(get_input_source(&service).unwrap(), "com.apple.keylayout.US");
        assert_eq!(service.activated.get(), None);
    }

    #[test]
    fn first_match_wins_when_identifiers_collide() {
        let service = FakeService::new(
            "com.apple.keylayout.US",
            &["com.apple.keylayout.ABC", "com.apple.keylayout.ABC"],
        );

        assert!(set_input_source(&service, "com.apple.keylayout.ABC").unwrap());
        assert_eq!(service.activated.get(), Some(0));
    }

    #[test]
    fn backend_errors_are_not_conflated_with_lookup_failure() {
        struct BrokenService;

        impl TextInputService for BrokenService {
            type Source = ();

            fn current_id(&self) -> io::Result<String> {
                Err(io::Error::new(io::ErrorKind::Unsupported, "no backend"))
            }

            fn sources_matching(&self, _id: &str) -> io::Result<Vec<()>> {
                Err(io::Error::new(io::ErrorKind::Unsupported, "no backend"))
            }

            fn activate(&self, _source: &()) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::Unsupported, "no backend"))
            }
        }

        assert!(get_input_source(&BrokenService).is_err());
        assert!(set_input_source(&BrokenService, "anything").is_err());
    }
}
