//! Host adapter over the shared AppKit application object.

use objc::{class, msg_send, sel, sel_impl};

use crate::failure::TestFailure;
use crate::host::TestLifecycleHost;
use crate::ns;
use crate::obs;

/// Desktop-family application host.
///
/// Forwards the three lifecycle notifications to the shared application
/// object. This family exposes no active-test query, so the adapter
/// implements [`TestLifecycleHost`] only. Holds a raw object pointer,
/// so it is main-thread only, per platform convention.
pub struct AppKitHost {
    app: ns::Id,
}

impl AppKitHost {
    /// Adapter over the shared application, or `None` before the
    /// application object exists.
    pub fn shared() -> Option<Self> {
        let app: ns::Id = unsafe { msg_send![class!(NSApplication), sharedApplication] };
        if app.is_null() {
            None
        } else {
            Some(Self { app })
        }
    }
}

impl TestLifecycleHost for AppKitHost {
    fn started_test(&self, name: Option<&str>) {
        obs::emit_test_started(name);
        let name = ns::nsstring_or_nil(name);
        unsafe {
            let _: () = msg_send![self.app, startedTest: name];
        }
    }

    fn finished_test(&self, name: Option<&str>) {
        obs::emit_test_finished(name);
        let name = ns::nsstring_or_nil(name);
        unsafe {
            let _: () = msg_send![self.app, finishedTest: name];
        }
    }

    fn failed_test(&self, name: Option<&str>, failure: Option<TestFailure>) {
        obs::emit_test_failed(name, failure.as_ref());
        let name = ns::nsstring_or_nil(name);
        let error = failure.as_ref().map_or(std::ptr::null_mut(), ns::nserror);
        unsafe {
            let _: () = msg_send![self.app, failedTest: name withFailure: error];
        }
    }
}
