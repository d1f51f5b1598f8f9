//! Host adapter over the shared UIKit application object.

use objc::{class, msg_send, sel, sel_impl};

use crate::failure::TestFailure;
use crate::host::{TestLifecycleHost, TestNameQuery};
use crate::ns;
use crate::obs;

/// Mobile-family application host.
///
/// Wraps the shared application object and forwards each notification
/// to it; the application keeps whatever state the notifications
/// update. Holds a raw object pointer, so the adapter is neither `Send`
/// nor `Sync`. Use it from the main thread, per platform convention.
pub struct UiKitHost {
    app: ns::Id,
}

impl UiKitHost {
    /// Adapter over the shared application, or `None` before the
    /// application object exists.
    pub fn shared() -> Option<Self> {
        let app: ns::Id = unsafe { msg_send![class!(UIApplication), sharedApplication] };
        if app.is_null() {
            None
        } else {
            Some(Self { app })
        }
    }
}

impl TestLifecycleHost for UiKitHost {
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

impl TestNameQuery for UiKitHost {
    fn current_test_name(&self) -> Option<String> {
        // Launch-test query the application exposes on this family only.
        let name: ns::Id = unsafe { msg_send![self.app, _launchTestName] };
        ns::string_from_nsstring(name)
    }
}
