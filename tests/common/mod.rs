pub mod mocks;

use std::rc::Rc;
use landing_site::{ Services, SiteConfig };
use mocks::{ RecordingAnalytics, RecordingNavigator };

#[allow(dead_code)]
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory services with the analytics hook and navigator recorded.
#[allow(dead_code)]
pub fn recording_services() -> (Services, Rc<RecordingAnalytics>, Rc<RecordingNavigator>) {
    setup();
    let analytics = Rc::new(RecordingAnalytics::default());
    let navigator = Rc::new(RecordingNavigator::default());
    let mut services = Services::in_memory(SiteConfig::default());
    services.analytics = Some(analytics.clone());
    services.navigator = navigator.clone();
    (services, analytics, navigator)
}
