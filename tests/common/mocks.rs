use std::cell::RefCell;
use landing_site::error::SiteError;
use landing_site::features::AnalyticsEvent;
use landing_site::platform::{ AnalyticsHook, KeyValueStore, Navigator };

#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingAnalytics {
    pub events: RefCell<Vec<AnalyticsEvent>>,
}

impl AnalyticsHook for RecordingAnalytics {
    fn track(&self, event: &AnalyticsEvent) -> Result<(), SiteError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), SiteError> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Behaves like storage in a private window with a full quota.
#[allow(dead_code)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SiteError> {
        Err(SiteError::Storage("SecurityError".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::Storage("QuotaExceededError".to_string()))
    }
}

#[allow(dead_code)]
pub struct FailingAnalytics;

impl AnalyticsHook for FailingAnalytics {
    fn track(&self, _event: &AnalyticsEvent) -> Result<(), SiteError> {
        Err(SiteError::Analytics("gtag threw".to_string()))
    }
}
