mod common;

use std::rc::Rc;
use landing_site::features::{ ClickModifiers, CtaClick, CtaOutcome, CtaTracker, CTA_EVENT };
use landing_site::platform::Services;
use landing_site::SiteConfig;
use common::mocks::FailingAnalytics;

fn click(is_link: bool, modifiers: ClickModifiers) -> CtaClick {
    CtaClick {
        label: "Start free trial".to_string(),
        location: "hero".to_string(),
        is_link,
        modifiers,
    }
}

#[test]
fn test_plain_link_click_reports_and_redirects() {
    let (services, analytics, navigator) = common::recording_services();
    let tracker = CtaTracker::from_services(&services);

    let outcome = tracker.handle(&click(true, ClickModifiers::default()));

    assert_eq!(outcome, CtaOutcome { prevent_default: true, redirected: true });
    assert_eq!(*navigator.visited.borrow(), vec![services.config.destination_url.clone()]);
    let events = analytics.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, CTA_EVENT);
    assert_eq!(events[0].event_category, "engagement");
    assert_eq!(events[0].event_label, "Start free trial");
    assert_eq!(events[0].location, "hero");
}

#[test]
fn test_modified_link_click_keeps_native_behavior() {
    let (services, analytics, navigator) = common::recording_services();
    let tracker = CtaTracker::from_services(&services);

    for modifiers in [
        ClickModifiers { meta: true, ..Default::default() },
        ClickModifiers { ctrl: true, ..Default::default() },
        ClickModifiers { middle_button: true, ..Default::default() },
    ] {
        let outcome = tracker.handle(&click(true, modifiers));
        assert!(!outcome.prevent_default);
        assert!(!outcome.redirected);
    }

    assert!(navigator.visited.borrow().is_empty());
    assert_eq!(analytics.events.borrow().len(), 3);
}

#[test]
fn test_button_never_prevents_default_but_always_redirects() {
    let (services, _, navigator) = common::recording_services();
    let tracker = CtaTracker::from_services(&services);

    let outcome = tracker.handle(&click(false, ClickModifiers { ctrl: true, ..Default::default() }));

    assert_eq!(outcome, CtaOutcome { prevent_default: false, redirected: true });
    assert_eq!(navigator.visited.borrow().len(), 1);
}

#[test]
fn test_missing_or_broken_analytics_still_redirects() {
    let (mut services, _, navigator) = common::recording_services();
    services.analytics = None;
    assert!(CtaTracker::from_services(&services).handle(&click(true, ClickModifiers::default())).redirected);

    services.analytics = Some(Rc::new(FailingAnalytics));
    assert!(CtaTracker::from_services(&services).handle(&click(true, ClickModifiers::default())).redirected);
    assert_eq!(navigator.visited.borrow().len(), 2);
}

#[test]
fn test_destination_href_follows_config() {
    let config = SiteConfig::from_json(r#"{"destination_url": "https://example.org/join"}"#).unwrap();
    let tracker = CtaTracker::from_services(&Services::in_memory(config));
    assert_eq!(tracker.destination_href(), "https://example.org/join");
}

#[test]
fn test_destination_anchor_is_noopener() {
    let (services, _, _) = common::recording_services();
    let anchor = CtaTracker::from_services(&services).destination_anchor();
    assert_eq!(anchor.href, services.config.destination_url);
    assert_eq!(anchor.rel, "noopener");
}
