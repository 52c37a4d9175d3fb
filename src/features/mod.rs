pub mod analytics;
pub mod theme;
pub mod navigation;
pub mod cta;
pub mod accordion;
pub mod popup;
pub mod contact_form;

// Re-export commonly used items
pub use analytics::{ AnalyticsEvent, CTA_EVENT };
pub use theme::ThemeController;
pub use navigation::NavState;
pub use cta::{ ClickModifiers, CtaClick, CtaOutcome, CtaTracker, DestinationAnchor };
pub use accordion::{ Accordion, PanelView };
pub use popup::{ CloseAction, PopupReason, PopupScheduler, PopupTrigger };
pub use contact_form::{ ContactForm, FieldError, FormStatus, StatusKind };
