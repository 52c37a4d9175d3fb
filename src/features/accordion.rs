pub const ICON_CLOSED: &str = "+";
pub const ICON_OPEN: &str = "−";

/// Attributes a panel's button and body render from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub open: bool,
    pub aria_expanded: &'static str,
    pub icon: &'static str,
}

impl From<bool> for PanelView {
    fn from(open: bool) -> Self {
        Self {
            open,
            aria_expanded: if open { "true" } else { "false" },
            icon: if open { ICON_OPEN } else { ICON_CLOSED },
        }
    }
}

/// Independent open/closed flags, one per panel. Opening one panel never
/// closes another.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Accordion {
    panels: Vec<bool>,
}

impl Accordion {
    pub fn new(count: usize) -> Self {
        Self { panels: vec![false; count] }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn view(&self, index: usize) -> Option<PanelView> {
        self.panels.get(index).copied().map(PanelView::from)
    }

    pub fn toggle(&mut self, index: usize) -> Option<PanelView> {
        let open = self.panels.get_mut(index)?;
        *open = !*open;
        Some(PanelView::from(*open))
    }
}
