/// Mobile menu state. Above the breakpoint the menu is forced open on every
/// resize; below it, each resize collapses it and the toggle takes over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    expanded: bool,
    breakpoint_px: f64,
}

impl NavState {
    pub fn new(breakpoint_px: u32, initial_width: Option<f64>) -> Self {
        let mut state = Self {
            expanded: false,
            breakpoint_px: f64::from(breakpoint_px),
        };
        if let Some(width) = initial_width {
            state.on_resize(width);
        }
        state
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn on_resize(&mut self, width: f64) {
        self.expanded = width >= self.breakpoint_px;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    pub fn display(&self) -> &'static str {
        if self.expanded { "flex" } else { "none" }
    }
}
