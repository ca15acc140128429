use crate::agent::DEFAULT_STEP_INTERVAL;

/// Settings a [Navigator](crate::Navigator) is created from. The grid size is
/// fixed for the lifetime of the navigator; the other settings can be changed
/// later on the navigator itself.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorConfig {
    pub width: usize,
    pub height: usize,
    pub allow_diagonal: bool,
    /// Seconds the agent spends on each cell.
    pub step_interval: f32,
}

impl Default for NavigatorConfig {
    fn default() -> NavigatorConfig {
        NavigatorConfig {
            width: 30,
            height: 30,
            allow_diagonal: false,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

impl NavigatorConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> NavigatorConfig {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_diagonal(mut self, allow_diagonal: bool) -> NavigatorConfig {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn with_step_interval(mut self, step_interval: f32) -> NavigatorConfig {
        self.step_interval = step_interval;
        self
    }
}
