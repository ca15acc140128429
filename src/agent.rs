use crate::{Coord, Route};

/// Seconds an [Agent] spends on each cell by default.
pub const DEFAULT_STEP_INTERVAL: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// No route assigned.
    Idle,
    /// Walking; the current cell is not the last one of the route.
    Following,
    /// Standing on the last cell of the route.
    Arrived,
}

/// Walks along a [Route] one cell per step interval.
///
/// Time is fed in through [update](Agent::update). Several cells may be
/// passed in a single update if the elapsed time spans multiple intervals,
/// and time left over after the last full interval carries into the next
/// update.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    route: Route,
    index: usize,
    timer: f32,
    step_interval: f32,
}

impl Default for Agent {
    fn default() -> Agent {
        Agent::new(DEFAULT_STEP_INTERVAL)
    }
}

impl Agent {
    pub fn new(step_interval: f32) -> Agent {
        Agent {
            route: Route::new(),
            index: 0,
            timer: 0.0,
            step_interval,
        }
    }

    pub fn step_interval(&self) -> f32 {
        self.step_interval
    }

    /// A non-positive interval moves the agent to the end of its route on the
    /// next update.
    pub fn set_step_interval(&mut self, seconds: f32) {
        self.step_interval = seconds;
    }

    /// Starts following `route` from its first cell. An empty route leaves
    /// the agent idle.
    pub fn set_path(&mut self, route: Route) {
        self.route = route;
        self.index = 0;
        self.timer = 0.0;
    }

    pub fn update(&mut self, delta_time: f32) {
        if self.has_reached_destination() || delta_time.is_nan() || delta_time <= 0.0 {
            return;
        }
        self.timer += delta_time;
        let last = self.route.len() - 1;
        while self.timer >= self.step_interval && self.index < last {
            self.timer -= self.step_interval;
            self.index += 1;
        }
    }

    /// The cell the agent currently occupies.
    pub fn position(&self) -> Option<Coord> {
        self.route.get(self.index).copied()
    }

    /// True when idle or standing on the last cell.
    pub fn has_reached_destination(&self) -> bool {
        self.index + 1 >= self.route.len()
    }

    pub fn has_path(&self) -> bool {
        !self.route.is_empty()
    }

    pub fn state(&self) -> AgentState {
        if self.route.is_empty() {
            AgentState::Idle
        } else if self.has_reached_destination() {
            AgentState::Arrived
        } else {
            AgentState::Following
        }
    }

    pub fn route(&self) -> &[Coord] {
        &self.route
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Time accumulated towards the next step.
    pub fn elapsed(&self) -> f32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.route.clear();
        self.index = 0;
        self.timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Route {
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    }

    #[test]
    fn idle_agent_ignores_updates() {
        let mut agent = Agent::default();
        assert_eq!(agent.state(), AgentState::Idle);
        agent.update(5.0);
        assert_eq!(agent, Agent::default());
        assert_eq!(agent.position(), None);
        assert!(agent.has_reached_destination());

        agent.set_path(abc());
        agent.reset();
        agent.update(5.0);
        assert_eq!(agent.state(), AgentState::Idle);
        assert_eq!(agent.position(), None);
        assert_eq!(agent.elapsed(), 0.0);
    }

    /// Several steps are taken in one update and the remainder is kept.
    #[test]
    fn catch_up() {
        let mut agent = Agent::new(1.0);
        agent.set_path(abc());
        assert_eq!(agent.state(), AgentState::Following);
        agent.update(2.5);
        assert_eq!(agent.index(), 2);
        assert_eq!(agent.position(), Some(Coord::new(2, 0)));
        assert_eq!(agent.elapsed(), 0.5);
        assert!(agent.has_reached_destination());
        assert_eq!(agent.state(), AgentState::Arrived);

        // Arrived agents no longer accumulate time
        agent.update(1.0);
        assert_eq!(agent.elapsed(), 0.5);
    }

    #[test]
    fn remainder_carries_over() {
        let mut agent = Agent::new(1.0);
        agent.set_path(abc());
        agent.update(0.75);
        assert_eq!(agent.index(), 0);
        agent.update(0.5);
        assert_eq!(agent.index(), 1);
        assert_eq!(agent.elapsed(), 0.25);
        agent.update(-3.0);
        assert_eq!(agent.index(), 1);
        assert_eq!(agent.elapsed(), 0.25);
    }

    #[test]
    fn single_cell_route_arrives_immediately() {
        let mut agent = Agent::default();
        agent.set_path(vec![Coord::new(4, 2)]);
        assert_eq!(agent.state(), AgentState::Arrived);
        assert_eq!(agent.position(), Some(Coord::new(4, 2)));
    }

    #[test]
    fn set_path_restarts() {
        let mut agent = Agent::new(1.0);
        agent.set_path(abc());
        agent.update(1.5);
        agent.set_path(abc().into_iter().rev().collect());
        assert_eq!(agent.index(), 0);
        assert_eq!(agent.elapsed(), 0.0);
        assert_eq!(agent.position(), Some(Coord::new(2, 0)));
        assert!(agent.has_path());
        assert_eq!(agent.route().first(), Some(&Coord::new(2, 0)));

        agent.set_path(Route::new());
        assert_eq!(agent.state(), AgentState::Idle);
        assert!(!agent.has_path());
        assert!(agent.route().is_empty());
    }

    #[test]
    fn default_interval() {
        let mut agent = Agent::default();
        assert_eq!(agent.step_interval(), DEFAULT_STEP_INTERVAL);
        agent.set_path(abc());
        agent.update(0.05);
        assert_eq!(agent.index(), 0);
        agent.set_step_interval(0.01);
        agent.update(0.0);
        assert_eq!(agent.index(), 0);
        agent.update(1.0);
        assert_eq!(agent.index(), 2);
    }
}
