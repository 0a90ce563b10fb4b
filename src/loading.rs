//! Startup gate
//!
//! Tracks outstanding startup work. The scene only starts animating once every
//! piece of work has finished, and a single failure turns the whole load into
//! an error that stays until restart.

/// Overall startup state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Startup failed; the string is the underlying cause, for the log
    Failed(String),
}

#[derive(Debug)]
pub struct LoadingManager {
    pending: usize,
    state: LoadState,
}

impl Default for LoadingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingManager {
    pub fn new() -> Self {
        Self {
            pending: 0,
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Registers one more piece of outstanding work
    pub fn begin(&mut self, what: &str) {
        if !self.is_loading() {
            log::warn!("Ignoring late load of {what}");
            return;
        }
        self.pending += 1;
        log::debug!("Loading {what} ({} pending)", self.pending);
    }

    /// Marks one piece of work as done; the last one makes the load ready
    pub fn finish(&mut self, what: &str) {
        if !self.is_loading() {
            return;
        }
        self.pending = self.pending.saturating_sub(1);
        log::debug!("Loaded {what} ({} pending)", self.pending);
        self.finish_if_idle();
    }

    /// Becomes ready if nothing is outstanding
    pub fn finish_if_idle(&mut self) {
        if self.is_loading() && self.pending == 0 {
            log::info!("Scene ready");
            self.state = LoadState::Ready;
        }
    }

    /// Fails the whole load
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("Error loading assets: {reason}");
        self.pending = 0;
        self.state = LoadState::Failed(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let loading = LoadingManager::new();
        assert!(loading.is_loading());
        assert_eq!(loading.pending(), 0);
    }

    #[test]
    fn test_ready_after_last_finish() {
        let mut loading = LoadingManager::new();
        loading.begin("gpu");
        loading.begin("fonts");
        loading.finish("gpu");
        assert!(loading.is_loading());
        loading.finish("fonts");
        assert!(loading.is_ready());
    }

    #[test]
    fn test_idle_manager_finishes_immediately() {
        let mut loading = LoadingManager::new();
        loading.finish_if_idle();
        assert_eq!(loading.state(), &LoadState::Ready);
    }

    #[test]
    fn test_failure_is_sticky() {
        let mut loading = LoadingManager::new();
        loading.begin("gpu");
        loading.fail("no adapter");
        loading.finish("gpu");
        loading.finish_if_idle();
        assert_eq!(loading.state(), &LoadState::Failed("no adapter".to_string()));

        loading.begin("retry");
        assert_eq!(loading.pending(), 0);
    }
}
