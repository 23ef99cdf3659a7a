/// Load lifecycle for data fetched from the directory service. A pane
/// holds exactly one of these at a time, so the render branch for a
/// given frame is unambiguous: Loading wins, then Error, then Loaded.
/// Idle is the parked state before any fetch has been asked for.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    #[allow(dead_code)] // Might be used when loads move to background tasks
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_idle() {
        let state: LoadState<Vec<i64>> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
        assert!(!state.is_loading());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn loaded_exposes_inner_value() {
        let state = LoadState::Loaded(vec![1, 2, 3]);
        assert_eq!(state.loaded(), Some(&vec![1, 2, 3]));
    }
}
