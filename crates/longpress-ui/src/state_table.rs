/// Control states that carry their own appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlState {
    Normal,
    Disabled,
}

/// Per-state values resolved by ordered priority.
///
/// A disabled control uses the `Disabled` entry when one is set and otherwise
/// falls back to `Normal`. An enabled control only ever reads `Normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTable<T> {
    normal: Option<T>,
    disabled: Option<T>,
}

impl<T> Default for StateTable<T> {
    fn default() -> Self {
        Self {
            normal: None,
            disabled: None,
        }
    }
}

impl<T> StateTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the entry for `state`.
    pub fn set(&mut self, state: ControlState, value: Option<T>) {
        match state {
            ControlState::Normal => self.normal = value,
            ControlState::Disabled => self.disabled = value,
        }
    }

    pub fn get(&self, state: ControlState) -> Option<&T> {
        match state {
            ControlState::Normal => self.normal.as_ref(),
            ControlState::Disabled => self.disabled.as_ref(),
        }
    }

    pub fn resolve(&self, enabled: bool) -> Option<&T> {
        let order: &[ControlState] = if enabled {
            &[ControlState::Normal]
        } else {
            &[ControlState::Disabled, ControlState::Normal]
        };
        order.iter().find_map(|state| self.get(*state))
    }
}
