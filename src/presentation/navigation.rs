//! Screen back-stack.

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{NavigationPort, ScreenId};

/// Push/pop stack of screens. The root screen is never popped.
#[derive(Debug)]
pub struct Navigator {
    stack: Mutex<Vec<ScreenId>>,
}

impl Navigator {
    #[must_use]
    pub fn new(root: ScreenId) -> Self {
        Self {
            stack: Mutex::new(vec![root]),
        }
    }

    /// Returns the screen on top of the stack.
    #[must_use]
    pub fn current(&self) -> ScreenId {
        self.stack.lock().last().copied().unwrap_or_default()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ScreenId::ContactList)
    }
}

impl NavigationPort for Navigator {
    fn navigate_to(&self, screen: ScreenId) {
        let mut stack = self.stack.lock();
        if stack.last() == Some(&screen) {
            return;
        }
        debug!(to = %screen, "Navigating");
        stack.push(screen);
    }

    fn go_back(&self) {
        let mut stack = self.stack.lock();
        if stack.len() > 1 {
            let from = stack.pop();
            debug!(from = ?from, to = ?stack.last(), "Navigating back");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let navigator = Navigator::default();
        assert_eq!(navigator.current(), ScreenId::ContactList);
    }

    #[test]
    fn test_push_and_pop() {
        let navigator = Navigator::default();

        navigator.navigate_to(ScreenId::AddContact);
        assert_eq!(navigator.current(), ScreenId::AddContact);

        navigator.go_back();
        assert_eq!(navigator.current(), ScreenId::ContactList);
    }

    #[test]
    fn test_root_is_never_popped() {
        let navigator = Navigator::default();
        navigator.go_back();
        navigator.go_back();
        assert_eq!(navigator.current(), ScreenId::ContactList);

        navigator.navigate_to(ScreenId::AddContact);
        navigator.go_back();
        assert_eq!(navigator.current(), ScreenId::ContactList);
    }

    #[test]
    fn test_navigating_to_current_screen_is_noop() {
        let navigator = Navigator::default();
        navigator.navigate_to(ScreenId::AddContact);
        navigator.navigate_to(ScreenId::AddContact);

        navigator.go_back();
        assert_eq!(navigator.current(), ScreenId::ContactList);
    }
}
