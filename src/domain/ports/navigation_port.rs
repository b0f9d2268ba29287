use crate::domain::ScreenId;

/// Port for moving between screens.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationPort: Send + Sync {
    /// Opens the given screen on top of the current one.
    fn navigate_to(&self, screen: ScreenId);

    /// Returns to the previous screen.
    fn go_back(&self);
}
