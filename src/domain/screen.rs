/// Navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    ContactList,
    AddContact,
}

impl ScreenId {
    /// Route name of the destination.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::ContactList => "contactList",
            Self::AddContact => "addContact",
        }
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}
