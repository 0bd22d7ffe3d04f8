/// What a `pagehide` means for the running app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Entering the back/forward cache; the page comes back exactly as it was
    /// and `start` does not run again.
    Cached,
    /// The document is going away.
    Unloading,
}

impl PageHide {
    #[inline]
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unloading
        }
    }

    /// Only a real unload releases listeners and the frame loop.
    #[inline]
    pub fn tears_down(self) -> bool {
        matches!(self, PageHide::Unloading)
    }
}
