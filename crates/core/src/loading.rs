//! Scoped loading flag
//!
//! Forms disable their submit control while a request is in flight. The
//! guard raises the flag on acquisition and lowers it on drop, so every exit
//! path of a submission (success, error, early return) restores it.

pub struct LoadingGuard<F: Fn(bool)> {
    set_loading: F,
}

impl<F: Fn(bool)> LoadingGuard<F> {
    pub fn acquire(set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: Fn(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}
