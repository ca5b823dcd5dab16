// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed (no display, no video driver, ...).
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the framebuffer to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// A circle needs a strictly positive radius to have a sprite at all.
    #[error("Invalid circle radius: {0} (must be > 0)")]
    InvalidRadius(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_stage() {
        let e = Error::WindowInit("no display".into());
        assert_eq!(e.to_string(), "Window init error: no display");
        assert_eq!(
            Error::InvalidRadius(0).to_string(),
            "Invalid circle radius: 0 (must be > 0)"
        );
    }
}
