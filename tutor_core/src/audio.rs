//! Audio rendering collaborator.
//!
//! Speech synthesis lives outside the tutor; it is reached only through
//! [`AudioRenderer`], which turns text into encoded audio bytes.

use crate::error::RenderError;

/// Turns text into audio bytes (e.g. a WAV file).
pub trait AudioRenderer {
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError>;
}

impl<F> AudioRenderer for F
where
    F: Fn(&str) -> Result<Vec<u8>, RenderError>,
{
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError> {
        self(text)
    }
}
