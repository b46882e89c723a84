//! Startup errors
//!
//! The simulation itself cannot fail; everything here is about the
//! environment (DOM, WebGPU) being unavailable when the game boots.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("No browser window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Missing page element #{0}")]
    MissingElement(&'static str),
    #[error("Element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("Could not create a rendering surface")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("No compatible graphics adapter found")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("Could not initialize the graphics device")]
    Device(#[from] wgpu::RequestDeviceError),
}

impl StartupError {
    /// Message shown to the player when the game cannot start
    pub fn user_message(&self) -> String {
        format!("Error: Could not initialize the game graphics. ({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_names_element() {
        let err = StartupError::MissingElement("gameCanvas");
        let msg = err.user_message();
        assert!(msg.starts_with("Error: Could not initialize the game graphics."));
        assert!(msg.contains("#gameCanvas"));
    }
}
