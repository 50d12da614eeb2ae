//! Reasons the particle background can fail to start.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that can occur while mounting the background canvas.
#[derive(Debug)]
pub enum MountError {
    /// Not running in a browser window.
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// The document has no `<body>` to attach the canvas to.
    NoBody,
    /// The canvas refused to hand out a 2D drawing context.
    NoContext,
    /// A DOM call threw.
    Js(JsValue),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoWindow => write!(f, "no global window"),
            MountError::NoDocument => write!(f, "window has no document"),
            MountError::NoBody => write!(f, "document has no body"),
            MountError::NoContext => write!(f, "2D canvas context unavailable"),
            MountError::Js(e) => write!(f, "DOM call failed: {:?}", e),
        }
    }
}

impl std::error::Error for MountError {}

impl From<JsValue> for MountError {
    fn from(e: JsValue) -> Self {
        MountError::Js(e)
    }
}
