//! Input and output formats for the component graph.
//!
//! - **ARXML** - the AUTOSAR source document (read only, runs extraction)
//! - **JSON** - the serialized graph document
//! - **YAML** - the same document in YAML syntax (`yaml` feature)
//!
//! ```text
//! ┌────────────┐   read    ┌────────────┐   write   ┌────────────┐
//! │ ARXML file │ ────────► │ ArxmlGraph │ ────────► │ JSON/YAML  │
//! └────────────┘           └────────────┘ ◄──────── └────────────┘
//!                                            read
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use arxml::format::{Json, GraphFormat, detect_format};
//!
//! let path = std::path::Path::new("system.arxml");
//! let format = detect_format(path).expect("known extension");
//! let graph = format.read(&std::fs::read(path)?)?;
//! let json = Json.write(&graph)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arxml;
#[allow(clippy::module_inception)]
mod format;
mod json;
#[cfg(feature = "yaml")]
mod yaml;

pub use arxml::Arxml;
pub use format::{FormatCapability, GraphFormat};
pub use json::Json;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// Supported file extensions.
pub fn supported_extensions() -> &'static [&'static str] {
    #[cfg(feature = "yaml")]
    {
        &["arxml", "json", "yaml", "yml"]
    }
    #[cfg(not(feature = "yaml"))]
    {
        &["arxml", "json"]
    }
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn GraphFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "arxml" => Some(Box::new(Arxml::default())),
        "json" => Some(Box::new(Json)),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => Some(Box::new(Yaml)),
        _ => None,
    }
}

/// Detect format from MIME type.
pub fn detect_format_from_mime(mime: &str) -> Option<Box<dyn GraphFormat>> {
    match mime {
        "application/xml" | "text/xml" | "application/autosar+xml" => {
            Some(Box::new(Arxml::default()))
        }
        "application/json" => Some(Box::new(Json)),
        #[cfg(feature = "yaml")]
        "application/x-yaml" | "text/yaml" => Some(Box::new(Yaml)),
        _ => None,
    }
}
