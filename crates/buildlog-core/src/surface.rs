//! Surface qualification.
//!
//! A "surface" is a host display area (an editor view, an output channel)
//! whose text is a candidate for classification. The host decides when to
//! classify; this module only answers whether a surface looks like build
//! output at all.

use serde::{Deserialize, Serialize};

/// Identifying attributes of a host display surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceInfo {
    /// The surface's identifying name (URI, file path, or channel id).
    pub name: String,
    /// Optional human-visible title, when distinct from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The origin scheme (`file`, `output`, ...), if the host has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// The host's content-type / language id for the surface, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl SurfaceInfo {
    /// A surface identified only by name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Whether this surface qualifies as build output worth classifying.
    ///
    /// A surface qualifies if it originates from an `output`-style channel,
    /// its name or title contains a `CMake`/`cmake`/`Build` substring, or its
    /// content type is the generic `log` type.
    pub fn is_build_output(&self) -> bool {
        if self.scheme.as_deref() == Some("output") {
            return true;
        }
        if self.content_type.as_deref() == Some("log") {
            return true;
        }

        let title = self.title.as_deref().unwrap_or("");
        self.name.contains("CMake")
            || self.name.contains("cmake")
            || title.contains("CMake")
            || title.contains("Build")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_scheme_qualifies() {
        let surface = SurfaceInfo {
            scheme: Some("output".to_string()),
            ..SurfaceInfo::named("extension-output-1234")
        };
        assert!(surface.is_build_output());
    }

    #[test]
    fn test_name_substrings_qualify() {
        assert!(SurfaceInfo::named("output:CMake/Build").is_build_output());
        assert!(SurfaceInfo::named("/tmp/cmake-out.txt").is_build_output());
        assert!(!SurfaceInfo::named("/tmp/notes.txt").is_build_output());
    }

    #[test]
    fn test_title_substrings_qualify() {
        let surface = SurfaceInfo {
            title: Some("Build Output".to_string()),
            ..SurfaceInfo::named("channel-7")
        };
        assert!(surface.is_build_output());

        // "Build" in the title qualifies; a lowercase "build" does not.
        let lowercase = SurfaceInfo {
            title: Some("build log".to_string()),
            ..SurfaceInfo::named("channel-7")
        };
        assert!(!lowercase.is_build_output());
    }

    #[test]
    fn test_log_content_type_qualifies() {
        let surface = SurfaceInfo {
            content_type: Some("log".to_string()),
            ..SurfaceInfo::named("anything")
        };
        assert!(surface.is_build_output());
    }
}
