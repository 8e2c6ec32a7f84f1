//! Detection rule tables.
//!
//! Constant data only: every detection reads these tables and none writes them,
//! so concurrent detections share them without locking.

use super::Technology;

/// Symlink under the bundle root marking an iOS app wrapped for macOS
pub const WRAPPED_BUNDLE_MARKER: &str = "WrappedBundle";

/// Metadata file next to a wrapped bundle, holding its store categories
pub const WRAPPED_METADATA_FILE: &str = "iTunesMetadata.plist";

/// React Native bundles shipped in the resource directory
pub const JS_BUNDLE_FILES: &[&str] = &["main.jsbundle", "index.jsbundle"];
pub const JS_BUNDLE_EXTENSION: &str = "jsbundle";

/// Compiled Interface Builder output
pub const COMPILED_INTERFACE_EXTENSIONS: &[&str] = &["nib", "storyboardc"];

/// AppKit is dropped once more tags than this have been detected
pub const LEGACY_UI_CARDINALITY_LIMIT: usize = 2;

/// How a bundled library directory name is matched
#[derive(Debug, Clone, Copy)]
pub enum NamePattern {
    /// Whole name, case-sensitive
    Exact(&'static str),
    /// Substring, case-sensitive
    Contains(&'static str),
    /// Name starts with the first part and ends with the second
    PrefixSuffix(&'static str, &'static str),
    /// Lowercased name contains the first part and the name ends with the second
    ContainsIgnoreCaseWithSuffix(&'static str, &'static str),
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        match *self {
            NamePattern::Exact(expected) => name == expected,
            NamePattern::Contains(marker) => name.contains(marker),
            NamePattern::PrefixSuffix(prefix, suffix) => {
                name.starts_with(prefix) && name.ends_with(suffix)
            }
            NamePattern::ContainsIgnoreCaseWithSuffix(marker, suffix) => {
                name.to_lowercase().contains(marker) && name.ends_with(suffix)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameRule {
    pub pattern: NamePattern,
    pub technology: Technology,
}

/// Substring rule over tool output; any marker is enough
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule {
    pub markers: &'static [&'static str],
    pub technology: Technology,
}

impl MarkerRule {
    pub fn matches(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| text.contains(marker))
    }
}

const fn name_rule(pattern: NamePattern, technology: Technology) -> NameRule {
    NameRule {
        pattern,
        technology,
    }
}

const fn marker_rule(markers: &'static [&'static str], technology: Technology) -> MarkerRule {
    MarkerRule {
        markers,
        technology,
    }
}

/// Rules for entries of `Contents/Frameworks`
pub const FRAMEWORK_DIRECTORY_RULES: &[NameRule] = &[
    name_rule(
        NamePattern::Exact("Electron Framework.framework"),
        Technology::Electron,
    ),
    name_rule(
        NamePattern::Exact("Chromium Embedded Framework.framework"),
        Technology::Cef,
    ),
    name_rule(
        NamePattern::Exact("nwjs Framework.framework"),
        Technology::NwJs,
    ),
    name_rule(
        NamePattern::Exact("hermes.framework"),
        Technology::ReactNative,
    ),
    name_rule(NamePattern::Contains("Flutter"), Technology::Flutter),
    name_rule(
        NamePattern::PrefixSuffix("Qt", ".framework"),
        Technology::Qt,
    ),
    name_rule(NamePattern::Exact("Python.framework"), Technology::Python),
    name_rule(
        NamePattern::ContainsIgnoreCaseWithSuffix("python", ".framework"),
        Technology::Python,
    ),
    name_rule(NamePattern::Contains("Xamarin"), Technology::Xamarin),
    name_rule(NamePattern::Contains("Mono.framework"), Technology::Xamarin),
    name_rule(NamePattern::Contains("Avalonia"), Technology::Avalonia),
    name_rule(NamePattern::Contains("skiko"), Technology::Compose),
];

/// Rules for `otool -L` output. Every matching rule contributes.
pub const LINKED_LIBRARY_RULES: &[MarkerRule] = &[
    marker_rule(
        &["/System/Library/Frameworks/SwiftUI.framework"],
        Technology::SwiftUi,
    ),
    // Catalyst links UIKit from the iOSSupport tree, never the plain system path
    marker_rule(
        &["/System/iOSSupport/System/Library/Frameworks/UIKit.framework"],
        Technology::Catalyst,
    ),
    marker_rule(
        &["/System/Library/Frameworks/AppKit.framework"],
        Technology::AppKit,
    ),
    marker_rule(
        &["Electron Framework", "libchromiumcontent", "libnode.dylib"],
        Technology::Electron,
    ),
    marker_rule(
        &["Chromium Embedded Framework", "libcef"],
        Technology::Cef,
    ),
    marker_rule(&["nwjs Framework"], Technology::NwJs),
    marker_rule(&["Python.framework", "libpython"], Technology::Python),
    marker_rule(
        &["QtCore", "QtWidgets", "libQt5", "libQt6"],
        Technology::Qt,
    ),
    marker_rule(
        &["libmonosgen", "libcoreclr", "Xamarin.Mac"],
        Technology::Xamarin,
    ),
    marker_rule(&["libAvaloniaNative"], Technology::Avalonia),
    marker_rule(&["FlutterMacOS.framework"], Technology::Flutter),
    marker_rule(
        &["React.framework", "hermes.framework"],
        Technology::ReactNative,
    ),
    marker_rule(&["libgtk-", "libgdk-"], Technology::Gtk),
    marker_rule(&["libskiko"], Technology::Compose),
    marker_rule(&["libwx_"], Technology::WxWidgets),
];

/// Last-resort rules over printable strings, in priority order. First match wins.
pub const STRING_TABLE_RULES: &[MarkerRule] = &[
    marker_rule(&["Avalonia."], Technology::Avalonia),
    marker_rule(&["__TAURI__"], Technology::Tauri),
    marker_rule(&["wxEntry"], Technology::WxWidgets),
    marker_rule(&["gpui::"], Technology::Gpui),
    marker_rule(&["egui::"], Technology::Egui),
];
