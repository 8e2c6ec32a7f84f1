crate::define_id_enum! {
    /// A UI or runtime technology an application bundle can be built with
    Technology (fallback = Unknown) {
        SwiftUi => "swiftui" : "SwiftUI" | "swift-ui",
        AppKit => "appkit" : "AppKit" | "cocoa",
        Catalyst => "catalyst" : "Mac Catalyst" | "mac-catalyst" | "uikit",
        Electron => "electron" : "Electron",
        Cef => "cef" : "Chromium Embedded Framework" | "chromium-embedded",
        NwJs => "nwjs" : "NW.js" | "node-webkit",
        Python => "python" : "Python",
        Qt => "qt" : "Qt",
        Flutter => "flutter" : "Flutter",
        ReactNative => "react-native" : "React Native" | "reactnative",
        Compose => "compose" : "Compose Multiplatform" | "compose-multiplatform",
        Xamarin => "xamarin" : "Xamarin / .NET MAUI" | "maui" | "dotnet-maui",
        Avalonia => "avalonia" : "Avalonia",
        Tauri => "tauri" : "Tauri",
        WxWidgets => "wxwidgets" : "wxWidgets" | "wx",
        Gtk => "gtk" : "GTK",
        Gpui => "gpui" : "GPUI",
        Egui => "egui" : "egui",
        Unknown => "unknown" : "Unknown",
    }
}
