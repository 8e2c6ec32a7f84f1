//! Shared helpers for staging application bundles on a real file system
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn appdetective_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("appdetective")
}

pub fn info_plist(executable: &str, category: Option<&str>) -> String {
    let category = category
        .map(|c| {
            format!(
                "    <key>LSApplicationCategoryType</key>\n    <string>{}</string>\n",
                c
            )
        })
        .unwrap_or_default();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleExecutable</key>
    <string>{}</string>
    <key>CFBundleIdentifier</key>
    <string>com.example.{}</string>
{}</dict>
</plist>
"#,
        executable,
        executable.to_lowercase(),
        category
    )
}

pub fn store_metadata(categories: &[&str]) -> String {
    let items: String = categories
        .iter()
        .map(|c| format!("        <string>{}</string>\n", c))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>categories</key>
    <array>
{}    </array>
</dict>
</plist>
"#,
        items
    )
}

/// A standard `Name.app/Contents/...` bundle under construction
pub struct BundleFixture {
    root: PathBuf,
}

impl BundleFixture {
    pub fn standard(dir: &Path, name: &str) -> Self {
        let root = dir.join(format!("{}.app", name));
        fs::create_dir_all(root.join("Contents/MacOS")).unwrap();
        fs::create_dir_all(root.join("Contents/Frameworks")).unwrap();
        fs::create_dir_all(root.join("Contents/Resources")).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn with_info_plist(self, executable: &str, category: Option<&str>) -> Self {
        fs::write(
            self.root.join("Contents/Info.plist"),
            info_plist(executable, category),
        )
        .unwrap();
        self
    }

    pub fn with_executable(self, name: &str) -> Self {
        fs::write(self.root.join("Contents/MacOS").join(name), b"\xcf\xfa\xed\xfe").unwrap();
        self
    }

    pub fn with_framework(self, name: &str) -> Self {
        fs::create_dir_all(self.root.join("Contents/Frameworks").join(name)).unwrap();
        self
    }

    pub fn with_resource(self, relative: &str) -> Self {
        let path = self.root.join("Contents/Resources").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
        self
    }

    pub fn with_resource_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.join("Contents/Resources").join(relative)).unwrap();
        self
    }
}

/// Stage `Name.app/Wrapper/Name.app` with a `WrappedBundle` symlink reached
/// through an intermediate `Current -> Wrapper` link. Returns the outer path.
#[cfg(unix)]
pub fn wrapped_bundle(dir: &Path, name: &str, frameworks: &[&str], categories: &[&str]) -> PathBuf {
    use std::os::unix::fs::symlink;

    let outer = dir.join(format!("{}.app", name));
    let wrapper = outer.join("Wrapper");
    let inner = wrapper.join(format!("{}.app", name));

    fs::create_dir_all(inner.join("Frameworks")).unwrap();
    fs::write(inner.join("Info.plist"), info_plist(name, None)).unwrap();
    fs::write(inner.join(name), b"\xcf\xfa\xed\xfe").unwrap();
    for framework in frameworks {
        fs::create_dir_all(inner.join("Frameworks").join(framework)).unwrap();
    }
    if !categories.is_empty() {
        fs::write(wrapper.join("iTunesMetadata.plist"), store_metadata(categories)).unwrap();
    }

    symlink("Wrapper", outer.join("Current")).unwrap();
    symlink(format!("Current/{}.app", name), outer.join("WrappedBundle")).unwrap();

    outer
}
