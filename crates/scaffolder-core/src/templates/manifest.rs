//! `package.json` rendering

use super::GeneratedFile;

pub const MANIFEST_FILE: &str = "package.json";

const BASE_MANIFEST: &str = r#"{
  "name": "fancy-motion-app",
  "version": "1.0.0",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "start": "vite preview"
  },
  "dependencies": {
    "react": "^18.0.0",
    "react-dom": "^18.0.0"
  },
  "devDependencies": {
    "vite": "^4.0.0"
  }
}"#;

/// Last runtime dependency line; framer-motion is appended after it
const RUNTIME_ANCHOR: &str = r#""react-dom": "^18.0.0""#;

const MOTION_INSERTION: &str = r#""react-dom": "^18.0.0",
    "framer-motion": "^10.0.0""#;

/// Last build-tool dependency line; the TypeScript toolchain follows it
const DEV_ANCHOR: &str = r#""vite": "^4.0.0""#;

const TYPESCRIPT_INSERTION: &str = r#""vite": "^4.0.0",
    "typescript": "^4.8.4",
    "@types/react": "^18.0.0",
    "@types/react-dom": "^18.0.0""#;

/// Render the manifest for the given toggles
pub fn package_json(use_typescript: bool, install_motion: bool) -> GeneratedFile {
    let mut content = BASE_MANIFEST.to_string();

    if install_motion {
        content = insert_at_anchor(&content, RUNTIME_ANCHOR, MOTION_INSERTION);
    }

    if use_typescript {
        content = insert_at_anchor(&content, DEV_ANCHOR, TYPESCRIPT_INSERTION);
    }

    GeneratedFile::new(MANIFEST_FILE, content)
}

fn insert_at_anchor(content: &str, anchor: &str, replacement: &str) -> String {
    debug_assert!(
        content.contains(anchor),
        "manifest anchor missing: {}",
        anchor
    );
    content.replacen(anchor, replacement, 1)
}
