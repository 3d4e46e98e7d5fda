//! Compiler configuration and README rendering

use super::GeneratedFile;

pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const README_FILE: &str = "README.md";

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ESNext",
    "useDefineForClassFields": true,
    "module": "ESNext",
    "moduleResolution": "Node",
    "strict": true,
    "jsx": "react-jsx",
    "esModuleInterop": true,
    "skipLibCheck": true,
    "allowSyntheticDefaultImports": true
  },
  "include": ["src"]
}"#;

/// Static TypeScript compiler configuration
pub fn tsconfig() -> GeneratedFile {
    GeneratedFile::new(TSCONFIG_FILE, TSCONFIG)
}

/// README with the project name interpolated as-is
pub fn readme(project_name: &str) -> GeneratedFile {
    let content = format!(
        "# {}\n\n\
         This is a fancy new Motion project built with React (or Vue), optionally including framer-motion!\n\n\
         ## Getting Started\n\n\
         1. `npm install`\n\
         2. `npm run dev`\n\n\
         Enjoy!\n",
        project_name
    );
    GeneratedFile::new(README_FILE, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsconfig_is_stable() {
        assert_eq!(tsconfig(), tsconfig());
        let parsed: serde_json::Value = serde_json::from_str(&tsconfig().content).unwrap();
        assert_eq!(parsed["compilerOptions"]["strict"], true);
    }

    #[test]
    fn test_readme_heading_contains_name() {
        let file = readme("demo-app");
        assert_eq!(file.path, "README.md");
        assert_eq!(file.content.lines().next(), Some("# demo-app"));
        assert!(file.content.contains("## Getting Started"));
    }

    #[test]
    fn test_readme_name_not_escaped() {
        let file = readme("my <app> & *co*");
        assert!(file.content.starts_with("# my <app> & *co*\n"));
    }
}
