//! Run configuration assembled from the collected answers

use std::fmt;

/// Token that switches a yes/no answer on
const YES: &str = "yes";

/// UI framework wrapper selected for the project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WrapperVariant {
    React,
    Vue,
    /// Any other answer; wrapper setup is skipped
    Unknown(String),
}

impl WrapperVariant {
    /// Map a normalized answer onto a variant
    pub fn parse(answer: &str) -> Self {
        match answer {
            "react" => WrapperVariant::React,
            "vue" => WrapperVariant::Vue,
            other => WrapperVariant::Unknown(other.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            WrapperVariant::React => "React",
            WrapperVariant::Vue => "Vue",
            WrapperVariant::Unknown(name) => name,
        }
    }
}

impl fmt::Display for WrapperVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The four answers driving a single provisioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub project_name: String,
    pub use_typescript: bool,
    pub install_motion: bool,
    pub wrapper: WrapperVariant,
}

impl RunConfig {
    /// Build a configuration from normalized answers
    ///
    /// Only the exact token `yes` enables a toggle; anything else reads as no.
    pub fn from_answers(
        project_name: impl Into<String>,
        use_typescript: &str,
        install_motion: &str,
        wrapper: &str,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            use_typescript: use_typescript == YES,
            install_motion: install_motion == YES,
            wrapper: WrapperVariant::parse(wrapper),
        }
    }
}
