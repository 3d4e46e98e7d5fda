//! Question/answer collection
//!
//! Answers are trimmed, fall back to the default when blank, and are always
//! lowercased so later comparisons against `yes`, `react` and friends are
//! case-insensitive.

use crate::config::RunConfig;
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub const PROJECT_NAME_QUESTION: &str = "Enter your project name:";
pub const TYPESCRIPT_QUESTION: &str = "Use TypeScript? (yes/no):";
pub const MOTION_QUESTION: &str = "Install 'framer-motion'? (yes/no):";
pub const WRAPPER_QUESTION: &str = "Which wrapper do you want to use? (react/vue):";

/// Apply the blank-means-default rule and lowercase the result
pub fn normalize_answer(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    let answer = if trimmed.is_empty() { default } else { trimmed };
    answer.to_lowercase()
}

/// Source of answers for the setup questions
pub trait Prompter {
    /// Ask one question, blocking until an answer is available
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        (**self).ask(question, default)
    }
}

/// Ask the four setup questions in order and build the run configuration
pub fn collect_answers<P: Prompter + ?Sized>(
    prompter: &mut P,
    default_project_name: &str,
) -> io::Result<RunConfig> {
    let project_name = prompter.ask(PROJECT_NAME_QUESTION, default_project_name)?;
    let use_typescript = prompter.ask(TYPESCRIPT_QUESTION, "yes")?;
    let install_motion = prompter.ask(MOTION_QUESTION, "yes")?;
    let wrapper = prompter.ask(WRAPPER_QUESTION, "react")?;

    Ok(RunConfig::from_answers(
        project_name,
        &use_typescript,
        &install_motion,
        &wrapper,
    ))
}

/// Line-based prompts over any reader/writer pair (stdin/stdout in plain mode)
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        write!(self.output, "{} [{}]: ", question.yellow(), default)?;
        self.output.flush()?;

        // End of input reads as an empty line
        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(normalize_answer(&line, default))
    }
}

/// Answers supplied up front (command line flags); missing ones defer to `fallback`
pub struct PresetPrompter<P> {
    answers: Vec<(String, Option<String>)>,
    fallback: P,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(fallback: P) -> Self {
        Self {
            answers: Vec::new(),
            fallback,
        }
    }

    /// Register a preset answer for a question
    pub fn with_answer(mut self, question: &str, answer: Option<String>) -> Self {
        self.answers.push((question.to_string(), answer));
        self
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        let preset = self
            .answers
            .iter()
            .find(|(q, _)| q == question)
            .and_then(|(_, answer)| answer.as_deref());

        match preset {
            Some(answer) => Ok(normalize_answer(answer, default)),
            None => self.fallback.ask(question, default),
        }
    }
}

/// Accepts every default without asking (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&mut self, _question: &str, default: &str) -> io::Result<String> {
        Ok(normalize_answer("", default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask_with_input(input: &str, default: &str) -> (String, String) {
        let mut output = Vec::new();
        let answer = {
            let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes()), &mut output);
            prompter.ask("Project name", default).unwrap()
        };
        (answer, String::from_utf8_lossy(&output).to_string())
    }

    #[test]
    fn test_blank_answers_use_default_lowercased() {
        for blank in ["", "\n", "   \n", "\t \r\n"] {
            assert_eq!(normalize_answer(blank, "My-Motion-App"), "my-motion-app");
        }
    }

    #[test]
    fn test_non_blank_answers_are_trimmed_and_lowercased() {
        assert_eq!(normalize_answer("  React \n", "vue"), "react");
        assert_eq!(normalize_answer("NO", "yes"), "no");
        assert_eq!(normalize_answer("Svelte", "react"), "svelte");
    }

    #[test]
    fn test_line_prompter_shows_question_and_default() {
        let (answer, output) = ask_with_input("Acme\n", "my-motion-app");
        assert_eq!(answer, "acme");
        assert!(output.contains("Project name"));
        assert!(output.contains("[my-motion-app]"));
    }

    #[test]
    fn test_line_prompter_end_of_input_returns_default() {
        let (answer, _) = ask_with_input("", "Yes");
        assert_eq!(answer, "yes");
    }

    #[test]
    fn test_line_prompter_reads_one_line_per_question() {
        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("acme\n\nVUE\n".as_bytes()), &mut output);
        assert_eq!(prompter.ask("name", "x").unwrap(), "acme");
        assert_eq!(prompter.ask("ts", "yes").unwrap(), "yes");
        assert_eq!(prompter.ask("wrapper", "react").unwrap(), "vue");
    }

    #[test]
    fn test_collect_answers_in_order() {
        let mut output = Vec::new();
        let mut prompter =
            LinePrompter::new(Cursor::new("Acme\nno\n\nVue\n".as_bytes()), &mut output);

        let config = collect_answers(&mut prompter, "my-motion-app").unwrap();

        assert_eq!(
            config,
            RunConfig::from_answers("acme", "no", "yes", "vue")
        );
        let shown = String::from_utf8_lossy(&output).to_string();
        let name_at = shown.find("project name").unwrap();
        let wrapper_at = shown.find("Which wrapper").unwrap();
        assert!(name_at < wrapper_at);
    }

    #[test]
    fn test_collect_answers_all_defaults() {
        let config = collect_answers(&mut DefaultsPrompter, "My-Motion-App").unwrap();
        assert_eq!(config.project_name, "my-motion-app");
        assert!(config.use_typescript);
        assert!(config.install_motion);
        assert_eq!(config.wrapper, crate::config::WrapperVariant::React);
    }

    #[test]
    fn test_preset_answers_skip_the_fallback() {
        let mut prompter = PresetPrompter::new(DefaultsPrompter)
            .with_answer("name", Some("  Acme ".to_string()))
            .with_answer("wrapper", None);

        assert_eq!(prompter.ask("name", "x").unwrap(), "acme");
        assert_eq!(prompter.ask("wrapper", "React").unwrap(), "react");
        assert_eq!(prompter.ask("other", "Yes").unwrap(), "yes");
    }
}
