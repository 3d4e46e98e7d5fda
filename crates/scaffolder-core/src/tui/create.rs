//! The interactive create flow

use super::clack::{ClackPrompter, ClackReporter};
use crate::assets::{AssetSource, HttpFetcher};
use crate::product::ProductConfig;
use crate::project::ProjectBuilder;
use crate::prompt::{
    self, DefaultsPrompter, LinePrompter, PresetPrompter, Prompter, MOTION_QUESTION,
    PROJECT_NAME_QUESTION, TYPESCRIPT_QUESTION, WRAPPER_QUESTION,
};
use crate::report::{ConsoleReporter, Reporter};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (skips the question)
    pub name: Option<String>,

    /// Use TypeScript, yes/no (skips the question)
    pub typescript: Option<String>,

    /// Install framer-motion, yes/no (skips the question)
    pub motion: Option<String>,

    /// Wrapper variant (skips the question)
    pub wrapper: Option<String>,

    /// Accept the default for every unanswered question
    pub yes: bool,

    /// Line-based prompts and plain colored output instead of cliclack
    pub plain: bool,
}

/// Run the CLI: collect answers, then provision the project in the current directory
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    // Reject a bad asset URL override before touching the filesystem
    let source = AssetSource::from_config(config)?;
    let parent = std::env::current_dir()?;

    if let Some(banner) = config.banner() {
        println!("{}", banner.cyan());
    }

    if args.plain {
        let fallback: Box<dyn Prompter> = if args.yes {
            Box::new(DefaultsPrompter)
        } else {
            Box::new(LinePrompter::stdio())
        };
        create(config, &args, fallback, ConsoleReporter, source, &parent).await?;
        println!("{}", "Done! Happy coding!".green());
    } else {
        cliclack::intro(config.display_name())?;
        let fallback: Box<dyn Prompter> = if args.yes {
            Box::new(DefaultsPrompter)
        } else {
            Box::new(ClackPrompter)
        };
        let reporter = ClackReporter::new();
        let result = create(config, &args, fallback, &reporter, source, &parent).await;
        reporter.finish(result.is_ok());
        result?;
        cliclack::outro("Done! Happy coding!")?;
    }

    Ok(())
}

async fn create<C, P, R>(
    config: &C,
    args: &CreateArgs,
    fallback: P,
    reporter: R,
    source: AssetSource,
    parent: &Path,
) -> Result<PathBuf>
where
    C: ProductConfig,
    P: Prompter,
    R: Reporter + Copy,
{
    let mut prompter = PresetPrompter::new(fallback)
        .with_answer(PROJECT_NAME_QUESTION, args.name.clone())
        .with_answer(TYPESCRIPT_QUESTION, args.typescript.clone())
        .with_answer(MOTION_QUESTION, args.motion.clone())
        .with_answer(WRAPPER_QUESTION, args.wrapper.clone());

    let run_config = prompt::collect_answers(&mut prompter, config.default_project_name())?;

    reporter.progress("Creating project structure...");

    let fetcher = HttpFetcher::new(config.user_agent(), reporter);
    let builder = ProjectBuilder::new(parent, source, fetcher, reporter);
    let root = builder.provision(&run_config).await?;

    Ok(root)
}
