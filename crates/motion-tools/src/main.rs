//! Motion CLI - Project scaffolding for Motion apps

use anyhow::Result;
use clap::{Parser, Subcommand};
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::ProductConfig;

const BANNER: &str = r#"
  __  __       _   _
 |  \/  |     | | (_)
 | \  / | ___ | |_ _  ___ ___
 | |\/| |/ _ \| __| |/ __/ _ \
 | |  | | (_) | |_| | (_|  __/
 |_|  |_|\___/ \__|_|\___\___|

   ~ Fancy Motion Project Setup ~
"#;

/// Motion product configuration
#[derive(Clone)]
pub struct MotionConfig;

impl ProductConfig for MotionConfig {
    fn name(&self) -> &'static str {
        "motion"
    }

    fn display_name(&self) -> &'static str {
        "Motion"
    }

    fn banner(&self) -> Option<&'static str> {
        Some(BANNER)
    }

    fn default_asset_url(&self) -> &'static str {
        "https://install.mot.mindity.net/files"
    }

    fn asset_url_env(&self) -> &'static str {
        "MOTION_ASSET_URL"
    }

    fn default_project_name(&self) -> &'static str {
        "my-motion-app"
    }
}

#[derive(Parser, Debug)]
#[command(name = "motion-tools")]
#[command(about = "CLI for scaffolding Motion projects with React or Vue wrappers")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Motion project (default)
    Create(CliCreateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project name; also the directory that gets created
    #[arg(short, long)]
    pub name: Option<String>,

    /// Use TypeScript (yes/no)
    #[arg(long)]
    pub typescript: Option<String>,

    /// Install framer-motion (yes/no)
    #[arg(long)]
    pub motion: Option<String>,

    /// Wrapper to download (react/vue; anything else skips wrapper setup)
    #[arg(short, long)]
    pub wrapper: Option<String>,

    /// Accept the default for every question not answered by a flag
    #[arg(short, long)]
    pub yes: bool,

    /// Plain line prompts on stdin/stdout instead of the inline UI
    #[arg(long)]
    pub plain: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            typescript: args.typescript,
            motion: args.motion,
            wrapper: args.wrapper,
            yes: args.yes,
            plain: args.plain,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = MotionConfig;

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args,
        // No subcommand provided, default to create behavior
        None => args.create,
    };

    let result = scaffolder_core::run(&config, create_args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
