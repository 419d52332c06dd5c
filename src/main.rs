//! Plugsmith's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates answer collection,
//! template expansion and the generation hooks.

use plugsmith::{
    cli::{get_args, Args},
    config,
    error::{default_error_handler, Result},
    processor::{expand, ExpandOptions},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects answers: replay file, or defaults/config-file plus prompts
/// 2. Expands the built-in template (validation and pruning hooks included)
/// 3. Records the answers for later --replay and prints next steps
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    println!("Creating new Obsidian plugin...");

    let answers = if args.replay {
        config::load_replay_from(&config::replay_file()?)?
    } else {
        let user_config = config::load_user_config(args.config_file.as_deref())?;
        let answers =
            config::get_answers(&engine, &prompt, &user_config.default_context, args.no_input)?;
        config::with_derived_context(answers)
    };

    let options = ExpandOptions {
        output_dir: &args.output_dir,
        overwrite_if_exists: args.overwrite_if_exists,
        skip_if_file_exists: args.skip_if_file_exists,
    };
    let project_root = expand(&engine, &answers, &options)?;

    config::save_replay_to(&config::replay_file()?, &answers)?;

    println!("Project successfully created at: {}", project_root.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", project_root.display());
    println!("  make install");
    println!("  make build");
    println!();
    println!("For detailed setup instructions, see the README.md file");
    Ok(())
}
