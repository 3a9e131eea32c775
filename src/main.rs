use courtboard::core::cli::CliPaths;
use courtboard::core::context::AppContext;
use courtboard::logging::LogTarget;
use courtboard::prompter::flows::board_flow::BoardFlow;
use courtboard::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::from_paths(paths) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let logger = ctx.logger.clone();
    let flow = BoardFlow::new(&mut ctx);

    if let Err(err) = Prompter::new().run(flow, false) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
