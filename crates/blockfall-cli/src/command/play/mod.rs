use anyhow::Context as _;
use blockfall_engine::PieceSeed;

use self::app::PlayApp;
use crate::tui::Runtime;

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Piece sequence seed as 32 hex digits (random when omitted)
    #[clap(long)]
    pub(crate) seed: Option<PieceSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed } = arg;

    let mut app = PlayApp::new(*seed);
    Runtime::new()
        .run(&mut app)
        .context("Terminal I/O failed")?;

    let score = app.final_score();
    println!("Final score: {score}");
    Ok(())
}
