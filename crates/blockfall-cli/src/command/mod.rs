use clap::{Parser, Subcommand};

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run; plays interactively when omitted
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Play games headlessly with random moves and print the results as JSON lines
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_play_is_default() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert!(args.mode.is_none());

        let args = CommandArgs::try_parse_from([
            "blockfall",
            "play",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Play(PlayArg { seed: Some(_) }))));
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(CommandArgs::try_parse_from(["blockfall", "play", "--seed", "xyz"]).is_err());
    }
}
