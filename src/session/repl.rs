//! Read-eval-print loop driving a [`Scorekeeper`] from line commands.

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::command::{Command, HELP};
use super::scorekeeper::Scorekeeper;
use crate::report;

/// What the loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command and write its result to `out`.
///
/// Rejected actions are reported on `out` and do not stop the loop.
pub fn execute(keeper: &mut Scorekeeper, command: Command, out: &mut impl Write) -> io::Result<Flow> {
    let result = match command {
        Command::AddRound { subtype, values, note } => keeper
            .add_round(subtype, values, note.as_deref())
            .map(|round| format!("Round {} recorded: {:?}", round.index, round.points.as_array())),
        Command::SwitchGame(game) => {
            keeper.switch_game(game);
            Ok(game.hint().to_string())
        }
        Command::Rename { seat, name } => {
            keeper.rename_seat(seat, &name);
            Ok(format!("{} is now {}", seat, keeper.state().name(seat)))
        }
        Command::SetTarget(target) => {
            keeper.set_target(target);
            Ok(match target {
                Some(target) => format!("Target: {}", target),
                None => "No target".to_string(),
            })
        }
        Command::DeleteLast => keeper
            .delete_last_round()
            .map(|round| format!("Round {} deleted", round.index)),
        Command::Undo => keeper.undo().map(|()| "Undone".to_string()),
        Command::NewGame => {
            keeper.new_game();
            Ok("New game".to_string())
        }
        Command::Show => Ok(format!(
            "{}\n{}",
            report::render_totals(keeper.state()),
            report::render_table(keeper.state()).trim_end()
        )),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => return Ok(Flow::Quit),
    };

    match result {
        Ok(message) => writeln!(out, "{}", message)?,
        Err(err) => {
            warn!(error = %err, "action rejected");
            writeln!(out, "error: {}", err)?;
        }
    }
    Ok(Flow::Continue)
}

/// Read commands from `input` until it ends or `quit` is entered.
pub fn run(keeper: &mut Scorekeeper, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if execute(keeper, command, out)? == Flow::Quit {
                    break;
                }
            }
            Err(err) => writeln!(out, "error: {}", err)?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, ScorekeeperConfig, Seats};
    use crate::engine::FixedClock;
    use time::OffsetDateTime;

    fn keeper() -> Scorekeeper {
        Scorekeeper::with_clock(
            ScorekeeperConfig::default(),
            FixedClock(OffsetDateTime::UNIX_EPOCH),
        )
    }

    fn run_script(keeper: &mut Scorekeeper, script: &str) -> String {
        let mut out = Vec::new();
        run(keeper, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_script_session() {
        let mut keeper = keeper();
        let output = run_script(
            &mut keeper,
            "game trix\nadd queens 1 1 2 0\nadd king 1 1 0 0\nname 4 Dov\nshow\n",
        );

        assert!(output.contains("Round 1 recorded: [-25, -25, -50, 0]"));
        assert!(output.contains("error: King: exactly one player must take the king"));
        assert!(output.contains("Seat 4 is now Dov"));
        assert!(output.contains("Leader: Dov"));
        assert_eq!(keeper.state().game(), Game::Trix);
        assert_eq!(keeper.state().totals(), &Seats::from([-25, -25, -50, 0]));
    }

    #[test]
    fn test_undo_reverts_target_edit() {
        let mut keeper = keeper();
        let output = run_script(&mut keeper, "add manual 5 0 0 0\ntarget 400\nundo\n");

        assert!(output.contains("Target: 400"));
        assert_eq!(keeper.state().target(), None);
        assert_eq!(keeper.state().round_count(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut keeper = keeper();
        run_script(&mut keeper, "add manual 1 2 3 4\nquit\nadd manual 1 2 3 4\n");

        assert_eq!(keeper.state().round_count(), 1);
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let mut keeper = keeper();
        let output = run_script(&mut keeper, "juggle\n\nundo\n");

        assert!(output.contains("error: unknown command 'juggle'"));
        assert!(output.contains("error: nothing to undo"));
    }
}
