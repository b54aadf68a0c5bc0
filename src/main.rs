use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Error, ErrorKind, Write};

use exercises::console::{self, HistoryConsole, RoundsConsole};
use exercises::hanoi;

/// Contains information parsed from the command-line invocation of the exercises.
#[derive(Parser, Debug)]
#[command(about = "Round-robin check-ups, undo/redo and the Towers of Hanoi")]
struct CmdOptions {
    #[command(subcommand)]
    exercise: Exercise,
}

#[derive(Subcommand, Debug)]
enum Exercise {
    /// Keep patients in a circular check-up order
    Rounds {
        /// Patients to start with (defaults to the demo patients)
        patients: Vec<String>,
        /// Patient let in after the second one during the demo
        #[arg(long, default_value = "P4: Aishwarya")]
        newcomer: String,
        /// Read commands from stdin instead of running the demo
        #[arg(long)]
        session: bool,
    },
    /// Undo and redo a history of actions
    History {
        /// Actions to perform (defaults to A, B, C)
        actions: Vec<String>,
        /// Read commands from stdin instead of running the demo
        #[arg(long)]
        session: bool,
    },
    /// Solve the Towers of Hanoi
    Hanoi {
        /// Number of disks on the source peg
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=(hanoi::MAX_DISKS as i64)))]
        disks: u32,
        /// Which solver to print
        #[arg(long, value_enum, default_value_t = Solver::Both)]
        solver: Solver,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Solver {
    Recursive,
    Iterative,
    Both,
}

const PEGS: [char; 3] = ['A', 'B', 'C'];

fn main() {
    // Narration goes to stdout; keep log output quiet unless asked for.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    let stdout = io::stdout();
    let result = match options.exercise {
        Exercise::Rounds {
            patients,
            newcomer,
            session,
        } => run_rounds(stdout.lock(), patients, &newcomer, session),
        Exercise::History { actions, session } => run_history(stdout.lock(), actions, session),
        Exercise::Hanoi { disks, solver } => run_hanoi(&mut stdout.lock(), disks, solver),
    };

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run_rounds<W: Write>(
    out: W,
    patients: Vec<String>,
    newcomer: &str,
    session: bool,
) -> io::Result<()> {
    let mut rounds = RoundsConsole::new(out);
    if !session {
        let patients = if patients.is_empty() {
            vec![
                "P1: Rahul".to_string(),
                "P2: Meena".to_string(),
                "P3: Karthik".to_string(),
            ]
        } else {
            patients
        };
        rounds.demo(patients, newcomer)?;
    } else {
        if !patients.is_empty() {
            rounds.create(patients)?;
        }
        rounds.run_session(io::stdin().lock())?;
    }
    rounds.into_inner().flush()
}

fn run_history<W: Write>(out: W, actions: Vec<String>, session: bool) -> io::Result<()> {
    let mut history = HistoryConsole::new(out);
    if !session {
        let actions = if actions.is_empty() {
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        } else {
            actions
        };
        history.demo(&actions)?;
    } else {
        for action in &actions {
            history.push(action)?;
        }
        history.run_session(io::stdin().lock())?;
    }
    history.into_inner().flush()
}

fn run_hanoi<W: Write>(out: &mut W, disks: u32, solver: Solver) -> io::Result<()> {
    if solver != Solver::Iterative {
        console::print_recursive(out, disks, PEGS)?;
    }
    if solver == Solver::Both {
        write!(out, "\n\n\n")?;
    }
    if solver != Solver::Recursive {
        let solution = hanoi::solve_iterative(disks, PEGS[0], PEGS[1], PEGS[2])
            .map_err(|err| Error::new(ErrorKind::Other, err))?;
        console::print_iterative(out, &solution)?;
    }
    out.flush()
}
