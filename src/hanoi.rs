//! Towers of Hanoi, solved twice: once by recursion and once by simulating the
//! three pegs as stacks.

use std::fmt;
use thiserror::Error;

/// Largest puzzle the command line accepts.
pub const MAX_DISKS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: char,
    pub to: char,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("peg {0} has no disk to move")]
    EmptyPeg(char),
    #[error("disk {disk} from {from} cannot go on top of disk {below} on {to}")]
    LargerOntoSmaller {
        disk: u32,
        from: char,
        to: char,
        below: u32,
    },
}

pub fn total_moves(disks: u32) -> u64 {
    2u64.saturating_pow(disks) - 1
}

/// Returns the moves that carry `disks` disks from `source` to `destination`.
pub fn solve_recursive(disks: u32, source: char, auxiliary: char, destination: char) -> Vec<Move> {
    let mut moves = Vec::new();
    recurse(disks, source, auxiliary, destination, &mut moves);
    moves
}

fn recurse(disk: u32, source: char, auxiliary: char, destination: char, moves: &mut Vec<Move>) {
    if disk == 0 {
        return;
    }
    recurse(disk - 1, source, destination, auxiliary, moves);
    moves.push(Move {
        disk,
        from: source,
        to: destination,
    });
    recurse(disk - 1, auxiliary, source, destination, moves);
}

/// Three named pegs, each a stack of disk sizes listed bottom first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Towers {
    names: [char; 3],
    pegs: [Vec<u32>; 3],
}

impl Towers {
    /// Stacks every disk on the first peg, largest at the bottom.
    pub fn new(disks: u32, names: [char; 3]) -> Towers {
        Towers {
            names,
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
        }
    }

    pub fn name(&self, peg: usize) -> char {
        self.names[peg]
    }

    pub fn disks(&self, peg: usize) -> &[u32] {
        &self.pegs[peg]
    }

    pub fn top(&self, peg: usize) -> Option<u32> {
        self.pegs[peg].last().copied()
    }

    pub fn is_legal(&self, from: usize, to: usize) -> bool {
        match (self.top(from), self.top(to)) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(disk), Some(below)) => disk < below,
        }
    }

    pub fn transfer(&mut self, from: usize, to: usize) -> Result<Move, MoveError> {
        let disk = self.top(from).ok_or(MoveError::EmptyPeg(self.names[from]))?;
        if let Some(below) = self.top(to) {
            if below < disk {
                return Err(MoveError::LargerOntoSmaller {
                    disk,
                    from: self.names[from],
                    to: self.names[to],
                    below,
                });
            }
        }
        self.pegs[from].pop();
        self.pegs[to].push(disk);
        Ok(Move {
            disk,
            from: self.names[from],
            to: self.names[to],
        })
    }

    /// True once the first two pegs are empty.
    pub fn is_solved(&self) -> bool {
        self.pegs[0].is_empty() && self.pegs[1].is_empty()
    }
}

impl fmt::Display for Towers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (peg, name) in self.names.iter().enumerate() {
            if peg > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", name, self.pegs[peg])?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct IterativeSolution {
    pub initial: Towers,
    pub moves: Vec<Move>,
    pub finished: Towers,
}

/// Solves the puzzle without recursion. Odd steps walk disk 1 one peg along
/// a fixed cycle; even steps make the only legal move that leaves disk 1
/// alone.
pub fn solve_iterative(
    disks: u32,
    source: char,
    auxiliary: char,
    destination: char,
) -> Result<IterativeSolution, MoveError> {
    let mut towers = Towers::new(disks, [source, auxiliary, destination]);
    let initial = towers.clone();

    // Peg indices: 0 = source, 1 = auxiliary, 2 = destination.
    let cycle: [usize; 3] = if disks % 2 == 0 { [0, 1, 2] } else { [0, 2, 1] };
    let mut smallest = 0;
    let mut moves = Vec::new();

    for step in 1..=total_moves(disks) {
        if step % 2 == 1 {
            let next = (smallest + 1) % 3;
            moves.push(towers.transfer(cycle[smallest], cycle[next])?);
            smallest = next;
        } else {
            let a = cycle[(smallest + 1) % 3];
            let b = cycle[(smallest + 2) % 3];
            let step_move = if towers.is_legal(a, b) {
                towers.transfer(a, b)?
            } else {
                towers.transfer(b, a)?
            };
            moves.push(step_move);
        }
    }
    log::debug!("iterative solver finished {} disks in {} moves", disks, moves.len());

    Ok(IterativeSolution {
        initial,
        moves,
        finished: towers,
    })
}
