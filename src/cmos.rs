//! CMOS transistor networks derived from a sum of products
//!
//! A static CMOS stage built from an [`Sop`] has:
//! - a pull-down network (NMOS, conducts on 1): one series chain per term,
//!   the chains in parallel
//! - a pull-up network (PMOS, conducts on 0): the dual, one parallel group
//!   per term, the groups in series
//!
//! The stage output is the complement of the SOP, so an output inverter
//! restores the SOP polarity. Each variable used inverted gets an input
//! inverter.

use crate::sop::{Literal, Sop};
use std::collections::BTreeSet;
use std::fmt;

/// Transistor polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransistorKind {
    Pmos,
    Nmos,
}

/// A single transistor gated by a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transistor {
    pub kind: TransistorKind,
    pub gate: Literal,
}

/// A series/parallel switch network
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    Switch(Transistor),
    Series(Vec<Network>),
    Parallel(Vec<Network>),
}

impl Network {
    /// Series composition; a single element collapses to itself
    fn series(mut parts: Vec<Network>) -> Network {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Network::Series(parts)
        }
    }

    /// Parallel composition; a single element collapses to itself
    fn parallel(mut parts: Vec<Network>) -> Network {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Network::Parallel(parts)
        }
    }

    /// Number of transistors in the network
    pub fn transistor_count(&self) -> usize {
        match self {
            Network::Switch(_) => 1,
            Network::Series(parts) | Network::Parallel(parts) => {
                parts.iter().map(Network::transistor_count).sum()
            }
        }
    }

    /// All transistors, left to right
    pub fn transistors(&self) -> Vec<Transistor> {
        match self {
            Network::Switch(t) => vec![*t],
            Network::Series(parts) | Network::Parallel(parts) => {
                parts.iter().flat_map(Network::transistors).collect()
            }
        }
    }

    /// Longest chain of series transistors between the network's terminals
    pub fn stack_height(&self) -> usize {
        match self {
            Network::Switch(_) => 1,
            Network::Series(parts) => parts.iter().map(Network::stack_height).sum(),
            Network::Parallel(parts) => parts.iter().map(Network::stack_height).max().unwrap_or(0),
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, nested: bool) -> fmt::Result {
        let (parts, separator) = match self {
            Network::Switch(t) => return write!(f, "{}", t.gate),
            Network::Series(parts) => (parts, " · "),
            Network::Parallel(parts) => (parts, " ∥ "),
        };
        if nested {
            write!(f, "(")?;
        }
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            part.fmt_nested(f, true)?;
        }
        if nested {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// `·` for series, `∥` for parallel, parentheses around nested groups
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, false)
    }
}

/// Complementary CMOS implementation of a sum of products
///
/// # Examples
///
/// ```
/// use logic_visualizer::{CmosCircuit, Expr, Sop};
///
/// let sop = Sop::from_expr(&Expr::parse("a * b + c'").unwrap());
/// let cmos = CmosCircuit::from_sop(&sop);
///
/// assert_eq!(cmos.pull_down().to_string(), "(a · b) ∥ c'");
/// assert_eq!(cmos.pull_up().to_string(), "(a ∥ b) · c'");
/// assert_eq!(cmos.input_inverters().iter().collect::<Vec<_>>(), vec![&'c']);
/// assert_eq!(cmos.transistor_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmosCircuit {
    pull_up: Network,
    pull_down: Network,
    input_inverters: BTreeSet<char>,
}

impl CmosCircuit {
    /// Derive both networks from the SOP terms
    ///
    /// An SOP without terms has nothing to switch; it yields empty series
    /// and parallel groups.
    pub fn from_sop(sop: &Sop) -> Self {
        let pull_down = Network::parallel(
            sop.terms()
                .iter()
                .map(|term| {
                    Network::series(
                        term.literals()
                            .iter()
                            .map(|&gate| Network::Switch(Transistor {
                                kind: TransistorKind::Nmos,
                                gate,
                            }))
                            .collect(),
                    )
                })
                .collect(),
        );

        let pull_up = Network::series(
            sop.terms()
                .iter()
                .map(|term| {
                    Network::parallel(
                        term.literals()
                            .iter()
                            .map(|&gate| Network::Switch(Transistor {
                                kind: TransistorKind::Pmos,
                                gate,
                            }))
                            .collect(),
                    )
                })
                .collect(),
        );

        let input_inverters = sop
            .literals()
            .filter(|l| l.inverted)
            .map(|l| l.variable)
            .collect();

        CmosCircuit {
            pull_up,
            pull_down,
            input_inverters,
        }
    }

    /// PMOS network between VDD and the stage output
    pub fn pull_up(&self) -> &Network {
        &self.pull_up
    }

    /// NMOS network between the stage output and GND
    pub fn pull_down(&self) -> &Network {
        &self.pull_down
    }

    /// Variables that need an inverter to provide their complement
    pub fn input_inverters(&self) -> &BTreeSet<char> {
        &self.input_inverters
    }

    /// Total transistors: both networks, the input inverters and the output inverter
    pub fn transistor_count(&self) -> usize {
        self.pull_up.transistor_count()
            + self.pull_down.transistor_count()
            + 2 * self.input_inverters.len()
            + 2
    }
}

impl fmt::Display for CmosCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PUN (PMOS): {}", self.pull_up)?;
        writeln!(f, "PDN (NMOS): {}", self.pull_down)?;
        if !self.input_inverters.is_empty() {
            let inverted: Vec<String> = self.input_inverters.iter().map(char::to_string).collect();
            writeln!(f, "input inverters: {}", inverted.join(", "))?;
        }
        writeln!(f, "output inverter: yes")?;
        writeln!(f, "transistors: {}", self.transistor_count())
    }
}
