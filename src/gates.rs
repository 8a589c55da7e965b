//! Logic-gate netlist for block diagrams
//!
//! [`Circuit::from_expr`] turns an expression into a list of gates in
//! dependency order. Chains of the same binary operator are flattened into a
//! single multi-input gate, so `a * b * c` becomes one three-input AND.
//! Each gate carries its logic level (longest path from a primary input),
//! which a renderer can use as a column index.

use crate::expression::Expr;
use std::fmt;

/// Kind of a logic gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Not,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::And => write!(f, "AND"),
            GateKind::Or => write!(f, "OR"),
            GateKind::Not => write!(f, "NOT"),
        }
    }
}

/// A wire in the netlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// A primary input variable
    Input(char),
    /// The output of the gate with this index
    Gate(usize),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Input(c) => write!(f, "{}", c),
            Signal::Gate(id) => write!(f, "g{}", id),
        }
    }
}

/// A gate with its input wires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    pub kind: GateKind,
    pub inputs: Vec<Signal>,
    /// Longest distance from a primary input, starting at 1
    pub level: usize,
}

/// A gate netlist computing one expression
///
/// # Examples
///
/// ```
/// use logic_visualizer::{Circuit, Expr, GateKind, Signal};
///
/// let expr = Expr::parse("a * b * c + d'").unwrap();
/// let circuit = Circuit::from_expr(&expr);
///
/// assert_eq!(circuit.gate_count(), 3);
/// assert_eq!(circuit.gates()[0].kind, GateKind::And);
/// assert_eq!(circuit.gates()[0].inputs.len(), 3);
/// assert_eq!(circuit.output(), Signal::Gate(2));
/// assert_eq!(circuit.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    inputs: Vec<char>,
    gates: Vec<Gate>,
    output: Signal,
}

impl Circuit {
    /// Build the netlist of an expression
    ///
    /// Gates are numbered in post-order, so every gate's inputs are primary
    /// inputs or lower-numbered gates.
    pub fn from_expr(expr: &Expr) -> Self {
        let mut gates = Vec::new();
        let output = build(expr, &mut gates);
        Circuit {
            inputs: expr.collect_variables().into_iter().collect(),
            gates,
            output,
        }
    }

    /// Primary inputs in ascending order
    pub fn inputs(&self) -> &[char] {
        &self.inputs
    }

    /// Gates in dependency order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The signal carrying the circuit's result
    pub fn output(&self) -> Signal {
        self.output
    }

    /// Number of gates
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of gate levels between inputs and output (0 for a bare input)
    pub fn depth(&self) -> usize {
        self.level_of(self.output)
    }

    /// Logic level of a signal (0 for primary inputs)
    pub fn level_of(&self, signal: Signal) -> usize {
        match signal {
            Signal::Input(_) => 0,
            Signal::Gate(id) => self.gates.get(id).map_or(0, |g| g.level),
        }
    }
}

fn build(expr: &Expr, gates: &mut Vec<Gate>) -> Signal {
    let (kind, operands) = match expr {
        Expr::Var(c) => return Signal::Input(*c),
        Expr::Not(inner) => (GateKind::Not, vec![inner.as_ref()]),
        Expr::And(..) => (GateKind::And, flatten(expr, GateKind::And)),
        Expr::Or(..) => (GateKind::Or, flatten(expr, GateKind::Or)),
    };

    let inputs: Vec<Signal> = operands.into_iter().map(|e| build(e, gates)).collect();
    let level = 1 + inputs
        .iter()
        .map(|&s| match s {
            Signal::Input(_) => 0,
            Signal::Gate(id) => gates[id].level,
        })
        .max()
        .unwrap_or(0);

    gates.push(Gate {
        kind,
        inputs,
        level,
    });
    Signal::Gate(gates.len() - 1)
}

/// Collect the operands of a maximal same-operator chain, left to right
fn flatten(expr: &Expr, kind: GateKind) -> Vec<&Expr> {
    match (expr, kind) {
        (Expr::And(l, r), GateKind::And) | (Expr::Or(l, r), GateKind::Or) => {
            let mut operands = flatten(l, kind);
            operands.extend(flatten(r, kind));
            operands
        }
        _ => vec![expr],
    }
}

/// One line per gate, e.g. `g0 = AND(a, b)`, then the output
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, gate) in self.gates.iter().enumerate() {
            write!(f, "g{} = {}(", id, gate.kind)?;
            for (i, input) in gate.inputs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", input)?;
            }
            writeln!(f, ")")?;
        }
        writeln!(f, "out = {}", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circuit(input: &str) -> Circuit {
        Circuit::from_expr(&Expr::parse(input).unwrap())
    }

    #[test]
    fn test_bare_variable_has_no_gates() {
        let c = circuit("a");
        assert_eq!(c.gate_count(), 0);
        assert_eq!(c.output(), Signal::Input('a'));
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn test_flattens_same_operator_chains() {
        let c = circuit("a | b | c | d");
        assert_eq!(c.gate_count(), 1);
        assert_eq!(
            c.gates()[0].inputs,
            vec![
                Signal::Input('a'),
                Signal::Input('b'),
                Signal::Input('c'),
                Signal::Input('d')
            ]
        );
    }

    #[test]
    fn test_does_not_flatten_across_operators() {
        let c = circuit("(a | b) * c");
        assert_eq!(c.gate_count(), 2);
        assert_eq!(c.gates()[0].kind, GateKind::Or);
        assert_eq!(c.gates()[1].kind, GateKind::And);
        assert_eq!(c.gates()[1].inputs, vec![Signal::Gate(0), Signal::Input('c')]);
        assert_eq!(c.depth(), 2);
    }

    #[test]
    fn test_not_gate_levels() {
        let c = circuit("a''");
        assert_eq!(c.gate_count(), 2);
        assert_eq!(c.gates()[1].inputs, vec![Signal::Gate(0)]);
        assert_eq!(c.level_of(Signal::Gate(1)), 2);
    }

    #[test]
    fn test_repeated_variables_share_inputs() {
        let c = circuit("a * b + a * c");
        assert_eq!(c.inputs(), &['a', 'b', 'c']);
        assert_eq!(c.gate_count(), 3);
    }

    #[test]
    fn test_display() {
        let c = circuit("a * b'");
        assert_eq!(c.to_string(), "g0 = NOT(b)\ng1 = AND(a, g0)\nout = g1\n");
    }
}
