//! Example: CMOS pull-up and pull-down networks
//!
//! Shows how each SOP term becomes a series NMOS chain in the pull-down
//! network and a parallel PMOS group in the pull-up network.

use logic_visualizer::{CmosCircuit, Expr, Network, Sop, TransistorKind};

fn describe(network: &Network, depth: usize) {
    let indent = "   ".repeat(depth + 1);
    match network {
        Network::Switch(t) => {
            let kind = match t.kind {
                TransistorKind::Nmos => "NMOS",
                TransistorKind::Pmos => "PMOS",
            };
            println!("{}{} gated by {}", indent, kind, t.gate);
        }
        Network::Series(parts) => {
            println!("{}series:", indent);
            parts.iter().for_each(|p| describe(p, depth + 1));
        }
        Network::Parallel(parts) => {
            println!("{}parallel:", indent);
            parts.iter().for_each(|p| describe(p, depth + 1));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for input in ["a * b + c'", "a'", "(a + b) * (c + d)", "a * b * c"] {
        let expr = Expr::parse(input)?;
        let sop = Sop::from_expr(&expr);
        let cmos = CmosCircuit::from_sop(&sop);

        println!("=== {} ===", input);
        println!("SOP: {}", sop);
        print!("{}", cmos);
        println!("Pull-down tree:");
        describe(cmos.pull_down(), 0);
        println!(
            "Stack heights: PUN {}, PDN {}",
            cmos.pull_up().stack_height(),
            cmos.pull_down().stack_height()
        );
        println!();
    }
    Ok(())
}
