/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Exposes the bond estimation queries as subcommands. Distances are read
//! and printed in Angstroms by default; `--bohr` switches every length-like
//! input and output to Bohr radii, and `--json` switches to machine-readable
//! output.

use crate::atoms::{database, Site, Vector3D};
use crate::bonds::{self, CovalentBond};
use crate::utils::{angstrom_to_bohr, bohr_to_angstrom};
use crate::xc::XcFunc;
use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(name = "covbond", version, about = "Covalent bond length and bond order estimation")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read and print distances in Bohr radii instead of Angstroms
    #[arg(long, global = true)]
    bohr: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reference bond length for an element pair at a bond order
    Length {
        elem1: String,
        elem2: String,
        /// Bond order to query
        #[arg(long, default_value_t = 1.0)]
        order: f64,
        /// Fallback order-1 length for untabulated pairs
        #[arg(long)]
        default_bl: Option<f64>,
    },
    /// Estimate the bond order for an element pair at a given distance
    Order {
        elem1: String,
        elem2: String,
        distance: f64,
        /// Additive tolerance applied past the weakest tabulated bond
        #[arg(long, default_value_t = bonds::DEFAULT_TOL)]
        tol: f64,
        /// Fallback order-1 length for untabulated pairs
        #[arg(long)]
        default_bl: Option<f64>,
    },
    /// Decide whether two elements at a given distance are bonded
    Bonded {
        elem1: String,
        elem2: String,
        distance: f64,
        /// Additive tolerance on the reference length
        #[arg(long, default_value_t = bonds::DEFAULT_TOL)]
        tol: f64,
        /// Fallback order-1 length for untabulated pairs
        #[arg(long)]
        default_bl: Option<f64>,
    },
    /// Print every tabulated bond length for an element pair
    Table { elem1: String, elem2: String },
    /// Element reference data (atomic number, weight, covalent radius)
    Info {
        /// Element symbol or atomic number
        element: String,
    },
    /// Classify an exchange-correlation functional identifier
    Xc { name: String },
}

/// Parse arguments and execute the selected subcommand
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    log::debug!("covbond v{} starting", crate::VERSION);
    cli.execute()
}

impl Cli {
    fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Length {
                elem1,
                elem2,
                order,
                default_bl,
            } => {
                let default_bl = default_bl.map(|bl| self.to_angstrom(bl));
                let length = bonds::get_bond_length(elem1, elem2, *order, default_bl)?;
                let length = self.from_angstrom(length);
                if self.json {
                    println!(
                        "{}",
                        json!({
                            "elem1": elem1,
                            "elem2": elem2,
                            "order": order,
                            "length": length,
                            "unit": self.unit(),
                        })
                    );
                } else {
                    println!(
                        "{}-{} order {} bond length: {:.4} {}",
                        elem1,
                        elem2,
                        order,
                        length,
                        self.unit()
                    );
                }
            }
            Command::Order {
                elem1,
                elem2,
                distance,
                tol,
                default_bl,
            } => {
                let distance = self.to_angstrom(*distance);
                let tol = self.to_angstrom(*tol);
                let default_bl = default_bl.map(|bl| self.to_angstrom(bl));
                let order = bonds::get_bond_order(elem1, elem2, distance, tol, default_bl)?;
                if self.json {
                    println!(
                        "{}",
                        json!({
                            "elem1": elem1,
                            "elem2": elem2,
                            "distance": self.from_angstrom(distance),
                            "unit": self.unit(),
                            "order": order,
                        })
                    );
                } else {
                    println!("Estimated {}-{} bond order: {:.4}", elem1, elem2, order);
                }
            }
            Command::Bonded {
                elem1,
                elem2,
                distance,
                tol,
                default_bl,
            } => {
                let distance = self.to_angstrom(*distance);
                let tol = self.to_angstrom(*tol);
                let default_bl = default_bl.map(|bl| self.to_angstrom(bl));
                let site1 = Site::new(elem1, Vector3D::origin())?;
                let site2 = Site::new(elem2, Vector3D::new(0.0, 0.0, distance))?;
                let bonded = CovalentBond::is_bonded(&site1, &site2, tol, default_bl)?;
                if self.json {
                    println!(
                        "{}",
                        json!({
                            "elem1": site1.symbol(),
                            "elem2": site2.symbol(),
                            "distance": self.from_angstrom(distance),
                            "unit": self.unit(),
                            "bonded": bonded,
                        })
                    );
                } else {
                    println!(
                        "{} and {} at {:.4} {}: {}",
                        site1.symbol(),
                        site2.symbol(),
                        self.from_angstrom(distance),
                        self.unit(),
                        if bonded { "bonded" } else { "not bonded" }
                    );
                }
            }
            Command::Table { elem1, elem2 } => {
                let lengths = bonds::all_bond_lengths(elem1, elem2, None)?;
                if self.json {
                    let entries: serde_json::Map<String, serde_json::Value> = lengths
                        .iter()
                        .map(|(order, length)| {
                            (order.to_string(), json!(self.from_angstrom(*length)))
                        })
                        .collect();
                    println!(
                        "{}",
                        json!({
                            "elem1": elem1,
                            "elem2": elem2,
                            "unit": self.unit(),
                            "lengths": entries,
                        })
                    );
                } else {
                    println!("Tabulated {}-{} bond lengths ({}):", elem1, elem2, self.unit());
                    for (order, length) in &lengths {
                        println!("  order {}: {:.4}", order, self.from_angstrom(*length));
                    }
                }
            }
            Command::Info { element } => {
                let atomic_number = match element.parse::<u32>() {
                    Ok(z) => z,
                    Err(_) => database::atomic_number_from_symbol(element)
                        .ok_or_else(|| anyhow::anyhow!("unknown element: {}", element))?,
                };
                let symbol = database::element_symbol(atomic_number)
                    .ok_or_else(|| anyhow::anyhow!("invalid atomic number: {}", atomic_number))?;
                let weight = database::atomic_weight(atomic_number);
                let radius = database::covalent_radius(atomic_number).map(|r| self.from_angstrom(r));
                if self.json {
                    println!(
                        "{}",
                        json!({
                            "symbol": symbol,
                            "atomic_number": atomic_number,
                            "atomic_weight": weight,
                            "covalent_radius": radius,
                            "unit": self.unit(),
                        })
                    );
                } else {
                    println!("{} (Z={})", symbol, atomic_number);
                    if let Some(weight) = weight {
                        println!("  atomic weight: {} amu", weight);
                    }
                    if let Some(radius) = radius {
                        println!("  covalent radius: {:.4} {}", radius, self.unit());
                    }
                }
            }
            Command::Xc { name } => {
                let func = XcFunc::from_string(name)?;
                if self.json {
                    println!(
                        "{}",
                        json!({
                            "name": func.as_str(),
                            "family": func.family().as_str(),
                            "kind": func.kind().as_str(),
                            "hybrid": func.is_hybrid_family(),
                        })
                    );
                } else {
                    println!(
                        "{}: family {}, kind {}",
                        func.as_str(),
                        func.family().as_str(),
                        func.kind().as_str()
                    );
                }
            }
        }
        Ok(())
    }

    fn to_angstrom(&self, value: f64) -> f64 {
        if self.bohr {
            bohr_to_angstrom(value)
        } else {
            value
        }
    }

    fn from_angstrom(&self, value: f64) -> f64 {
        if self.bohr {
            angstrom_to_bohr(value)
        } else {
            value
        }
    }

    fn unit(&self) -> &'static str {
        if self.bohr {
            "bohr"
        } else {
            "angstrom"
        }
    }
}
