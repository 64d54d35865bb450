// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interactive shell for the MIPS-I simulator.
//!
//! Loads a hex program image and drops into a REPL reproducing a
//! classic teaching simulator's command vocabulary: `go`, `run N`,
//! `rdump`, `mdump addr`, `input reg val`, `load path`, `reset`, `help`,
//! `quit`.

use clap::Parser;
use log::{error, info};
use mipsim::core::cpu::decode::decode;
use mipsim::core::cpu::Memory;
use mipsim::core::disassembler::disassemble;
use mipsim::core::memory::Bus;
use mipsim::core::system::System;
use mipsim::core::Config;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "mipsim")]
#[command(about = "A MIPS-I functional CPU simulator")]
struct Cli {
    /// Path to a hex program image to load at startup.
    image: Option<String>,

    /// Print a disassembled trace line before executing each instruction.
    #[arg(long)]
    trace: bool,

    /// Path to a TOML config file (defaults to `mipsim.toml` in the
    /// current directory if present).
    #[arg(long, default_value = "mipsim.toml")]
    config: String,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load config: {e}");
            Config::default()
        }
    };
    let trace = cli.trace || config.trace;

    let mut system = System::new();
    if let Some(path) = &cli.image {
        match mipsim::core::loader::ProgramImage::load(path) {
            Ok(image) => {
                system.load_image(&image);
                info!("loaded {path}");
            }
            Err(e) => {
                error!("failed to load {path}: {e}");
            }
        }
    }
    if let Some(entry_pc) = config.entry_pc {
        system.state_mut().pc = entry_pc;
    }

    println!("mipsim -- MIPS-I functional simulator");
    println!("type 'help' for a list of commands");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("mipsim> ");
        io::stdout().flush().ok();
        line.clear();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else { continue };

        match cmd {
            "help" | "h" => print_help(),
            "go" => {
                if trace {
                    run_traced(&mut system, usize::MAX);
                } else {
                    system.run();
                }
            }
            "run" => {
                let n = words.next().and_then(|s| s.parse::<usize>().ok());
                match n {
                    Some(n) if trace => run_traced(&mut system, n),
                    Some(n) => system.run_n(n),
                    None => println!("usage: run N"),
                }
            }
            "rdump" => print_registers(&system),
            "mdump" => {
                let Some(addr) = words.next().and_then(parse_hex) else {
                    println!("usage: mdump ADDR");
                    continue;
                };
                println!(
                    "{:#010X}: {:#010X}",
                    addr,
                    system.bus_mut().read_word(addr)
                );
            }
            "input" => {
                let reg = words.next().and_then(|s| s.parse::<usize>().ok());
                let val = words.next().and_then(parse_hex);
                match (reg, val) {
                    (Some(reg), Some(val)) if reg < 32 => {
                        system.state_mut().regs[reg] = val;
                    }
                    _ => println!("usage: input REG VAL"),
                }
            }
            "load" => {
                let Some(path) = words.next() else {
                    println!("usage: load PATH");
                    continue;
                };
                match mipsim::core::loader::ProgramImage::load(path) {
                    Ok(image) => {
                        system.reset();
                        system.load_image(&image);
                        println!("loaded {path}");
                    }
                    Err(e) => println!("error: {e}"),
                }
            }
            "reset" => {
                system.reset();
                println!("reset");
            }
            "quit" | "q" | "exit" => break,
            other => println!("unrecognized command: {other} (try 'help')"),
        }
    }
}

fn run_traced(system: &mut System, n: usize) {
    for _ in 0..n {
        if !system.is_running() {
            break;
        }
        let pc = system.state().pc;
        let word = system.bus_mut().read_word(pc);
        println!("{pc:#010X}: {}", disassemble(&decode(word)));
        system.step();
    }
}

fn print_registers(system: &System) {
    let state = system.state();
    for row in 0..8 {
        let mut line = String::new();
        for col in 0..4 {
            let idx = row * 4 + col;
            line.push_str(&format!("${idx:<2} = {:#010X}  ", state.regs[idx]));
        }
        println!("{line}");
    }
    println!("hi = {:#010X}  lo = {:#010X}  pc = {:#010X}", state.hi, state.lo, state.pc);
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

fn print_help() {
    println!("commands:");
    println!("  go               run until halted");
    println!("  run N            execute N instructions");
    println!("  rdump            print all registers, hi/lo, and pc");
    println!("  mdump ADDR       print the word at ADDR (hex)");
    println!("  input REG VAL    set general-purpose register REG to VAL (hex)");
    println!("  load PATH        reset and load a new hex image");
    println!("  reset            clear registers and memory");
    println!("  quit             exit the shell");
    println!();
    println!("text segment starts at {:#010X}", Bus::TEXT_START);
}
