//! dnfmt -- canonicalize Distinguished Names.
//!
//! Reads DNs from the command line, a file, or stdin (one per line) and
//! prints each one in canonical form, split into RDNs, or as an LDIF
//! `dn:` line.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use distinguishedname::{ldif_dn_line, parse, serialize, Dn};

const USAGE: &str = "usage: dnfmt [--raw] [--split | --ldif] [-f FILE] [DN ...]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Canonical,
    Split,
    Ldif,
}

#[derive(Debug)]
struct Cmdline {
    normalize_attributes: bool,
    output: Output,
    file: Option<String>,
    dns: Vec<String>,
}

enum Parsed {
    Run(Cmdline),
    Help,
}

fn parse_args(args: &[String]) -> Result<Parsed, String> {
    let mut cmdline = Cmdline {
        normalize_attributes: true,
        output: Output::Canonical,
        file: None,
        dns: Vec::new(),
    };
    let mut output_set = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "--raw" => cmdline.normalize_attributes = false,
            "--split" | "--ldif" => {
                if output_set {
                    return Err("--split and --ldif are mutually exclusive".into());
                }
                output_set = true;
                cmdline.output = if arg == "--split" {
                    Output::Split
                } else {
                    Output::Ldif
                };
            }
            "-f" | "--file" => match iter.next() {
                Some(path) => cmdline.file = Some(path.clone()),
                None => return Err(format!("{} requires an argument", arg)),
            },
            "--" => {
                cmdline.dns.extend(iter.by_ref().cloned());
            }
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(format!("unknown option: {}", s));
            }
            _ => cmdline.dns.push(arg.clone()),
        }
    }
    Ok(Parsed::Run(cmdline))
}

fn read_inputs(cmdline: &Cmdline) -> io::Result<Vec<String>> {
    if !cmdline.dns.is_empty() {
        return Ok(cmdline.dns.clone());
    }
    let lines = if let Some(path) = &cmdline.file {
        fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect::<Vec<_>>()
    } else {
        io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
    };
    Ok(lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}

fn write_dn(w: &mut dyn Write, dn: &Dn, output: Output) -> io::Result<()> {
    match output {
        Output::Canonical => writeln!(w, "{}", serialize(dn)),
        Output::Ldif => writeln!(w, "{}", ldif_dn_line(dn)),
        Output::Split => {
            for rdn in dn {
                writeln!(w, "{}", rdn.avas().join(" + "))?;
            }
            Ok(())
        }
    }
}

/// Process every input, returning the exit status.
fn run(cmdline: &Cmdline, inputs: &[String], w: &mut dyn Write) -> io::Result<i32> {
    let mut status = 0;
    let mut first = true;
    for input in inputs {
        match parse(input, cmdline.normalize_attributes) {
            Ok(dn) => {
                if cmdline.output == Output::Split && !first {
                    writeln!(w)?;
                }
                first = false;
                write_dn(w, &dn, cmdline.output)?;
            }
            Err(e) => {
                eprintln!("dnfmt: {}: {}", input, e);
                status = 1;
            }
        }
    }
    Ok(status)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmdline = match parse_args(&args) {
        Ok(Parsed::Run(cmdline)) => cmdline,
        Ok(Parsed::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(msg) => {
            eprintln!("dnfmt: {}", msg);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let inputs = read_inputs(&cmdline).unwrap_or_else(|e| {
        match &cmdline.file {
            Some(path) => eprintln!("dnfmt: {}: {}", path, e),
            None => eprintln!("dnfmt: {}", e),
        }
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = run(&cmdline, &inputs, &mut out)
        .and_then(|status| out.flush().map(|()| status))
        .unwrap_or_else(|e| {
            eprintln!("dnfmt: {}", e);
            1
        });
    process::exit(status);
}
