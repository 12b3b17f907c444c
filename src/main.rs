// Purpose: Reads a numeric sequence and an instruction string, decodes the sequence and prints it.

use clap::Parser;
use m_deque::{Error, ExitStatus, config::Config, decoder};
use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

const SEQUENCE_PROMPT: &str = "Enter the sequence to process:";
const INSTRUCTIONS_PROMPT: &str = "Enter the sequence of instructions:";
const OUTPUT_HEADER: &str = "Decoded sequence is:";

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(err) = m_deque::config::init_tracing(&config.log_level) {
        eprintln!("ERROR: {err}");
        return err.exit_status().into();
    }

    match run(&config) {
        Ok(rendered) => {
            println!("{OUTPUT_HEADER}");
            println!("{rendered}");
            ExitStatus::Success.into()
        }
        Err(err) => {
            tracing::warn!(status = err.exit_status().code(), "decoding failed");
            eprintln!("ERROR: {err}");
            err.exit_status().into()
        }
    }
}

fn run(config: &Config) -> Result<String, Error> {
    let stdin = io::stdin();
    let prompt = !config.quiet && stdin.is_terminal();
    let mut input = stdin.lock();

    let sequence = match &config.sequence {
        Some(sequence) => sequence.clone(),
        None => read_line(&mut input, prompt.then_some(SEQUENCE_PROMPT))?,
    };
    let instructions = match &config.instructions {
        Some(instructions) => instructions.clone(),
        None => read_line(&mut input, prompt.then_some(INSTRUCTIONS_PROMPT))?,
    };

    let deque = decoder::run(&sequence, &instructions)?;
    Ok(deque.to_string())
}

// A missing line reads as an empty one.
fn read_line(input: &mut impl BufRead, prompt: Option<&str>) -> Result<String, Error> {
    if let Some(prompt) = prompt {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{prompt}")?;
        stdout.flush()?;
    }
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
