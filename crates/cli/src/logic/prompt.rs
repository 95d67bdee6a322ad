use std::io::{BufRead, Write};

use crate::prelude::*;

pub const SEED_PHRASE_PROMPT: &str = "Enter seed phrase (or press enter to generate new wallet): ";
pub const COUNT_PROMPT: &str = "Enter number of transactions to send: ";

fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, CliError>
where
    R: BufRead,
    W: Write,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// The entered phrase, `None` when the operator just pressed enter.
pub fn prompt_seed_phrase<R, W>(input: &mut R, output: &mut W) -> Result<Option<String>, CliError>
where
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, output, SEED_PHRASE_PROMPT)?;
    Ok(Some(line).filter(|l| !l.is_empty()))
}

pub fn prompt_count<R, W>(input: &mut R, output: &mut W) -> Result<u64, CliError>
where
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, output, COUNT_PROMPT)?;
    line.parse::<u64>()
        .map_err(|_| CliError::InvalidCount { bad_value: line })
}
