use std::num::ParseIntError;

use thiserror::Error;

/// What one run of the tool should do, selected by argument count alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Read one register and print its value.
    Read { register: u8 },

    /// Write one value to one register.
    Write { register: u8, value: u8 },

    /// Wrong argument count; print usage and do nothing else.
    Usage { program: String },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid register {0:?}")]
    Register(String, #[source] ParseIntError),
    #[error("invalid value {0:?}")]
    Value(String, #[source] ParseIntError),
}

/// Parses the full argument list, program name included.
///
/// Register and value must both fit in a byte; registers outside the
/// device's 1..=4 map are passed through to the bus uninterpreted.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Invocation, ParseError> {
    match args {
        [_, register] => Ok(Invocation::Read {
            register: parse_register(register.as_ref())?,
        }),
        [_, register, value] => Ok(Invocation::Write {
            register: parse_register(register.as_ref())?,
            value: parse_value(value.as_ref())?,
        }),
        _ => Ok(Invocation::Usage {
            program: program_name(args),
        }),
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "To read from a register: {program} <register>\n\
         To write to a register:  {program} <register> <value>\n"
    )
}

fn parse_register(arg: &str) -> Result<u8, ParseError> {
    arg.parse()
        .map_err(|err| ParseError::Register(arg.to_owned(), err))
}

fn parse_value(arg: &str) -> Result<u8, ParseError> {
    arg.parse()
        .map_err(|err| ParseError::Value(arg.to_owned(), err))
}

fn program_name<S: AsRef<str>>(args: &[S]) -> String {
    args.first()
        .map(|arg| arg.as_ref().to_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
