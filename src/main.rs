use anyhow::Context;
use rppal::i2c::I2c;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod driver;

use cli::Invocation;
use driver::waketimer::{WakeTimer, ADDRESS};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    match cli::parse(&args)? {
        Invocation::Read { register } => {
            let i2c = I2c::new().context("failed to open i2c bus")?;
            let mut timer = WakeTimer {
                i2c,
                address: ADDRESS,
            };

            let value = timer.read_register(register)?;
            debug!("register {register} holds {value}");

            println!("{value}");
        }
        Invocation::Write { register, value } => {
            let i2c = I2c::new().context("failed to open i2c bus")?;
            let mut timer = WakeTimer {
                i2c,
                address: ADDRESS,
            };

            timer.write_register(register, value)?;
            debug!("wrote {value} to register {register}");
        }
        Invocation::Usage { program } => {
            // the usage path never opens the bus
            print!("{}", cli::usage(&program));
        }
    }

    Ok(())
}
