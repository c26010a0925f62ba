//! Driver for the WakeMyPi timer sidecar.
//!
//! An ATmega on the Pi's i2c lines acts as a slave at a fixed address and
//! exposes four byte-wide registers: hours, minutes, seconds and an enable
//! flag. Writing 1 to the enable register starts the countdown; when it
//! reaches zero the MCU pulls SCL low, which wakes a halted Pi.

use std::fmt;

use embedded_hal::blocking::i2c::{Write, WriteRead};
use thiserror::Error;
use tracing::trace;

/// Fixed bus address of the timer MCU.
pub const ADDRESS: u8 = 0x04;

pub mod registers {
    pub const HOURS: u8 = 0x01;
    pub const MINUTES: u8 = 0x02;
    pub const SECONDS: u8 = 0x03;
    pub const ENABLE: u8 = 0x04;
}

pub struct WakeTimer<I2C> {
    pub i2c: I2C,
    pub address: u8,
}

#[derive(Debug, Error)]
pub enum Error<E: fmt::Debug> {
    #[error("i2c transaction failed: {0:?}")]
    I2c(E),
}

impl<I2C, E> WakeTimer<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: fmt::Debug,
{
    /// Read one register as a single write-then-read transaction
    /// (the SMBus "read byte data" shape).
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];

        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(Error::I2c)?;

        trace!("read register {register:#04x} -> {}", buf[0]);

        Ok(buf[0])
    }

    /// Write one register as a single write transaction
    /// (the SMBus "write byte data" shape).
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        trace!("write register {register:#04x} <- {value}");

        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::I2c)
    }

    /// Program the countdown duration without starting it.
    pub fn set_countdown(&mut self, hours: u8, minutes: u8, seconds: u8) -> Result<(), Error<E>> {
        self.write_register(registers::HOURS, hours)?;
        self.write_register(registers::MINUTES, minutes)?;
        self.write_register(registers::SECONDS, seconds)
    }

    /// Read back the programmed duration as (hours, minutes, seconds).
    pub fn countdown(&mut self) -> Result<(u8, u8, u8), Error<E>> {
        Ok((
            self.read_register(registers::HOURS)?,
            self.read_register(registers::MINUTES)?,
            self.read_register(registers::SECONDS)?,
        ))
    }

    /// Start the countdown. The Pi can be halted once this returns.
    pub fn start(&mut self) -> Result<(), Error<E>> {
        self.write_register(registers::ENABLE, 1)
    }

    pub fn enabled(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_register(registers::ENABLE)? != 0)
    }
}
