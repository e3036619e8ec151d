//! Simulated register file for driver tests

use inclino_core::registers::{reg, DEVICE_ID};
use inclino_core::traits::RegisterInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// 64 byte-wide registers with auto-increment and a write log
pub struct SimulatedRegisters {
    pub regs: [u8; 64],
    pub writes: Vec<(u8, u8)>,
    /// (register, length) per read transaction
    pub reads: Vec<(u8, usize)>,
    /// Bits that never latch when written, per register
    pub stuck_low: Vec<(u8, u8)>,
    pub fail: bool,
}

impl SimulatedRegisters {
    pub fn new() -> Self {
        let mut regs = [0u8; 64];
        regs[reg::DEVID as usize] = DEVICE_ID;
        regs[reg::BW_RATE as usize] = 0x0A;
        Self {
            regs,
            writes: Vec::new(),
            reads: Vec::new(),
            stuck_low: Vec::new(),
            fail: false,
        }
    }

    pub fn with(mut self, reg: u8, value: u8) -> Self {
        self.regs[reg as usize] = value;
        self
    }

    pub fn get(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    /// Values written to `reg`, oldest first
    pub fn writes_to(&self, reg: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl RegisterInterface for SimulatedRegisters {
    type Error = BusFault;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        let stuck = self
            .stuck_low
            .iter()
            .filter(|(r, _)| *r == reg)
            .fold(0u8, |acc, (_, mask)| acc | mask);
        self.writes.push((reg, value));
        self.regs[reg as usize] = value & !stuck;
        Ok(())
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.reads.push((reg, buf.len()));
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.regs[reg as usize + i];
        }
        if reg == reg::INT_SOURCE {
            self.regs[reg::INT_SOURCE as usize] = 0;
        }
        Ok(())
    }
}

/// The same register file behind an I2C device address
pub struct SimulatedI2c {
    pub address: u8,
    pub regs: SimulatedRegisters,
}

impl inclino_hal::I2cBus for SimulatedI2c {
    type Error = BusFault;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusFault> {
        match (address == self.address, data) {
            (true, [reg, value]) => self.regs.write_register(*reg, *value),
            _ => Err(BusFault),
        }
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusFault> {
        match (address == self.address, write_data) {
            (true, [reg]) => self.regs.read_registers(*reg, read_buf),
            _ => Err(BusFault),
        }
    }
}
