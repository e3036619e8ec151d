//! ADXL345 driver core
//!
//! Construction, the init sequence, range/rate/power settings and the
//! measurement pipeline. Detection features live in
//! [`super::detection`].
//!
//! # Power-up sequence
//!
//! 1. POWER_CTL cleared, then MEASURE set
//! 2. Calibration reset to identity
//! 3. DATA_FORMAT cleared, FULL_RES set and read back
//! 4. Interrupt, activity/tap and FIFO registers zeroed
//!
//! Every setter is a read-modify-write on a single register and keeps
//! the bits it does not own.

use inclino_core::config::{
    DataRate, DeviceConfig, Range, Resolution, SensorConfig, WakeUpFrequency,
};
use inclino_core::measurement::{
    self, AngleOffsets, Angles, Axes, Calibration, GValues, Orientation, RawSample,
};
use inclino_core::registers::{bw_rate, data_format, power_ctl, reg, DATA_LEN, DATA_START};
use inclino_core::traits::RegisterInterface;
use inclino_hal::{I2cBus, OutputPin, SpiBus};

use super::Error;
use crate::transport::{I2cInterface, SpiInterface};

/// Registers cleared by [`Adxl345::init`] so detection starts disabled
const BASELINE_REGISTERS: [u8; 10] = [
    reg::INT_ENABLE,
    reg::INT_MAP,
    reg::TIME_INACT,
    reg::THRESH_INACT,
    reg::ACT_INACT_CTL,
    reg::DUR,
    reg::LATENT,
    reg::THRESH_TAP,
    reg::TAP_AXES,
    reg::WINDOW,
];

/// ADXL345 3-axis accelerometer
///
/// Owns the register transport plus everything needed to turn raw
/// counts into physical values: the last written range/resolution,
/// the per-axis calibration and the angle baseline.
pub struct Adxl345<T> {
    pub(crate) bus: T,
    config: DeviceConfig,
    calibration: Calibration,
    angle_offsets: AngleOffsets,
}

impl<I2C: I2cBus> Adxl345<I2cInterface<I2C>> {
    /// Driver on an I2C bus at `address` (0x53 or 0x1D)
    pub fn new_i2c(i2c: I2C, address: u8) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }
}

impl<SPI: SpiBus, CS: OutputPin> Adxl345<SpiInterface<SPI, CS>> {
    /// Driver on a 4-wire SPI bus
    ///
    /// The bus must run in mode 3, see [`crate::SPI_CONFIG`].
    pub fn new_spi(spi: SPI, cs: CS) -> Self {
        Self::new(SpiInterface::new(spi, cs))
    }
}

impl<T> Adxl345<T> {
    /// Wrap an existing transport; no bus traffic until [`Self::init`]
    pub fn new(bus: T) -> Self {
        Self {
            bus,
            config: DeviceConfig::default(),
            calibration: Calibration::IDENTITY,
            angle_offsets: AngleOffsets::default(),
        }
    }

    /// Give back the transport, consuming the driver
    pub fn release(self) -> T {
        self.bus
    }

    /// Range and resolution as last written
    pub fn device_config(&self) -> DeviceConfig {
        self.config
    }

    /// Current counts-to-3.9 mg multiplier
    pub fn range_factor(&self) -> f32 {
        self.config.range_factor()
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Install calibration obtained elsewhere
    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.calibration = calibration;
    }

    /// Compute calibration from the raw extremes of each axis
    ///
    /// Take `min`/`max` from [`Self::raw_values`] at full resolution with
    /// each axis pointing straight down and straight up.
    pub fn set_corr_factors(&mut self, min: Axes<f32>, max: Axes<f32>) {
        self.calibration = Calibration::from_extremes(min, max);
    }

    pub fn angle_offsets(&self) -> &AngleOffsets {
        &self.angle_offsets
    }

    pub fn set_angle_offsets(&mut self, offsets: AngleOffsets) {
        self.angle_offsets = offsets;
    }
}

impl<T: RegisterInterface> Adxl345<T> {
    /// Bring the device from reset defaults to a known state
    ///
    /// Measurement on, full resolution at ±2 g, every detection feature
    /// and the FIFO disabled, calibration reset. Fails with
    /// [`Error::Verification`] if FULL_RES does not stick.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        self.bus.write_register(reg::POWER_CTL, 0)?;
        self.set_measure_mode(true)?;

        self.calibration = Calibration::IDENTITY;
        self.angle_offsets = AngleOffsets::default();

        self.bus.write_register(reg::DATA_FORMAT, 0)?;
        self.set_full_resolution(true)?;

        let format = self.bus.read_register(reg::DATA_FORMAT)?;
        if format & (1 << data_format::FULL_RES) == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADXL345 FULL_RES readback failed: {=u8:#04x}", format);
            self.config = DeviceConfig::new(Resolution::Fixed10Bit, Range::from_bits(format));
            return Err(Error::Verification);
        }

        for register in BASELINE_REGISTERS {
            self.bus.write_register(register, 0)?;
        }
        self.read_and_clear_interrupts()?;
        self.bus.write_register(reg::FIFO_CTL, 0)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ADXL345 initialized");

        Ok(())
    }

    /// Apply resolution, range, rate and power mode in one go
    pub fn configure(&mut self, config: SensorConfig) -> Result<(), Error<T::Error>> {
        self.set_full_resolution(config.resolution == Resolution::Full)?;
        self.set_range(config.range)?;
        self.set_data_rate(config.rate)?;
        self.set_low_power(config.low_power)?;
        Ok(())
    }

    /// Contents of DEVID, [`DEVICE_ID`](inclino_core::registers::DEVICE_ID) for a genuine part
    pub fn device_id(&mut self) -> Result<u8, Error<T::Error>> {
        Ok(self.bus.read_register(reg::DEVID)?)
    }

    // ---- Data rate and format ----

    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<T::Error>> {
        self.bus
            .modify_register(reg::BW_RATE, bw_rate::RATE_MASK, rate.bits())?;
        Ok(())
    }

    pub fn data_rate(&mut self) -> Result<DataRate, Error<T::Error>> {
        Ok(DataRate::from_bits(self.bus.read_register(reg::BW_RATE)?))
    }

    /// Reduced power operation (BW_RATE LOW_POWER)
    pub fn set_low_power(&mut self, low_power: bool) -> Result<(), Error<T::Error>> {
        self.bus
            .write_bit(reg::BW_RATE, bw_rate::LOW_POWER, low_power)?;
        Ok(())
    }

    pub fn set_range(&mut self, range: Range) -> Result<(), Error<T::Error>> {
        self.bus
            .modify_register(reg::DATA_FORMAT, data_format::RANGE_MASK, range.bits())?;
        self.config.range = range;
        Ok(())
    }

    /// Range as stored on the device
    pub fn range(&mut self) -> Result<Range, Error<T::Error>> {
        Ok(Range::from_bits(self.bus.read_register(reg::DATA_FORMAT)?))
    }

    /// Switch between full resolution and fixed 10-bit output
    ///
    /// The range is taken from the device in the same read, so the range
    /// factor is right even if DATA_FORMAT was changed behind our back.
    pub fn set_full_resolution(&mut self, full: bool) -> Result<(), Error<T::Error>> {
        let current = self.bus.read_register(reg::DATA_FORMAT)?;
        let bit = 1 << data_format::FULL_RES;
        let value = if full { current | bit } else { current & !bit };
        self.bus.write_register(reg::DATA_FORMAT, value)?;

        let resolution = if full {
            Resolution::Full
        } else {
            Resolution::Fixed10Bit
        };
        self.config = DeviceConfig::new(resolution, Range::from_bits(current));
        Ok(())
    }

    // ---- Power ----

    /// Raw POWER_CTL value
    pub fn power_ctl(&mut self) -> Result<u8, Error<T::Error>> {
        Ok(self.bus.read_register(reg::POWER_CTL)?)
    }

    /// Measurement (true) or standby (false)
    pub fn set_measure_mode(&mut self, measure: bool) -> Result<(), Error<T::Error>> {
        self.bus
            .write_bit(reg::POWER_CTL, power_ctl::MEASURE, measure)?;
        Ok(())
    }

    /// Enter or leave sleep, keeping the wake-up frequency
    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), Error<T::Error>> {
        self.update_sleep(sleep, None)
    }

    /// Enter or leave sleep and set the wake-up frequency
    pub fn set_sleep_with_wake_up(
        &mut self,
        sleep: bool,
        wake_up: WakeUpFrequency,
    ) -> Result<(), Error<T::Error>> {
        self.update_sleep(sleep, Some(wake_up))
    }

    fn update_sleep(
        &mut self,
        sleep: bool,
        wake_up: Option<WakeUpFrequency>,
    ) -> Result<(), Error<T::Error>> {
        let mut value = self.bus.read_register(reg::POWER_CTL)?;
        if let Some(freq) = wake_up {
            value = (value & !power_ctl::WAKEUP_MASK) | freq.bits();
        }

        if sleep {
            value |= 1 << power_ctl::SLEEP;
            self.bus.write_register(reg::POWER_CTL, value)?;
            return Ok(());
        }

        // SLEEP may only be cleared from standby, then measurement is
        // re-enabled in a separate write.
        self.set_measure_mode(false)?;
        value &= !((1 << power_ctl::SLEEP) | (1 << power_ctl::MEASURE));
        self.bus.write_register(reg::POWER_CTL, value)?;
        self.set_measure_mode(true)
    }

    /// Automatic sleep on inactivity, keeping the wake-up frequency
    ///
    /// Enabling also sets LINK, which auto-sleep depends on.
    pub fn set_auto_sleep(&mut self, auto_sleep: bool) -> Result<(), Error<T::Error>> {
        self.update_auto_sleep(auto_sleep, None)
    }

    pub fn set_auto_sleep_with_wake_up(
        &mut self,
        auto_sleep: bool,
        wake_up: WakeUpFrequency,
    ) -> Result<(), Error<T::Error>> {
        self.update_auto_sleep(auto_sleep, Some(wake_up))
    }

    fn update_auto_sleep(
        &mut self,
        auto_sleep: bool,
        wake_up: Option<WakeUpFrequency>,
    ) -> Result<(), Error<T::Error>> {
        if auto_sleep {
            self.set_link_bit(true)?;
        }

        let mut value = self.bus.read_register(reg::POWER_CTL)?;
        if let Some(freq) = wake_up {
            value = (value & !power_ctl::WAKEUP_MASK) | freq.bits();
        }
        if auto_sleep {
            value |= 1 << power_ctl::AUTO_SLEEP;
        } else {
            value &= !(1 << power_ctl::AUTO_SLEEP);
        }
        self.bus.write_register(reg::POWER_CTL, value)?;
        Ok(())
    }

    /// Serial activity/inactivity detection (POWER_CTL LINK)
    pub fn set_link_bit(&mut self, link: bool) -> Result<(), Error<T::Error>> {
        self.bus.write_bit(reg::POWER_CTL, power_ctl::LINK, link)?;
        Ok(())
    }

    pub fn is_asleep(&mut self) -> Result<bool, Error<T::Error>> {
        Ok(self.act_tap_status()?.asleep())
    }

    // ---- Readings ----

    /// One coherent x/y/z sample in raw counts
    pub fn raw_values(&mut self) -> Result<RawSample, Error<T::Error>> {
        let mut buf = [0u8; DATA_LEN];
        self.bus.read_registers(DATA_START, &mut buf)?;
        Ok(RawSample::from_le_bytes(buf))
    }

    /// Raw counts minus the calibration offset
    pub fn corrected_raw_values(&mut self) -> Result<Axes<f32>, Error<T::Error>> {
        let raw = self.raw_values()?;
        Ok(measurement::corrected_raw(
            raw,
            &self.calibration,
            self.config.range_factor(),
        ))
    }

    /// Calibrated acceleration in g
    pub fn g_values(&mut self) -> Result<GValues, Error<T::Error>> {
        let corrected = self.corrected_raw_values()?;
        Ok(measurement::g_values(
            corrected,
            &self.calibration,
            self.config.range_factor(),
        ))
    }

    /// Per-axis tilt in degrees
    pub fn angles(&mut self) -> Result<Angles, Error<T::Error>> {
        Ok(measurement::angles(self.g_values()?))
    }

    /// Per-axis tilt relative to the captured baseline
    pub fn corrected_angles(&mut self) -> Result<Angles, Error<T::Error>> {
        let angles = self.angles()?;
        Ok(measurement::relative_angles(angles, &self.angle_offsets))
    }

    /// Capture the current angles as the zero baseline
    pub fn measure_angle_offsets(&mut self) -> Result<(), Error<T::Error>> {
        self.angle_offsets = self.angles()?;
        Ok(())
    }

    pub fn orientation(&mut self) -> Result<Orientation, Error<T::Error>> {
        Ok(Orientation::from_angles(self.angles()?))
    }

    /// Pitch in degrees, from a fresh g reading
    pub fn pitch(&mut self) -> Result<f32, Error<T::Error>> {
        Ok(measurement::pitch(self.g_values()?))
    }

    /// Roll in degrees, from a fresh g reading
    pub fn roll(&mut self) -> Result<f32, Error<T::Error>> {
        Ok(measurement::roll(self.g_values()?))
    }
}
