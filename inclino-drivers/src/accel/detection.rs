//! Interrupts, motion detection and FIFO

use heapless::{String, Vec};
use inclino_core::config::detection::STATUS_LABEL_LEN;
use inclino_core::config::{
    ActTapStatus, ActivityConfig, DoubleTapConfig, FifoConfig, FifoMode, FifoStatus,
    FreeFallConfig, InactivityConfig, Interrupt, InterruptPin, InterruptPolarity,
    InterruptSource, TapConfig,
};
use inclino_core::measurement::RawSample;
use inclino_core::registers::{act_inact_ctl, data_format, fifo, reg, tap_axes};
use inclino_core::traits::RegisterInterface;

use super::{Adxl345, Error};

/// Samples a single FIFO drain can return: 32 queued plus the one
/// held in the output registers
pub const FIFO_READ_CAPACITY: usize = fifo::DEPTH + 1;

impl<T: RegisterInterface> Adxl345<T> {
    // ---- Interrupts ----

    /// Enable `interrupt` and route it to `pin`
    pub fn set_interrupt(
        &mut self,
        interrupt: Interrupt,
        pin: InterruptPin,
    ) -> Result<(), Error<T::Error>> {
        self.bus.write_bit(reg::INT_ENABLE, interrupt.bit(), true)?;
        self.bus
            .write_bit(reg::INT_MAP, interrupt.bit(), pin == InterruptPin::Int2)?;
        Ok(())
    }

    /// Disable `interrupt`, leaving its pin mapping alone
    pub fn delete_interrupt(&mut self, interrupt: Interrupt) -> Result<(), Error<T::Error>> {
        self.bus.write_bit(reg::INT_ENABLE, interrupt.bit(), false)?;
        Ok(())
    }

    pub fn set_interrupt_polarity(
        &mut self,
        polarity: InterruptPolarity,
    ) -> Result<(), Error<T::Error>> {
        self.bus.write_bit(
            reg::DATA_FORMAT,
            data_format::INT_INVERT,
            polarity == InterruptPolarity::ActiveLow,
        )?;
        Ok(())
    }

    /// Read INT_SOURCE, which also clears the latched events
    pub fn read_and_clear_interrupts(&mut self) -> Result<InterruptSource, Error<T::Error>> {
        Ok(InterruptSource(self.bus.read_register(reg::INT_SOURCE)?))
    }

    // ---- Free fall, activity, tap ----

    pub fn set_free_fall(&mut self, config: FreeFallConfig) -> Result<(), Error<T::Error>> {
        self.bus
            .write_register(reg::THRESH_FF, config.threshold_bits())?;
        self.bus.write_register(reg::TIME_FF, config.time_bits())?;
        Ok(())
    }

    pub fn set_activity(&mut self, config: ActivityConfig) -> Result<(), Error<T::Error>> {
        self.bus
            .write_register(reg::THRESH_ACT, config.threshold_bits())?;
        self.bus.modify_register(
            reg::ACT_INACT_CTL,
            act_inact_ctl::ACT_MASK,
            config.control_bits(),
        )?;
        Ok(())
    }

    pub fn set_inactivity(&mut self, config: InactivityConfig) -> Result<(), Error<T::Error>> {
        self.bus
            .write_register(reg::THRESH_INACT, config.threshold_bits())?;
        self.bus.modify_register(
            reg::ACT_INACT_CTL,
            act_inact_ctl::INACT_MASK,
            config.control_bits(),
        )?;
        self.bus.write_register(reg::TIME_INACT, config.time_s)?;
        Ok(())
    }

    /// Tap axes, threshold, duration and latency
    pub fn set_tap(&mut self, config: TapConfig) -> Result<(), Error<T::Error>> {
        self.bus
            .modify_register(reg::TAP_AXES, tap_axes::AXES_MASK, config.axes.bits())?;
        self.bus
            .write_register(reg::THRESH_TAP, config.threshold_bits())?;
        self.bus.write_register(reg::DUR, config.duration_bits())?;
        self.bus.write_register(reg::LATENT, config.latency_bits())?;
        Ok(())
    }

    /// Suppress bit and second-tap window; use with [`Self::set_tap`]
    pub fn set_double_tap(&mut self, config: DoubleTapConfig) -> Result<(), Error<T::Error>> {
        self.bus
            .write_bit(reg::TAP_AXES, tap_axes::SUPPRESS, config.suppress)?;
        self.bus.write_register(reg::WINDOW, config.window_bits())?;
        Ok(())
    }

    /// Raw ACT_TAP_STATUS
    pub fn act_tap_status(&mut self) -> Result<ActTapStatus, Error<T::Error>> {
        Ok(ActTapStatus(self.bus.read_register(reg::ACT_TAP_STATUS)?))
    }

    /// Labels of the axes that triggered, limited to enabled axes
    pub fn act_tap_status_label(
        &mut self,
    ) -> Result<String<STATUS_LABEL_LEN>, Error<T::Error>> {
        let act_ctl = self.bus.read_register(reg::ACT_INACT_CTL)?;
        let tap_ctl = self.bus.read_register(reg::TAP_AXES)?;
        let status = self.act_tap_status()?;
        Ok(status.masked(act_ctl, tap_ctl).label())
    }

    // ---- FIFO ----

    /// Trigger pin and sample count; the FIFO mode is kept
    pub fn set_fifo_parameters(&mut self, config: FifoConfig) -> Result<(), Error<T::Error>> {
        self.bus
            .modify_register(reg::FIFO_CTL, !fifo::MODE_MASK, config.bits())?;
        Ok(())
    }

    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), Error<T::Error>> {
        self.bus.modify_register(
            reg::FIFO_CTL,
            fifo::MODE_MASK,
            mode.bits() << fifo::MODE_SHIFT,
        )?;
        Ok(())
    }

    pub fn fifo_mode(&mut self) -> Result<FifoMode, Error<T::Error>> {
        Ok(FifoMode::from_bits(self.bus.read_register(reg::FIFO_CTL)?))
    }

    pub fn fifo_status(&mut self) -> Result<FifoStatus, Error<T::Error>> {
        Ok(FifoStatus(self.bus.read_register(reg::FIFO_STATUS)?))
    }

    /// Re-arm trigger mode after an event (bypass, then trigger)
    pub fn reset_trigger(&mut self) -> Result<(), Error<T::Error>> {
        self.set_fifo_mode(FifoMode::Bypass)?;
        self.set_fifo_mode(FifoMode::Trigger)
    }

    /// Drain the samples currently in the FIFO
    ///
    /// Each sample is its own 6-byte burst; reading DATAZ1 pops the next
    /// entry into the output registers.
    pub fn read_fifo(&mut self) -> Result<Vec<RawSample, FIFO_READ_CAPACITY>, Error<T::Error>> {
        let entries = usize::from(self.fifo_status()?.entries()).min(FIFO_READ_CAPACITY);
        let mut samples = Vec::new();
        for _ in 0..entries {
            if samples.push(self.raw_values()?).is_err() {
                break;
            }
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accel::mock::SimulatedRegisters;
    use inclino_core::config::{AxisSet, Coupling, DataRate, Range};
    use inclino_core::registers::bw_rate;
    use proptest::prelude::*;

    fn initialized() -> Adxl345<SimulatedRegisters> {
        let mut accel = Adxl345::new(SimulatedRegisters::new());
        accel.init().unwrap();
        accel.bus.writes.clear();
        accel
    }

    #[test]
    fn test_set_interrupt_routing() {
        let mut accel = initialized();
        accel
            .set_interrupt(Interrupt::DataReady, InterruptPin::Int1)
            .unwrap();
        accel
            .set_interrupt(Interrupt::SingleTap, InterruptPin::Int2)
            .unwrap();
        assert_eq!(accel.bus.get(reg::INT_ENABLE), 0xC0);
        assert_eq!(accel.bus.get(reg::INT_MAP), 0x40);

        // Moving to INT1 clears the map bit again
        accel
            .set_interrupt(Interrupt::SingleTap, InterruptPin::Int1)
            .unwrap();
        assert_eq!(accel.bus.get(reg::INT_MAP), 0x00);

        accel.delete_interrupt(Interrupt::DataReady).unwrap();
        assert_eq!(accel.bus.get(reg::INT_ENABLE), 0x40);
    }

    #[test]
    fn test_interrupt_polarity_is_written() {
        let mut accel = initialized();
        accel
            .set_interrupt_polarity(InterruptPolarity::ActiveLow)
            .unwrap();
        assert_eq!(accel.bus.get(reg::DATA_FORMAT), 0b0010_1000);
        accel
            .set_interrupt_polarity(InterruptPolarity::ActiveHigh)
            .unwrap();
        assert_eq!(accel.bus.get(reg::DATA_FORMAT), 0b0000_1000);
    }

    #[test]
    fn test_read_and_clear_interrupts() {
        let mut accel = initialized();
        accel.bus.regs[reg::INT_SOURCE as usize] = 0x84;
        let source = accel.read_and_clear_interrupts().unwrap();
        assert!(source.contains(Interrupt::DataReady));
        assert!(source.contains(Interrupt::FreeFall));
        assert!(accel.read_and_clear_interrupts().unwrap().is_empty());
    }

    #[test]
    fn test_free_fall_minimums() {
        let mut accel = initialized();
        accel
            .set_free_fall(FreeFallConfig {
                threshold_g: 0.0,
                time_ms: 0.0,
            })
            .unwrap();
        assert_eq!(accel.bus.get(reg::THRESH_FF), 1);
        assert_eq!(accel.bus.get(reg::TIME_FF), 1);
    }

    #[test]
    fn test_activity_and_inactivity_share_register() {
        let mut accel = initialized();
        accel
            .set_activity(ActivityConfig {
                coupling: Coupling::Ac,
                axes: AxisSet::XYZ,
                threshold_g: 0.5,
            })
            .unwrap();
        accel
            .set_inactivity(InactivityConfig {
                coupling: Coupling::Dc,
                axes: AxisSet::new(true, false, false),
                threshold_g: 0.25,
                time_s: 10,
            })
            .unwrap();

        assert_eq!(accel.bus.get(reg::THRESH_ACT), 8);
        assert_eq!(accel.bus.get(reg::THRESH_INACT), 4);
        assert_eq!(accel.bus.get(reg::TIME_INACT), 10);
        assert_eq!(accel.bus.get(reg::ACT_INACT_CTL), 0xF4);

        // Re-setting activity keeps the inactivity nibble
        accel
            .set_activity(ActivityConfig {
                coupling: Coupling::Dc,
                axes: AxisSet::new(false, false, true),
                threshold_g: 1.0,
            })
            .unwrap();
        assert_eq!(accel.bus.get(reg::ACT_INACT_CTL), 0x14);
    }

    #[test]
    fn test_tap_keeps_suppress_bit() {
        let mut accel = initialized();
        accel
            .set_double_tap(DoubleTapConfig {
                suppress: true,
                window_ms: 250.0,
            })
            .unwrap();
        accel
            .set_tap(TapConfig {
                axes: AxisSet::new(false, false, true),
                threshold_g: 3.0,
                duration_ms: 30.0,
                latency_ms: 100.0,
            })
            .unwrap();

        assert_eq!(accel.bus.get(reg::TAP_AXES), 0b0000_1001);
        assert_eq!(accel.bus.get(reg::THRESH_TAP), 48);
        assert_eq!(accel.bus.get(reg::DUR), 48);
        assert_eq!(accel.bus.get(reg::LATENT), 80);
        assert_eq!(accel.bus.get(reg::WINDOW), 200);
    }

    #[test]
    fn test_act_tap_status_label() {
        let mut accel = initialized();
        accel.bus.regs[reg::ACT_INACT_CTL as usize] = 0x40;
        accel.bus.regs[reg::TAP_AXES as usize] = 0x01;
        accel.bus.regs[reg::ACT_TAP_STATUS as usize] = 0x7F;
        assert_eq!(
            accel.act_tap_status_label().unwrap().as_str(),
            "TAP-Z ACT-X "
        );
        assert_eq!(accel.act_tap_status().unwrap(), ActTapStatus(0x7F));
    }

    #[test]
    fn test_fifo_fields_are_independent() {
        let mut accel = initialized();
        accel.set_fifo_mode(FifoMode::Stream).unwrap();
        accel
            .set_fifo_parameters(FifoConfig {
                trigger: InterruptPin::Int2,
                samples: 16,
            })
            .unwrap();
        assert_eq!(accel.bus.get(reg::FIFO_CTL), 0b1010_1111);
        assert_eq!(accel.fifo_mode().unwrap(), FifoMode::Stream);

        accel
            .set_fifo_parameters(FifoConfig {
                trigger: InterruptPin::Int1,
                samples: 1,
            })
            .unwrap();
        assert_eq!(accel.bus.get(reg::FIFO_CTL), 0b1000_0000);
    }

    #[test]
    fn test_reset_trigger() {
        let mut accel = initialized();
        accel.bus.regs[reg::FIFO_CTL as usize] = 0b1101_1111;
        accel.reset_trigger().unwrap();
        assert_eq!(
            accel.bus.writes_to(reg::FIFO_CTL),
            vec![0b0001_1111, 0b1101_1111]
        );
    }

    #[test]
    fn test_read_fifo() {
        let mut accel = initialized();
        accel.bus.regs[reg::FIFO_STATUS as usize] = 0x83;
        accel.bus.regs[reg::DATAX0 as usize..reg::DATAX0 as usize + 6]
            .copy_from_slice(&[0x10, 0x00, 0xF0, 0xFF, 0x00, 0x01]);

        let status = accel.fifo_status().unwrap();
        assert_eq!(status.entries(), 3);
        assert!(status.triggered());

        let samples = accel.read_fifo().unwrap();
        assert_eq!(samples.len(), 3);
        assert!(samples
            .iter()
            .all(|s| *s == RawSample::new(16, -16, 256)));
    }

    #[test]
    fn test_read_fifo_caps_at_capacity() {
        let mut accel = initialized();
        // ENTRIES reads 63, more than the part can hold
        accel.bus.regs[reg::FIFO_STATUS as usize] = fifo::ENTRIES_MASK;
        let samples = accel.read_fifo().unwrap();
        assert_eq!(samples.len(), FIFO_READ_CAPACITY);
        assert!(samples.is_full());
    }

    fn seeded(register: u8, value: u8) -> Adxl345<SimulatedRegisters> {
        Adxl345::new(SimulatedRegisters::new().with(register, value))
    }

    fn kept(accel: &Adxl345<SimulatedRegisters>, register: u8, before: u8, owned: u8) -> bool {
        accel.bus.get(register) & !owned == before & !owned
    }

    proptest! {
        #[test]
        fn prop_data_rate_keeps_low_power(before: u8, code in 0u8..16) {
            let mut accel = seeded(reg::BW_RATE, before);
            accel.set_data_rate(DataRate::from_bits(code)).unwrap();
            prop_assert!(kept(&accel, reg::BW_RATE, before, bw_rate::RATE_MASK));
        }

        #[test]
        fn prop_range_keeps_format_bits(before: u8, code in 0u8..4) {
            let mut accel = seeded(reg::DATA_FORMAT, before);
            accel.set_range(Range::from_bits(code)).unwrap();
            prop_assert!(kept(&accel, reg::DATA_FORMAT, before, data_format::RANGE_MASK));
        }

        #[test]
        fn prop_fifo_mode_keeps_parameters(before: u8, code in 0u8..4) {
            let mut accel = seeded(reg::FIFO_CTL, before);
            accel
                .set_fifo_mode(FifoMode::from_bits(code << fifo::MODE_SHIFT))
                .unwrap();
            prop_assert!(kept(&accel, reg::FIFO_CTL, before, fifo::MODE_MASK));
        }

        #[test]
        fn prop_fifo_parameters_keep_mode(before: u8, int2: bool, samples: u8) {
            let mut accel = seeded(reg::FIFO_CTL, before);
            let trigger = if int2 { InterruptPin::Int2 } else { InterruptPin::Int1 };
            accel
                .set_fifo_parameters(FifoConfig { trigger, samples })
                .unwrap();
            prop_assert!(kept(&accel, reg::FIFO_CTL, before, !fifo::MODE_MASK));
        }

        #[test]
        fn prop_activity_keeps_inactivity_nibble(
            before: u8,
            ac: bool,
            axes in 0u8..8,
            threshold_g in 0.0f32..16.0,
        ) {
            let mut accel = seeded(reg::ACT_INACT_CTL, before);
            accel
                .set_activity(ActivityConfig {
                    coupling: if ac { Coupling::Ac } else { Coupling::Dc },
                    axes: AxisSet::from_bits(axes),
                    threshold_g,
                })
                .unwrap();
            prop_assert!(kept(&accel, reg::ACT_INACT_CTL, before, act_inact_ctl::ACT_MASK));
        }

        #[test]
        fn prop_inactivity_keeps_activity_nibble(
            before: u8,
            ac: bool,
            axes in 0u8..8,
            threshold_g in 0.0f32..16.0,
            time_s: u8,
        ) {
            let mut accel = seeded(reg::ACT_INACT_CTL, before);
            accel
                .set_inactivity(InactivityConfig {
                    coupling: if ac { Coupling::Ac } else { Coupling::Dc },
                    axes: AxisSet::from_bits(axes),
                    threshold_g,
                    time_s,
                })
                .unwrap();
            prop_assert!(kept(&accel, reg::ACT_INACT_CTL, before, act_inact_ctl::INACT_MASK));
        }

        #[test]
        fn prop_tap_keeps_suppress_bit(
            before: u8,
            axes in 0u8..8,
            threshold_g in 0.0f32..16.0,
            duration_ms in 0.0f32..160.0,
            latency_ms in 0.0f32..320.0,
        ) {
            let mut accel = seeded(reg::TAP_AXES, before);
            accel
                .set_tap(TapConfig {
                    axes: AxisSet::from_bits(axes),
                    threshold_g,
                    duration_ms,
                    latency_ms,
                })
                .unwrap();
            prop_assert!(kept(&accel, reg::TAP_AXES, before, tap_axes::AXES_MASK));
        }
    }
}
