//! GPIO pin abstractions

/// Digital output pin
///
/// Used as the SPI chip select line. Fallible so that expander-backed
/// pins can report their own bus errors.
pub trait OutputPin {
    /// Error type for pin operations
    type Error;

    /// Set the pin high (logic 1)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Set the pin low (logic 0)
    fn set_low(&mut self) -> Result<(), Self::Error>;

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}
