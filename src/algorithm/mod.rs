mod bluesteins_algorithm;
mod butterflies;
mod mixed_radix;
mod radix4;
mod radixn;

pub use self::bluesteins_algorithm::BluesteinsAlgorithm;
pub use self::mixed_radix::MixedRadix;
pub use self::radix4::Radix4;
