// Line driver for the 5x5x5 cube (board-independent)
//
// Applies a resolved LedAddress to the 15 output lines. The one-hot
// layer/anode guarantee comes from rollcore::cube::resolve; this layer
// only moves pins.

use embedded_hal::digital::OutputPin;

use rollcore::cube::{GRID, LedAddress, resolve};

pub struct CubeDriver<P> {
    layers: [P; GRID],
    anodes: [P; GRID],
    cathodes: [P; GRID],
}

impl<P: OutputPin> CubeDriver<P> {
    pub fn new(layers: [P; GRID], anodes: [P; GRID], cathodes: [P; GRID]) -> Self {
        Self {
            layers,
            anodes,
            cathodes,
        }
    }

    /// Drive every line to match `addr`. An out-of-range layer or
    /// column turns its whole bank off.
    pub fn set_address(&mut self, addr: &LedAddress) {
        let levels = resolve(addr);
        Self::apply(&mut self.layers, &levels.layers);
        Self::apply(&mut self.anodes, &levels.anodes);
        Self::apply(&mut self.cathodes, &levels.cathodes);
    }

    fn apply(bank: &mut [P; GRID], levels: &[bool; GRID]) {
        for (pin, &high) in bank.iter_mut().zip(levels) {
            if high {
                let _ = pin.set_high();
            } else {
                let _ = pin.set_low();
            }
        }
    }
}
