use zeroize::Zeroize;

/// The engine's life-cycle state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Uninitialised,
    Ready,
    ReseedRequired,
    /// The reason the instance was poisoned.
    Error(String),
}

/// Working secret state for a single [`crate::DrbgEngine`] instance.
///
/// `v` and `c` are sized to the owning profile's `seedlen` at
/// construction, zeroized on drop.
pub struct DrbgState {
    pub v: Vec<u8>,
    pub c: Vec<u8>,
    pub reseed_counter: u32,
    pub mode: Mode,
}

impl DrbgState {
    pub fn new(seedlen: usize) -> Self {
        DrbgState {
            v: vec![0u8; seedlen],
            c: vec![0u8; seedlen],
            reseed_counter: 1,
            mode: Mode::Uninitialised,
        }
    }
}

impl Drop for DrbgState {
    fn drop(&mut self) {
        self.v.zeroize();
        self.c.zeroize();
    }
}
