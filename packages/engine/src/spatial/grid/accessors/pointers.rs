use super::super::*;

impl Grid {
    // === Raw pointer for JS interop ===
    // `Material` is `repr(u8)`, so the cell buffer doubles as a byte array of ids.
    pub fn types_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }
}
