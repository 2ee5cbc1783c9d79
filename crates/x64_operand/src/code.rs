/// Anything holding assembled machine code that can be called into.
pub trait CodeBuffer {
    /// Address of the first instruction in the buffer.
    fn entry_address(&self) -> *const u8;
}

impl CodeBuffer for [u8] {
    fn entry_address(&self) -> *const u8 {
        self.as_ptr()
    }
}

impl CodeBuffer for Vec<u8> {
    fn entry_address(&self) -> *const u8 {
        self.as_ptr()
    }
}

impl CodeBuffer for Box<[u8]> {
    fn entry_address(&self) -> *const u8 {
        self.as_ptr()
    }
}
