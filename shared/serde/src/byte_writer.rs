/// Sink for serialized bytes.
pub trait ByteWrite {
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    /// Total bytes written so far
    fn bytes_written(&self) -> usize;
}

/// A growable buffer that serialized values are appended to.
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn to_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl ByteWrite for ByteWriter {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn bytes_written(&self) -> usize {
        self.buffer.len()
    }
}

/// A ByteWrite implementation that only measures, used to size values
/// without allocating.
#[derive(Default)]
pub struct ByteCounter {
    count: usize,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }
}

impl ByteWrite for ByteCounter {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.count += bytes.len();
    }

    fn bytes_written(&self) -> usize {
        self.count
    }
}
