//! Push-based streaming extraction: per-text/per-block/per-page callbacks
//! under a memory budget, plus a bounded-chunk writer path.

use crate::error::{Error, Result};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracks outstanding reservations against a fixed byte budget. Reservations
/// are released (subtracted back) on drop, so a caller never has to remember
/// to call a release method explicitly.
pub struct MemoryBudget {
    limit: usize,
    used: AtomicUsize,
}

impl MemoryBudget {
    pub fn new(limit_bytes: usize) -> Self {
        Self {
            limit: limit_bytes,
            used: AtomicUsize::new(0),
        }
    }

    pub fn used_bytes(&self) -> usize {
        self.used.load(Ordering::SeqCst)
    }

    /// Reserve `bytes` against the budget. Fails with
    /// [`Error::MemoryLimitExceeded`] without reserving anything if doing so
    /// would exceed the limit.
    pub fn reserve(&self, operation: &str, bytes: usize) -> Result<MemoryReservation<'_>> {
        let mut current = self.used.load(Ordering::SeqCst);
        loop {
            let next = current + bytes;
            if next > self.limit {
                return Err(Error::MemoryLimitExceeded {
                    operation: operation.to_string(),
                    requested: bytes,
                    budget: self.limit,
                });
            }
            match self.used.compare_exchange_weak(current, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Ok(MemoryReservation { budget: self, bytes }),
                Err(observed) => current = observed,
            }
        }
    }
}

/// RAII handle releasing its reservation back to the budget on drop.
pub struct MemoryReservation<'a> {
    budget: &'a MemoryBudget,
    bytes: usize,
}

impl Drop for MemoryReservation<'_> {
    fn drop(&mut self) {
        self.budget.used.fetch_sub(self.bytes, Ordering::SeqCst);
    }
}

/// Callbacks a [`StreamProcessor`] drives as it walks a page's extracted text.
/// Default no-op bodies let callers implement only the granularity they need.
pub trait StreamSink {
    fn on_page(&mut self, _page_index: usize, _text: &str) -> Result<()> {
        Ok(())
    }
    fn on_block(&mut self, _page_index: usize, _block: &str) -> Result<()> {
        Ok(())
    }
    fn on_text(&mut self, _page_index: usize, _chunk: &str) -> Result<()> {
        Ok(())
    }
}

/// Drives per-page/per-block/per-text callbacks over already-extracted page
/// text, under a shared [`MemoryBudget`]. Blocks are paragraphs (text
/// separated by a blank line); text chunks are bounded slices of a block.
pub struct StreamProcessor {
    budget: MemoryBudget,
    text_chunk_bytes: usize,
}

impl StreamProcessor {
    pub fn new(budget_bytes: usize) -> Self {
        Self {
            budget: MemoryBudget::new(budget_bytes),
            text_chunk_bytes: 4096,
        }
    }

    pub fn with_text_chunk_size(mut self, bytes: usize) -> Self {
        self.text_chunk_bytes = bytes.max(1);
        self
    }

    pub fn budget(&self) -> &MemoryBudget {
        &self.budget
    }

    /// Push one page's worth of text through the sink's callbacks, reserving
    /// and releasing budget at each granularity.
    pub fn process_page<S: StreamSink>(&self, page_index: usize, page_text: &str, sink: &mut S) -> Result<()> {
        let _page_reservation = self.budget.reserve("stream page callback", page_text.len())?;
        sink.on_page(page_index, page_text)?;

        for block in page_text.split("\n\n").filter(|b| !b.is_empty()) {
            let _block_reservation = self.budget.reserve("stream block callback", block.len())?;
            sink.on_block(page_index, block)?;

            for chunk in chunk_str(block, self.text_chunk_bytes) {
                let _text_reservation = self.budget.reserve("stream text callback", chunk.len())?;
                sink.on_text(page_index, chunk)?;
            }
        }
        Ok(())
    }
}

/// Writes extracted text to a sink in bounded chunks, bufio-style, instead
/// of buffering a whole document's text in one allocation.
pub struct ChunkedWriter<W: Write> {
    inner: W,
    chunk_bytes: usize,
}

impl<W: Write> ChunkedWriter<W> {
    pub fn new(inner: W, chunk_bytes: usize) -> Self {
        Self {
            inner,
            chunk_bytes: chunk_bytes.max(1),
        }
    }

    pub fn write_text(&mut self, text: &str) -> Result<()> {
        for chunk in chunk_str(text, self.chunk_bytes) {
            self.inner.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Error::from)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Splits `s` into chunks of at most `max_bytes`, never crossing a char boundary.
fn chunk_str(s: &str, max_bytes: usize) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < s.len() {
        let mut end = (start + max_bytes).min(s.len());
        while end > start && !s.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            end = s.len();
        }
        chunks.push(&s[start..end]);
        start = end;
    }
    chunks
}
