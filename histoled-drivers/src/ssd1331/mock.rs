//! Recording mocks shared by the transport and controller tests

use core::cell::{Cell, RefCell};

use histoled_hal::{Delay, OutputPin, SpiBus, SpiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Cs(bool),
    Dc(bool),
    Rst(bool),
    Byte(u8),
    Failed(u8),
    DelayUs(u32),
    DelayMs(u32),
}

#[derive(Debug, Clone, Copy)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

/// Everything the mocks saw, in order
pub struct Log {
    events: RefCell<heapless::Vec<Event, 4096>>,
    transfers: Cell<usize>,
    fail_at: Cell<Option<usize>>,
}

impl Log {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(heapless::Vec::new()),
            transfers: Cell::new(0),
            fail_at: Cell::new(None),
        }
    }

    /// Make the `index`-th transfer (0-based, counted from creation) time out
    pub fn fail_transfer(&self, index: usize) {
        self.fail_at.set(Some(index));
    }

    pub fn transfers(&self) -> usize {
        self.transfers.get()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event).unwrap();
    }

    pub fn events(&self) -> heapless::Vec<Event, 4096> {
        self.events.borrow().clone()
    }

    /// Bytes that actually went out
    pub fn bytes(&self) -> heapless::Vec<u8, 1024> {
        let mut out = heapless::Vec::new();
        for event in self.events.borrow().iter() {
            if let Event::Byte(b) = event {
                out.push(*b).unwrap();
            }
        }
        out
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

pub struct MockPin<'a> {
    log: &'a Log,
    line: Line,
}

impl<'a> MockPin<'a> {
    pub fn new(log: &'a Log, line: Line) -> Self {
        Self { log, line }
    }

    fn record(&self, high: bool) {
        let event = match self.line {
            Line::Cs => Event::Cs(high),
            Line::Dc => Event::Dc(high),
            Line::Rst => Event::Rst(high),
        };
        self.log.push(event);
    }
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }
}

pub struct MockBus<'a> {
    log: &'a Log,
}

impl<'a> MockBus<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl SpiBus for MockBus<'_> {
    fn transfer_byte(&mut self, byte: u8, _timeout_us: u32) -> Result<u8, SpiError> {
        let index = self.log.transfers.get();
        self.log.transfers.set(index + 1);
        if self.log.fail_at.get() == Some(index) {
            self.log.push(Event::Failed(byte));
            return Err(SpiError::Timeout);
        }
        self.log.push(Event::Byte(byte));
        Ok(0)
    }
}

pub struct MockDelay<'a> {
    log: &'a Log,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl Delay for MockDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}
