//! In-memory [Transport] that records traffic for unit tests

use std::vec::Vec;

use crate::traits::Transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Init,
    Command(u8),
    Data(Vec<u8>),
    Read,
    ReadRegister(u8),
    Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Failure;

#[derive(Default)]
pub(crate) struct Recorder {
    pub events: Vec<Event>,
    /// Fail every call once this many have succeeded
    fail_after: Option<usize>,
    /// Value returned by reads
    pub read_value: u16,
}

impl Recorder {
    pub fn failing_after(calls: usize) -> Self {
        Recorder {
            fail_after: Some(calls),
            ..Default::default()
        }
    }

    fn record(&mut self, event: Event) -> Result<(), Failure> {
        if self.fail_after.is_some_and(|n| self.events.len() >= n) {
            return Err(Failure);
        }
        self.events.push(event);
        Ok(())
    }

    /// Opcodes in the order they went out
    pub fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Command(op) => Some(*op),
                _ => None,
            })
            .collect()
    }

    /// Every data byte in the order it went out
    pub fn data_stream(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Data(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl Transport for Recorder {
    type Error = Failure;

    fn init(&mut self) -> Result<(), Failure> {
        self.record(Event::Init)
    }

    fn write_command(&mut self, opcode: u8) -> Result<(), Failure> {
        self.record(Event::Command(opcode))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Failure> {
        self.record(Event::Data(data.to_vec()))
    }

    fn read_data(&mut self) -> Result<u16, Failure> {
        self.record(Event::Read)?;
        Ok(self.read_value)
    }

    fn read_register(&mut self, opcode: u8) -> Result<u16, Failure> {
        self.record(Event::ReadRegister(opcode))?;
        Ok(self.read_value)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<(), Failure> {
        self.record(Event::Delay(ms))
    }
}
