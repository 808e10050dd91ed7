//! Command descriptors and the executor that plays them to a [Transport]
//!
//! A controller command is an opcode, an optional payload and a delay to wait out
//! before the next command may follow. Sequences are plain slices of descriptors,
//! ended by [SEQUENCE_END] or by the end of the slice, whichever comes first.

use crate::error::ErrorKind;
use crate::log::trace;
use crate::st7789v::Command;
use crate::traits::Transport;

/// Reserved opcode marking the end of a sequence. Never transmitted.
pub const SEQUENCE_END: u8 = 0xFF;

/// The controller takes at most this many parameter bytes per command
pub const MAX_PAYLOAD_LEN: usize = 255;

/// One controller command: opcode, parameters and the delay that follows them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandDescriptor<'a> {
    opcode: u8,
    post_delay_ms: u16,
    payload: &'a [u8],
}

impl<'a> CommandDescriptor<'a> {
    /// Command with parameters, followed by a wait of `post_delay_ms`
    pub const fn new(command: Command, post_delay_ms: u16, payload: &'a [u8]) -> Self {
        Self::raw(command as u8, post_delay_ms, payload)
    }

    /// Command without parameters
    pub const fn bare(command: Command, post_delay_ms: u16) -> Self {
        Self::raw(command as u8, post_delay_ms, &[])
    }

    /// Descriptor for an opcode not covered by [Command]
    pub const fn raw(opcode: u8, post_delay_ms: u16, payload: &'a [u8]) -> Self {
        CommandDescriptor {
            opcode,
            post_delay_ms,
            payload,
        }
    }

    /// The sequence terminator
    pub const fn end() -> Self {
        Self::raw(SEQUENCE_END, 0, &[])
    }

    /// Opcode sent with D/CX low
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Milliseconds to wait once the parameters are out
    pub const fn post_delay_ms(&self) -> u16 {
        self.post_delay_ms
    }

    /// Parameter bytes sent with D/CX high
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Whether this descriptor terminates a sequence
    pub const fn is_end(&self) -> bool {
        self.opcode == SEQUENCE_END
    }
}

/// Sends one command, its parameters, then waits out its delay.
///
/// The terminator is not a command: passing it sends nothing.
pub fn run_command<T: Transport>(
    transport: &mut T,
    command: &CommandDescriptor<'_>,
) -> Result<(), ErrorKind<T::Error>> {
    if command.is_end() {
        return Ok(());
    }
    check_payload(command)?;
    send(transport, command)
}

/// Runs a sequence in order, stopping at the first terminator.
///
/// All payloads up to the terminator are checked before anything is sent.
/// A transport error aborts the sequence; the commands already sent stay applied.
pub fn run_commands<T: Transport>(
    transport: &mut T,
    sequence: &[CommandDescriptor<'_>],
) -> Result<(), ErrorKind<T::Error>> {
    let commands = || sequence.iter().take_while(|command| !command.is_end());

    for command in commands() {
        check_payload(command)?;
    }
    for command in commands() {
        send(transport, command)?;
    }
    Ok(())
}

fn check_payload<E>(command: &CommandDescriptor<'_>) -> Result<(), ErrorKind<E>> {
    if command.payload.len() > MAX_PAYLOAD_LEN {
        return Err(ErrorKind::PayloadTooLong(command.payload.len()));
    }
    Ok(())
}

fn send<T: Transport>(
    transport: &mut T,
    command: &CommandDescriptor<'_>,
) -> Result<(), ErrorKind<T::Error>> {
    trace!(
        "cmd {:#x} len {} wait {}ms",
        command.opcode,
        command.payload.len(),
        command.post_delay_ms
    );
    transport.write_command(command.opcode)?;
    if !command.payload.is_empty() {
        transport.write_data(command.payload)?;
    }
    if command.post_delay_ms > 0 {
        transport.delay_ms(u32::from(command.post_delay_ms))?;
    }
    Ok(())
}
