#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use log::warn;
use serialport::SerialPort;

use super::{LinkError, SerialLink};

/// Baud rate of the board UART (8N1).
pub const DEFAULT_BAUD: u32 = 9600;

/// UART link backed by a host serial device.
pub struct UartLink {
    port: Box<dyn SerialPort>,
    rx: VecDeque<u8>,
}

impl UartLink {
    pub fn open(path: &str, baud: u32) -> anyhow::Result<Self> {
        let port = serialport::new(path, baud)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .timeout(Duration::from_millis(0))
            .open()
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path, e))?;
        Ok(Self {
            port,
            rx: VecDeque::new(),
        })
    }

    fn fill(&mut self) {
        let available = match self.port.bytes_to_read() {
            Ok(0) => return,
            Ok(n) => n as usize,
            Err(e) => {
                warn!("serial status error: {}", e);
                return;
            }
        };
        let mut buf = vec![0u8; available];
        match self.port.read(&mut buf) {
            Ok(n) => self.rx.extend(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::WouldBlock => {}
            Err(e) => warn!("serial read error: {}", e),
        }
    }
}

impl SerialLink for UartLink {
    fn read_byte(&mut self) -> Option<u8> {
        if self.rx.is_empty() {
            self.fill();
        }
        self.rx.pop_front()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.port.write_all(bytes).map_err(|e| match e.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => LinkError::Busy,
            ErrorKind::BrokenPipe | ErrorKind::NotConnected => LinkError::Closed,
            _ => LinkError::Device,
        })
    }
}
