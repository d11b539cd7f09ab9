// Poll for FeliCa cards on an RC-S660/S attached to a serial port.
//
//   cargo run --example poll_loop --features serial -- /dev/ttyUSB0 [0003]
//
// The optional second argument is the system code to poll, in hex
// ("0003" or "00 03"). When a
// card is found a Read Without Encryption of block 0 of service 090F is
// sent to it. Set RUST_LOG=debug to see every frame on the wire.

use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use rcs660s::prelude::*;
use rcs660s::transport::serial::DEFAULT_BAUD_RATE;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: poll_loop <serial-port> [system-code]");
    };
    let system_code = match args.next() {
        Some(s) => match parse_hex(&s).map_err(anyhow::Error::msg)?[..] {
            [hi, lo] => SystemCode::new(u16::from_be_bytes([hi, lo])),
            _ => bail!("system code must be two bytes, got '{}'", s),
        },
        None => SystemCode::ANY,
    };

    let transport = SerialTransport::open(&path, DEFAULT_BAUD_RATE)
        .with_context(|| format!("opening {}", path))?;
    let dev = DeviceBuilder::new()
        .with_transport(transport)
        .with_timeout(ms(500))
        .build_uninitialized()?;
    let mut dev = dev.initialize()?;

    for failure in dev.init_report().failures() {
        println!("init step '{}' failed: {}", failure.step, failure.error);
    }

    println!("polling system code {} (Ctrl-C to stop)", system_code);
    loop {
        if let Some(card) = dev.polling(system_code).unwrap_or(None) {
            println!("card: {}", card);

            let mut cmd = vec![0x06];
            cmd.extend_from_slice(card.idm.as_bytes());
            cmd.extend_from_slice(&[0x01, 0x0F, 0x09, 0x01, 0x80, 0x00]);
            match dev.card_command(&cmd, 64) {
                Ok(resp) => println!("  read: {}", bytes_to_hex_spaced(&resp)),
                Err(e) => println!("  read failed: {}", e),
            }
        }
        thread::sleep(Duration::from_millis(300));
    }
}
