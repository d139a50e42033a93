//! Probe an ESAM attached to a spidev node.
//!
//! Usage:
//!   cargo run -p libesam --example esam_probe --features spidev -- \
//!       [/dev/spidevB.C] [SESSION_INIT_HEX SIGNATURE_HEX]
//!
//! Set `RUST_LOG=libesam=trace` to see the raw frames on the wire.

use anyhow::{Context, bail};
use libesam::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(device) => SpiConfig::new(device),
        None => SpiConfig::default(),
    };

    println!("Opening {} ...", config.device.display());
    let mut esam = EsamBuilder::new()
        .with_config(config)
        .build()
        .context("failed to open ESAM")?;

    let info = esam.esam_info().context("esam info query failed")?;
    println!("\n=== ESAM info ===");
    println!("  ESAM number:                 {}", info.esam_number());
    println!("  ESAM version:                {}", info.esam_version());
    println!("  Symmetric key version:       {}", info.symmetric_key_version());
    println!(
        "  Certificate versions:        main station {}, terminal {}",
        info.main_station_certificate_version(),
        info.terminal_certificate_version()
    );
    println!(
        "  Session time:                {} remaining of {}",
        info.session_time_remaining(),
        info.session_time_limit()
    );
    println!(
        "  ASCTR / ARCTR / AGSEQ:       {} / {} / {}",
        info.asctr(),
        info.arctr(),
        info.agseq()
    );
    println!("  Terminal cert number:        {}", info.terminal_certificate_number());
    println!("  Main station cert number:    {}", info.main_station_certificate_number());

    println!("\n=== Certificates ===");
    match esam.master_station_certificate() {
        Ok(cert) => println!("  Main station ({} bytes): {}", cert.len() / 2, cert),
        Err(e) => println!("  Main station certificate error: {}", e),
    }
    match esam.terminal_certificate() {
        Ok(cert) => println!("  Terminal ({} bytes): {}", cert.len() / 2, cert),
        Err(e) => println!("  Terminal certificate error: {}", e),
    }

    if let Some(init_hex) = args.next() {
        let Some(sig_hex) = args.next() else {
            bail!("a signature must follow the session init value");
        };
        let init = parse_hex(&init_hex).map_err(anyhow::Error::msg)?;
        let signature = parse_hex(&sig_hex).map_err(anyhow::Error::msg)?;

        println!("\n=== Session key negotiation ===");
        let key = esam
            .session_key_connect(&init, &signature)
            .context("session key negotiation failed")?;
        println!("  Session data: {}", key.session_data());
        println!("  Signature:    {}", key.signature());
    }

    esam.close()?;
    Ok(())
}
