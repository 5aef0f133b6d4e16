//! Example: Building a static reference sheet programmatically
//!
//! This example lays out two boards side by side with numbered pins and
//! writes the result to `reference_sheet.svg`, without going through a
//! catalog file or a placement log.

use pinion::compose::ReferenceEntry;
use pinion::config::AppConfig;
use pinion::layout::Columns;
use pinion::PinoutBuilder;

fn pins(labels: &[&str]) -> Vec<String> {
    labels.iter().map(ToString::to_string).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raspberry_pi = pins(&[
        "3.3V",
        "5V",
        "GPIO 2 (SDA1)",
        "5V",
        "GPIO 3 (SCL1)",
        "GND",
        "GPIO 4 (GPCLK0)",
        "GPIO 14 (TXD)",
        "GND",
        "GPIO 15 (RXD)",
        "GPIO 17",
        "GPIO 18 (PCM_CLK)",
        "GPIO 27",
        "GND",
        "GPIO 22",
        "GPIO 23",
        "3.3V",
        "GPIO 24",
        "GPIO 10 (MOSI)",
        "GND",
        "GPIO 9 (MISO)",
        "GPIO 25",
        "GPIO 11 (SCLK)",
        "GPIO 8 (CE0)",
        "GND",
        "GPIO 7 (CE1)",
        "ID_SD",
        "ID_SC",
        "GPIO 5",
        "GND",
        "GPIO 6",
        "GPIO 12 (PWM0)",
        "GND",
        "GPIO 13 (PWM1)",
        "GPIO 19 (PCM_FS)",
        "GPIO 16",
        "GPIO 26",
        "GPIO 20 (PCM_DIN)",
        "GND",
        "GPIO 21 (PCM_DOUT)",
    ]);

    let arduino = pins(&[
        "5V", "GND", "GPIO 0", "GPIO 1", "GPIO 2", "GPIO 3", "GPIO 4", "GPIO 5", "GND", "GPIO 6",
        "GPIO 7", "GPIO 8", "GPIO 9", "GPIO 10", "GND", "GPIO 11", "GPIO 12", "GPIO 13", "GND",
        "GPIO 14", "GPIO 15", "GPIO 16", "GND", "GPIO 17",
    ]);

    let entries = vec![
        ReferenceEntry::new("Raspberry Pi", raspberry_pi, Columns::new(2.0, 2.5)?),
        ReferenceEntry::new("Arduino", arduino, Columns::new(4.0, 4.5)?),
    ];

    let builder = PinoutBuilder::new(AppConfig::default());
    let scene = builder.compose_reference(&entries)?;
    let svg = builder.render_svg(&scene);

    std::fs::write("reference_sheet.svg", svg)?;
    println!("Wrote reference_sheet.svg");

    Ok(())
}
