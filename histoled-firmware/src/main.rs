//! histoled - live histogram on an SSD1331 color OLED
//!
//! Main firmware binary for RP2040 boards. One task samples an ADC input
//! into a histogram; another owns the display and redraws the bar chart
//! whenever a new frame arrives.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use histoled_core::config::{ChartConfig, ControllerConfig};
use histoled_drivers::ssd1331::Ssd1331;
use histoled_hal::spi::SpiConfig;
use histoled_hal::Compat;

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("histoled firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // SPI0 to the panel, transmit only (SCK=GPIO18, MOSI=GPIO19)
    let bus_config = SpiConfig::default();
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, rp_spi_config(&bus_config));
    info!("SPI initialized at {} Hz", bus_config.frequency);

    // Control lines: CS=GPIO17, DC=GPIO20, RST=GPIO21
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    let display = Ssd1331::new(
        Compat(spi),
        Compat(cs),
        Compat(dc),
        Compat(rst),
        Compat(Delay),
        ControllerConfig::default(),
    );

    // Sampled input on ADC0 (GPIO26)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channel = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let source = tasks::AdcSource::new(adc, channel, tasks::SamplerConfig::default().full_scale);
    info!("ADC initialized");

    let chart_config = ChartConfig::default();
    if let Err(e) = chart_config.validate() {
        error!("Invalid chart config: {}", e);
    }

    spawner
        .spawn(tasks::chart_task(display, chart_config, tasks::FLASH_MS))
        .unwrap();
    spawner
        .spawn(tasks::sampler_task(source, tasks::SamplerConfig::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Map the bus settings onto the RP2040 SPI block
fn rp_spi_config(config: &SpiConfig) -> spi::Config {
    let mut cfg = spi::Config::default();
    cfg.frequency = config.frequency;
    cfg.polarity = if config.mode.idle_high() {
        Polarity::IdleHigh
    } else {
        Polarity::IdleLow
    };
    cfg.phase = if config.mode.capture_on_second_transition() {
        Phase::CaptureOnSecondTransition
    } else {
        Phase::CaptureOnFirstTransition
    };
    cfg
}
