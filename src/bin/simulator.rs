//! Runs a breathing session on the host, with PWM writes going to the log.

use std::process::ExitCode;

use breathing_led::host::{LogChannel, StdClock, StdDelay};
use breathing_led::{
    BreathConfig, BreathError, ChannelId, DEFAULT_FREQUENCY_HZ, Led, ONBOARD_LED, RGB_LEDS,
    RgbPack, SessionSummary, run_session,
};
use log::{error, info};
use rand_core::OsRng;

/// Drive the three-channel RGB preset instead of the on-board LED.
const USE_RGB_LED: bool = false;

fn run() -> Result<SessionSummary, BreathError> {
    let clock = StdClock;
    let mut delay = StdDelay;
    let mut rng = OsRng;

    if USE_RGB_LED {
        let mut pack: RgbPack<LogChannel> =
            RgbPack::from_configs(&RGB_LEDS, DEFAULT_FREQUENCY_HZ, |config| {
                LogChannel::new(config.pin)
            })?;
        run_session(&mut pack, &BreathConfig::rgb(), &clock, &mut delay, &mut rng)
    } else {
        let mut led = Led::new(
            ChannelId(ONBOARD_LED.pin),
            LogChannel::new(ONBOARD_LED.pin),
            ONBOARD_LED.max_duty,
        )?;
        run_session(&mut led, &BreathConfig::default(), &clock, &mut delay, &mut rng)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(summary) => {
            info!(
                "{} breaths in {:.0} s",
                summary.breaths,
                summary.elapsed.as_secs_f32()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
