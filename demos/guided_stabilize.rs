// demos/guided_stabilize.rs

use guided_stabilize::config::GuidedStabilizeConfig;
use guided_stabilize::vehicle::{
    AltitudeReport, AttitudeControl, PilotInput, PilotSticks, SafetyState,
};
use guided_stabilize::GuidedStabilize;

// A vehicle that prints whatever the mode commands.
struct PrintingCopter {
    armed: bool,
    sticks: PilotSticks<f32>,
}

impl AttitudeControl<f32> for PrintingCopter {
    fn apply_angle_target(&mut self, roll: f32, pitch: f32, yaw_rate: f32, smoothing_gain: f32) {
        println!(
            "    Angle Target: {:-9.2}, {:-9.2}, {:-9.2}  (smoothing {:.1})",
            roll, pitch, yaw_rate, smoothing_gain
        );
    }

    fn set_throttle(&mut self, value: f32, angle_boost: bool, filter: f32) {
        println!(
            "    Throttle:     {:-9.2}  (boost {}, filter {:.1} Hz)",
            value, angle_boost, filter
        );
    }

    fn set_unstabilized_throttle(&mut self, value: f32, filter: f32) {
        println!(
            "    Unstabilized: {:-9.2}  (filter {:.1} Hz)",
            value, filter
        );
    }
}

impl AltitudeReport<f32> for PrintingCopter {
    fn set_altitude_target(&mut self, value: f32) {
        println!("    Altitude:     {:-9.2}", value);
    }
}

impl PilotInput<f32> for PrintingCopter {
    fn sticks(&self) -> PilotSticks<f32> {
        self.sticks
    }

    // Sticks span -1000..1000, lean angles up to 45 degrees.
    fn pilot_lean_angles(&self, roll_stick: f32, pitch_stick: f32) -> (f32, f32) {
        (roll_stick * 4.5, pitch_stick * 4.5)
    }

    // Up to 200 degrees per second.
    fn pilot_yaw_rate(&self, yaw_stick: f32) -> f32 {
        yaw_stick * 20.0
    }

    fn pilot_throttle(&self, throttle_stick: f32) -> f32 {
        throttle_stick
    }

    fn simple_mode_transform(&mut self) {}
}

impl SafetyState for PrintingCopter {
    fn is_armed(&self) -> bool {
        self.armed
    }

    fn is_throttle_zero(&self) -> bool {
        self.sticks.throttle <= 0.0
    }

    fn is_landed_complete(&self) -> bool {
        !self.armed
    }

    fn trigger_slow_start(&mut self, enable: bool) {
        println!("    Slow Start:   {}", enable);
    }
}

fn main() {
    let mut config = GuidedStabilizeConfig::<f32>::new();

    // Medium stick feel and a 2 Hz throttle filter.
    config.rc_feel_rp = 50;
    config.throttle_filter = 2.0;

    let mode = match GuidedStabilize::with_config(config) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        }
    };

    let mut copter = PrintingCopter {
        armed: false,
        sticks: PilotSticks {
            roll: 100.0,
            pitch: -50.0,
            yaw: 10.0,
            throttle: 500.0,
        },
    };

    println!("init");
    mode.init(&mut copter, false);

    println!("t = 0, disarmed");
    mode.run(&mut copter);

    copter.armed = true;
    println!("t = 1, armed, pilot flying");
    mode.run(&mut copter);

    mode.set_target_attitude(0.1, 0.0);
    println!("t = 2, guidance roll 0.1 rad");
    mode.run(&mut copter);

    mode.set_target_yaw_rate(-0.2);
    println!("t = 3, guidance yaw rate -0.2 rad/s");
    mode.run(&mut copter);

    mode.unset_target_attitude();
    mode.unset_target_yaw_rate();
    println!("t = 4, pilot back in control");
    mode.run(&mut copter);
}
