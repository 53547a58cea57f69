//! Packet assembly from mapper and latch output.

use crate::latch::EnableState;
use crate::mapping::{Axis, AxisReading};
use joystick_proto::Packet;

/// Copy this cycle's axis commands and enable state into a wire record.
#[must_use]
pub fn build_packet(readings: &[AxisReading; Axis::COUNT], enable: EnableState) -> Packet {
    let [x, y, z] = readings;
    Packet {
        x: x.command(),
        y: y.command(),
        z: z.command(),
        enable: enable.is_enabled(),
    }
}
