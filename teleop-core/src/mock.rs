//! Recording doubles for the collaborator traits, shared by the unit tests.

extern crate std;

use core::cell::Cell;
use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use embassy_time::Instant;
use embedded_hal_async::delay::DelayNs;

use crate::display::{line_from, DisplayError, Line, TextDisplay};
use crate::input::{InputError, InputSource};
use crate::motor::{MotorDriver, MotorError};
use crate::system::{SystemUtilities, UtilityError};
use crate::time::Clock;
use crate::types::InputSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorCall {
    SetSpeeds(i16, i16),
    Stop,
}

#[derive(Default)]
pub struct RecordingMotors {
    pub calls: Vec<MotorCall>,
    pub fail: bool,
}

impl RecordingMotors {
    pub fn last(&self) -> Option<MotorCall> {
        self.calls.last().copied()
    }

    pub fn drove(&self) -> bool {
        self.calls
            .iter()
            .any(|call| matches!(call, MotorCall::SetSpeeds(..)))
    }
}

impl MotorDriver for RecordingMotors {
    fn set_speeds(&mut self, left: i16, right: i16) -> Result<(), MotorError> {
        if self.fail {
            return Err(MotorError::Io);
        }
        self.calls.push(MotorCall::SetSpeeds(left, right));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        self.calls.push(MotorCall::Stop);
        Ok(())
    }
}

/// Keeps the frame being composed and every frame that was flushed.
#[derive(Default)]
pub struct RecordingDisplay {
    pub line1: String,
    pub line2: String,
    pub frames: Vec<(String, String)>,
    pub clears: usize,
}

impl RecordingDisplay {
    pub fn screen(&self) -> (&str, &str) {
        self.frames
            .last()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .unwrap_or(("", ""))
    }

    pub fn showed(&self, text: &str) -> bool {
        self.frames
            .iter()
            .any(|(a, b)| a == text || b == text)
    }
}

impl TextDisplay for RecordingDisplay {
    fn clear(&mut self) {
        self.line1.clear();
        self.line2.clear();
        self.clears += 1;
    }

    fn set_line1(&mut self, text: &str) {
        self.line1 = text.to_string();
    }

    fn set_line2(&mut self, text: &str) {
        self.line2 = text.to_string();
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.frames.push((self.line1.clone(), self.line2.clone()));
        Ok(())
    }
}

pub struct FakeSystem {
    pub voltage: Result<&'static str, UtilityError>,
    pub address: Result<&'static str, UtilityError>,
    pub battery_queries: usize,
    pub halts: usize,
    pub reboots: usize,
}

impl Default for FakeSystem {
    fn default() -> Self {
        Self {
            voltage: Ok("7.84V"),
            address: Ok("192.168.1.20"),
            battery_queries: 0,
            halts: 0,
            reboots: 0,
        }
    }
}

impl SystemUtilities for FakeSystem {
    fn main_battery_voltage(&mut self) -> Result<Line, UtilityError> {
        self.battery_queries += 1;
        self.voltage.map(line_from)
    }

    fn ip_address(&mut self) -> Result<Line, UtilityError> {
        self.address.map(line_from)
    }

    fn halt(&mut self) -> Result<(), UtilityError> {
        self.halts += 1;
        Ok(())
    }

    fn reboot(&mut self) -> Result<(), UtilityError> {
        self.reboots += 1;
        Ok(())
    }
}

/// One scripted step of a [`ScriptedInput`].
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// `acquire` reports no device.
    Absent,
    /// `acquire` binds a device.
    Bind,
    /// `receive` yields this sample.
    Sample(InputSample),
    /// The device disconnects; `receive` fails.
    Unplug,
    /// `receive` fails with this error.
    Fail(InputError),
}

/// Plays back a script; an exhausted script looks like an absent device.
pub struct ScriptedInput {
    steps: VecDeque<Step>,
    connected: bool,
    pub acquires: usize,
    pub battery: Option<f32>,
}

impl ScriptedInput {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            connected: false,
            acquires: 0,
            battery: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    async fn acquire(&mut self) -> Result<(), InputError> {
        self.acquires += 1;
        match self.steps.pop_front() {
            Some(Step::Bind) => {
                self.connected = true;
                Ok(())
            }
            Some(Step::Absent) | None => Err(InputError::Unavailable),
            Some(other) => panic!("script expected acquire, got {other:?}"),
        }
    }

    async fn receive(&mut self) -> Result<InputSample, InputError> {
        match self.steps.pop_front() {
            Some(Step::Sample(sample)) => Ok(sample),
            Some(Step::Unplug) | None => {
                self.connected = false;
                Err(InputError::Disconnected)
            }
            Some(Step::Fail(error)) => Err(error),
            Some(other) => panic!("script expected receive, got {other:?}"),
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn battery_level(&self) -> Option<f32> {
        self.battery
    }
}

/// Clock that advances by a fixed step every time it is read.
pub struct SteppingClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl SteppingClock {
    pub fn new(step_ms: u64) -> Self {
        Self {
            now: Cell::new(0),
            step_ms,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let now = self.now.get();
        self.now.set(now + self.step_ms);
        Instant::from_millis(now)
    }
}

/// Completes immediately, remembering what was asked for.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ns: Vec<u32>,
}

impl RecordingDelay {
    /// Total requested wait; long waits arrive split into several calls.
    pub fn total_ms(&self) -> u64 {
        self.waits_ns.iter().map(|&ns| u64::from(ns)).sum::<u64>() / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns);
    }
}
