use crate::command::Command;
use anyhow::Result;
use std::io::Write;
use std::rc::Rc;

/// A ceiling light. Stateless: nothing tracks whether it is already on,
/// so turning it on twice narrates twice.
pub struct Light;

impl Light {
    pub fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "The light is on")?;
        Ok(())
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "The light is off")?;
        Ok(())
    }
}

/// A ceiling fan, as stateless as the light.
pub struct Fan;

impl Fan {
    pub fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "The fan is on")?;
        Ok(())
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "The fan is off")?;
        Ok(())
    }
}

/// Turns a shared light on.
pub struct LightOnCommand {
    light: Rc<Light>,
}

impl LightOnCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.turn_on(out)
    }
}

/// Turns a shared light off.
pub struct LightOffCommand {
    light: Rc<Light>,
}

impl LightOffCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.turn_off(out)
    }
}

/// Turns a shared fan on.
pub struct FanOnCommand {
    fan: Rc<Fan>,
}

impl FanOnCommand {
    pub fn new(fan: Rc<Fan>) -> Self {
        Self { fan }
    }
}

impl Command for FanOnCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.fan.turn_on(out)
    }
}

/// Turns a shared fan off.
pub struct FanOffCommand {
    fan: Rc<Fan>,
}

impl FanOffCommand {
    pub fn new(fan: Rc<Fan>) -> Self {
        Self { fan }
    }
}

impl Command for FanOffCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.fan.turn_off(out)
    }
}
