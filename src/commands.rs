use crate::command::Invocation;
use crate::types::Mode;

/// Builds the `xrandr` and `bspc` invocations used to query and change outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commands {
    /// Program used to query and configure outputs
    pub xrandr: String,
    /// Program used to talk to the window manager
    pub bspc: String,
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            xrandr: "xrandr".to_string(),
            bspc: "bspc".to_string(),
        }
    }
}

impl Commands {
    pub fn new(xrandr: impl Into<String>, bspc: impl Into<String>) -> Self {
        Self {
            xrandr: xrandr.into(),
            bspc: bspc.into(),
        }
    }

    /// `xrandr -q`
    pub fn query(&self) -> Invocation {
        Invocation::new(&self.xrandr, ["-q"])
    }

    /// Sets mode and framebuffer of `output` to `mode` and makes it the primary output
    pub fn set_mode(&self, output: &str, mode: &Mode) -> Invocation {
        Invocation::new(
            &self.xrandr,
            [
                "--output",
                output,
                "--mode",
                mode.as_str(),
                "--fb",
                mode.as_str(),
                "--primary",
            ],
        )
    }

    pub fn power_off(&self, output: &str) -> Invocation {
        Invocation::new(&self.xrandr, ["--output", output, "--off"])
    }

    /// Moves the bspwm desktop `desktop` to the monitor named `output`
    pub fn relocate_desktop(&self, desktop: &str, output: &str) -> Invocation {
        Invocation::new(&self.bspc, ["desktop", desktop, "--to-monitor", output])
    }

    /// Asks bspwm to reload and reflow its monitors
    pub fn refresh(&self) -> Invocation {
        Invocation::new(&self.bspc, ["wm", "-r"])
    }
}
