//! Headless fixed-rate driver
//!
//! Feeds scripted events into a `PanelManager`, ticks it at a fixed frame
//! rate and reports what a host would observe: shown notifications, time
//! scale changes and cursor changes.

use anyhow::{Context, Result};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::script::{Scheduled, Script};
use crate::commands::Cmd;
use crate::config::ManagerConfig;
use crate::dialog::DialogSequencer;
use crate::messages::Msg;
use crate::model::{PanelManager, PanelShown};
use crate::panel::PanelSnapshot;
use crate::update::update;

/// Something a host would observe during a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    Shown {
        /// Real seconds since the run started
        at: f64,
        /// Game time of the notification
        game_time: f64,
        panel: PanelSnapshot,
    },
    TimeScale {
        at: f64,
        scale: f32,
    },
    Cursor {
        at: f64,
        cursor: Option<String>,
    },
    Dialog {
        at: f64,
        text: Option<String>,
    },
}

pub struct Simulation {
    manager: PanelManager,
    pending: VecDeque<(f64, Scheduled)>,
    dialog: Option<DialogSequencer>,
    shown: Rc<RefCell<Vec<PanelShown>>>,
    /// Events produced by the startup group pass, reported by the first step
    startup: Vec<SimEvent>,
    frame_dt: f32,
    elapsed: f64,
    frames: u64,
}

impl Simulation {
    pub fn new(config: &ManagerConfig, script: &Script, fps: u32) -> Result<Self> {
        if fps == 0 {
            anyhow::bail!("frame rate must be at least 1");
        }

        let mut manager =
            PanelManager::from_config(config).context("invalid panel configuration")?;
        let pending: VecDeque<_> = script.schedule()?.into();

        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        manager.subscribe_shown(move |event: &PanelShown| sink.borrow_mut().push(event.clone()));

        let dialog = script
            .dialog
            .as_ref()
            .map(|d| DialogSequencer::from_script(d, manager.now()));
        if let Some(d) = &dialog {
            if manager.panel(d.panel()).is_none() {
                anyhow::bail!("dialog panel {} is not configured", d.panel());
            }
        }

        let mut sim = Self {
            manager,
            pending,
            dialog,
            shown,
            startup: Vec::new(),
            frame_dt: 1.0 / fps as f32,
            elapsed: 0.0,
            frames: 0,
        };

        let cmd = sim.manager.start();
        let mut events = Vec::new();
        sim.collect(cmd, &mut events);
        sim.startup = events;
        Ok(sim)
    }

    pub fn manager(&self) -> &PanelManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut PanelManager {
        &mut self.manager
    }

    pub fn dialog(&self) -> Option<&DialogSequencer> {
        self.dialog.as_ref()
    }

    /// Real seconds simulated so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: due script events first, then the tick
    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = std::mem::take(&mut self.startup);

        while let Some((at, _)) = self.pending.front() {
            if *at > self.elapsed {
                break;
            }
            let Some((_, scheduled)) = self.pending.pop_front() else {
                break;
            };
            let cmd = match scheduled {
                Scheduled::Msg(msg) => update(&mut self.manager, msg),
                Scheduled::NextDialog => self.advance_dialog(&mut events),
            };
            self.collect(cmd, &mut events);
        }

        let cmd = update(&mut self.manager, Msg::Tick(self.frame_dt));
        self.collect(cmd, &mut events);

        if let Some(dialog) = self.dialog.as_mut() {
            let before = dialog.position();
            let cmd = dialog.tick(&mut self.manager);
            if dialog.position() != before {
                events.push(SimEvent::Dialog {
                    at: self.elapsed,
                    text: dialog.current_text().map(str::to_string),
                });
            }
            self.collect(cmd, &mut events);
        }

        self.elapsed += self.frame_dt as f64;
        self.frames += 1;
        events
    }

    /// Step until `seconds` of real time have been simulated
    pub fn run_for<F>(&mut self, seconds: f64, mut on_event: F)
    where
        F: FnMut(&SimEvent),
    {
        while self.elapsed < seconds {
            for event in self.step() {
                on_event(&event);
            }
        }
        tracing::info!(frames = self.frames, elapsed = self.elapsed, "simulation finished");
    }

    fn advance_dialog(&mut self, events: &mut Vec<SimEvent>) -> Option<Cmd> {
        let Some(dialog) = self.dialog.as_mut() else {
            tracing::warn!("next_dialog event without a dialog configured");
            return None;
        };
        let cmd = dialog.display_next(&mut self.manager);
        events.push(SimEvent::Dialog {
            at: self.elapsed,
            text: dialog.current_text().map(str::to_string),
        });
        cmd
    }

    /// Turn a command and any queued notifications into observable events
    fn collect(&mut self, cmd: Option<Cmd>, events: &mut Vec<SimEvent>) {
        for shown in self.shown.borrow_mut().drain(..) {
            events.push(SimEvent::Shown {
                at: self.elapsed,
                game_time: shown.at,
                panel: shown.panel,
            });
        }

        for cmd in cmd.map(Cmd::flatten).unwrap_or_default() {
            match cmd {
                Cmd::SetTimeScale(scale) => events.push(SimEvent::TimeScale {
                    at: self.elapsed,
                    scale,
                }),
                Cmd::SetCursor(cursor) => events.push(SimEvent::Cursor {
                    at: self.elapsed,
                    cursor,
                }),
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
            }
        }
    }
}
