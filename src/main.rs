use anyhow::{Context, Result};
use clap::Parser;

use panel_manager::cli::CliArgs;
use panel_manager::config::ManagerConfig;
use panel_manager::runtime::{Script, SimEvent, Simulation};

fn main() -> Result<()> {
    panel_manager::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let config = match &run.config {
        Some(path) => ManagerConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ManagerConfig::load_or_default(),
    };
    let script = match &run.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };

    let mut sim = Simulation::new(&config, &script, run.fps)?;

    let mut output_error = None;
    sim.run_for(run.duration, |event| {
        if output_error.is_some() {
            return;
        }
        if run.json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{}", line),
                Err(e) => output_error = Some(e),
            }
        } else {
            println!("{}", describe(event));
        }
    });
    if let Some(e) = output_error {
        return Err(e).context("failed to encode event");
    }

    if !run.json {
        print_states(&sim);
    }
    Ok(())
}

fn describe(event: &SimEvent) -> String {
    match event {
        SimEvent::Shown { at, panel, .. } => {
            format!("{:>7.3}s  shown      {} {}", at, panel.id, panel.name)
        }
        SimEvent::TimeScale { at, scale } => format!("{:>7.3}s  time scale {}", at, scale),
        SimEvent::Cursor { at, cursor } => format!(
            "{:>7.3}s  cursor     {}",
            at,
            cursor.as_deref().unwrap_or("default")
        ),
        SimEvent::Dialog { at, text } => format!(
            "{:>7.3}s  dialog     {}",
            at,
            text.as_deref().unwrap_or("(hidden)")
        ),
    }
}

fn print_states(sim: &Simulation) {
    let manager = sim.manager();
    println!();
    println!("{:<12} {:<20} {:<13} {:>7}", "id", "name", "state", "opacity");
    for id in &manager.draw_order {
        if let Some(panel) = manager.panel(*id) {
            println!(
                "{:<12} {:<20} {:<13} {:>7.2}",
                panel.id.to_string(),
                panel.name,
                panel.state.to_string(),
                panel.opacity
            );
        }
    }
    println!(
        "\n{} frames, game time {:.3}s, {}",
        sim.frames(),
        manager.now(),
        if manager.is_paused() { "paused" } else { "running" }
    );
}
